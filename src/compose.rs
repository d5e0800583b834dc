//! Turns one meeting record into a set of rendered card images.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::{NaiveDate, Utc};
use image::DynamicImage;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::graphics::{CardSpec, FieldSpec, render_card};
use crate::hyphenate::Hyphenator;
use crate::model::{AgendaItem, Faction, MeetingRecord};
use crate::templates::{Selection, TextColor, required_templates, select};

/// Boilerplate reference markers stripped from the end of item titles.
const TITLE_MARKERS: [&str; 3] = [
    "BT-Drucksache",
    "Ausschussdrucksache",
    "Bundestagsdrucksacke",
];

/// Sponsor lists longer than this are cut down with an ellipsis.
const MAX_SPONSOR_NAMES: usize = 3;

/// Renders cards for one notice at a time. Construction validates every
/// template asset up front so a missing file fails at startup, not in
/// the middle of a run.
pub struct Composer {
    config: RenderConfig,
    hyphenator: Hyphenator,
}

impl Composer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        for path in required_templates(&config.template_dir) {
            if !path.is_file() {
                return Err(anyhow!("missing template asset {}", path.display()));
            }
        }
        let hyphenator = Hyphenator::new(config.locale)?;
        Ok(Self { config, hyphenator })
    }

    /// Compose cards for the given meeting against the current date.
    pub fn compose(
        &self,
        link: &str,
        meeting: &MeetingRecord,
        items: &[AgendaItem],
    ) -> Result<Vec<PathBuf>> {
        self.compose_as_of(link, meeting, items, Utc::now().date_naive())
    }

    /// Compose cards, judging staleness against an explicit `today`.
    ///
    /// Returns the rendered file paths in agenda order. A stale meeting
    /// yields an empty vec; skipped items consume no output index. The
    /// run directory is derived from the link and must not already
    /// exist.
    pub fn compose_as_of(
        &self,
        link: &str,
        meeting: &MeetingRecord,
        items: &[AgendaItem],
        today: NaiveDate,
    ) -> Result<Vec<PathBuf>> {
        let session_date = meeting.parsed_session_date(self.config.locale)?;
        let age_days = (today - session_date).num_days();
        if age_days > self.config.staleness_days {
            info!(
                session_date = %session_date,
                age_days,
                "meeting is stale; rendering nothing"
            );
            return Ok(Vec::new());
        }

        let run_dir = self.run_dir(link);
        fs::create_dir_all(&self.config.output_root).with_context(|| {
            format!(
                "failed to create output root {}",
                self.config.output_root.display()
            )
        })?;
        fs::create_dir(&run_dir).with_context(|| {
            format!(
                "run directory {} already exists or cannot be created",
                run_dir.display()
            )
        })?;

        let period_label = format!("{}. Wahlperiode", meeting.legislative_period);
        let session_label = format!("{}. Sitzung", meeting.session_number);
        let location_label = format!("{}, {}", self.config.city, meeting.session_date);

        let mut files = Vec::new();
        for item in items {
            let (template, color) = match select(&item.factions, &self.config.template_dir) {
                Selection::Skip => {
                    debug!(number = item.number, "item not faction-attributable; skipped");
                    continue;
                }
                Selection::Card { template, color } => (template, color),
            };

            let spec = CardSpec {
                template,
                fields: vec![
                    field(sponsor_line(&item.factions), 200, 170, true, 37, 10, TextColor::White),
                    field(clean_title(&item.title), 42, 650, true, 62, -1, color),
                    field(
                        format!("TAGESORDNUNGSPUNKT  {}", item.number),
                        200,
                        170,
                        false,
                        22,
                        0,
                        color,
                    ),
                    field(meeting.committee.clone(), 200, 198, false, 18, 35, color),
                    field(period_label.clone(), 20, 1069, false, 18, 0, color),
                    field(session_label.clone(), 200, 1069, false, 18, 0, color),
                    field(location_label.clone(), 350, 1069, false, 18, 0, color),
                ],
            };

            let canvas = render_card(&spec, &self.hyphenator, &self.config)?;
            let path = run_dir.join(format!("{}.jpg", files.len()));
            DynamicImage::ImageRgba8(canvas)
                .to_rgb8()
                .save(&path)
                .with_context(|| format!("failed to save card image {}", path.display()))?;
            files.push(path);
        }

        info!(cards = files.len(), dir = %run_dir.display(), "composition finished");
        Ok(files)
    }

    /// Content-addressed run directory for a notice link.
    pub fn run_dir(&self, link: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(link.as_bytes());
        let digest = hasher.finalize();
        self.config.output_root.join(format!("{digest:x}"))
    }
}

fn field(
    text: String,
    x: i32,
    y: i32,
    center: bool,
    font_size: u32,
    width_offset: i32,
    color: TextColor,
) -> FieldSpec {
    FieldSpec {
        text,
        x,
        y,
        center,
        font_size,
        width_offset,
        color,
    }
}

/// Cut the title at the earliest boilerplate reference marker.
fn clean_title(title: &str) -> String {
    let cut = TITLE_MARKERS
        .iter()
        .filter_map(|marker| title.find(marker))
        .min();
    match cut {
        Some(idx) => title[..idx].trim_end().to_string(),
        None => title.trim().to_string(),
    }
}

/// Build the "Antrag der ..." sponsor line, listing at most
/// [`MAX_SPONSOR_NAMES`] sponsors before an ellipsis.
fn sponsor_line(factions: &[Faction]) -> String {
    match factions {
        [] => "Antrag".to_string(),
        [single] => format!("Antrag der {single}"),
        many => {
            let mut names: Vec<&str> = many.iter().map(Faction::canonical_name).collect();
            if names.len() > MAX_SPONSOR_NAMES {
                names.truncate(MAX_SPONSOR_NAMES);
                names.push("...");
            }
            format!("Antrag der {}", names.join(", "))
        }
    }
}
