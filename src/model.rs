//! Records produced by the extraction oracle, consumed read-only.
//!
//! Field names are fixed by the oracle's JSON contract and therefore
//! German; the Rust-side names follow the glossary.

use std::fmt;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Locale;

/// Closed set of groupings eligible to sponsor an agenda item.
///
/// The oracle is instructed to emit exactly these strings; anything else
/// is an input-shape error and fails deserialization rather than
/// surfacing later as a missing template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    #[serde(rename = "CDU/CSU")]
    CduCsu,
    #[serde(rename = "Bündnis 90/Die Grünen")]
    Gruene,
    #[serde(rename = "AfD")]
    Afd,
    #[serde(rename = "Linke")]
    Linke,
    #[serde(rename = "SPD")]
    Spd,
    #[serde(rename = "FDP")]
    Fdp,
    #[serde(rename = "Bundesregierung")]
    Bundesregierung,
    #[serde(rename = "Nicht zutreffend")]
    NichtZutreffend,
}

impl Faction {
    /// Canonical spelling used in the sponsor line.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Faction::CduCsu => "CDU/CSU",
            Faction::Gruene => "Bündnis 90/Die Grünen",
            Faction::Afd => "AfD",
            Faction::Linke => "Linke",
            Faction::Spd => "SPD",
            Faction::Fdp => "FDP",
            Faction::Bundesregierung => "Bundesregierung",
            Faction::NichtZutreffend => "Nicht zutreffend",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// One discussion point of a committee meeting.
///
/// Item numbers may have gaps; the oracle drops items it was told to
/// ignore, which is intentional and not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    #[serde(rename = "Nummer")]
    pub number: u32,
    #[serde(rename = "Titel")]
    pub title: String,
    #[serde(rename = "Fraktion", default)]
    pub factions: Vec<Faction>,
}

/// Meeting-level metadata from the notice's first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRecord {
    #[serde(rename = "Ausschuss")]
    pub committee: String,
    #[serde(rename = "Wahlperiode")]
    pub legislative_period: u32,
    #[serde(rename = "Sitzungsnummer")]
    pub session_number: u32,
    /// Calendar date written out with German month names, e.g.
    /// `15. Februar 2024`. Kept verbatim for display; parse with
    /// [`parse_session_date`] when the actual date matters.
    #[serde(rename = "Sitzungsdatum")]
    pub session_date: String,
    #[serde(rename = "Ergänzungsmitteilung", default)]
    pub is_supplement: bool,
}

impl MeetingRecord {
    pub fn parsed_session_date(&self, locale: Locale) -> Result<NaiveDate, DateError> {
        parse_session_date(&self.session_date, locale)
    }

    /// Caption the posting caller attaches to the carousel: bracketed
    /// meeting fields, prefixed with `[Ergänzung]` for supplements.
    pub fn caption(&self) -> String {
        let mut caption = String::new();
        if self.is_supplement {
            caption.push_str("[Ergänzung] ");
        }
        caption.push_str(&format!("[{}] ", self.committee));
        caption.push_str(&format!(
            "[{}. Sitzung am {}] ",
            self.session_number, self.session_date
        ));
        caption.push_str(&format!("[{}. Wahlperiode]", self.legislative_period));
        caption
    }
}

/// Complete oracle payload: meeting metadata plus the agenda items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRecord {
    #[serde(flatten)]
    pub meeting: MeetingRecord,
    #[serde(rename = "Tagesordnungspunkte", default)]
    pub items: Vec<AgendaItem>,
}

impl NoticeRecord {
    /// Parse the oracle's JSON output. An empty object (`{}`) is the
    /// oracle's signal that the notice is not applicable and yields
    /// `None` ("nothing to render") rather than an error.
    pub fn from_json(raw: &str) -> Result<Option<Self>> {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("oracle payload is not valid JSON")?;
        if value.as_object().is_some_and(|map| map.is_empty()) {
            return Ok(None);
        }
        let record = serde_json::from_value(value)
            .context("oracle payload does not match the notice schema")?;
        Ok(Some(record))
    }
}

/// Session dates that cannot be understood abort the whole composition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("session date '{0}' does not match 'D. Monat JJJJ'")]
    Malformed(String),
    #[error("unknown month name '{0}' in session date")]
    UnknownMonth(String),
    #[error("'{0}' is not a valid calendar date")]
    OutOfRange(String),
}

/// Parse a written-out session date such as `3. Oktober 2024`.
///
/// chrono has no localized month-name parsing, so the month table comes
/// from the locale instead of a process-wide `setlocale`.
pub fn parse_session_date(input: &str, locale: Locale) -> Result<NaiveDate, DateError> {
    let malformed = || DateError::Malformed(input.to_string());
    let mut tokens = input.split_whitespace();
    let day_token = tokens.next().ok_or_else(malformed)?;
    let month_token = tokens.next().ok_or_else(malformed)?;
    let year_token = tokens.next().ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }

    let day: u32 = day_token
        .strip_suffix('.')
        .ok_or_else(malformed)?
        .parse()
        .map_err(|_| malformed())?;
    let month = locale
        .month_number(month_token)
        .ok_or_else(|| DateError::UnknownMonth(month_token.to_string()))?;
    let year: i32 = year_token.parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateError::OutOfRange(input.to_string()))
}
