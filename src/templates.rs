//! Maps an item's sponsoring factions to a background template and text
//! color.

use std::path::{Path, PathBuf};

use image::Rgba;

use crate::model::Faction;

/// Text colors used on the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn rgba(self) -> Rgba<u8> {
        match self {
            TextColor::Black => Rgba([0x00, 0x00, 0x00, 0xff]),
            TextColor::White => Rgba([0xff, 0xff, 0xff, 0xff]),
        }
    }
}

/// Outcome of template selection. `Skip` is a content-filtering result,
/// not an error: items not attributable to a faction produce no card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Card { template: PathBuf, color: TextColor },
    Skip,
}

/// Resolve the background template and text color for an item's
/// sponsors.
///
/// Single sponsors get their branded template; several sponsors share
/// the default template regardless of which factions are involved, as
/// does an item with no sponsor data at all. The match is exhaustive
/// over the closed faction set, so a missing asset can only be a
/// configuration error caught at startup, never a surprise key.
pub fn select(factions: &[Faction], template_dir: &Path) -> Selection {
    match factions {
        [] => card(template_dir, "default", TextColor::Black),
        [faction] => match faction {
            Faction::NichtZutreffend => Selection::Skip,
            Faction::CduCsu => card(template_dir, "cdu", TextColor::White),
            Faction::Gruene => card(template_dir, "gruene", TextColor::Black),
            Faction::Afd => card(template_dir, "afd", TextColor::Black),
            Faction::Linke => card(template_dir, "linke", TextColor::Black),
            Faction::Spd => card(template_dir, "spd", TextColor::Black),
            Faction::Fdp => card(template_dir, "fdp", TextColor::Black),
            Faction::Bundesregierung => card(template_dir, "bundesregierung", TextColor::Black),
        },
        _ => card(template_dir, "default", TextColor::Black),
    }
}

fn card(template_dir: &Path, key: &str, color: TextColor) -> Selection {
    Selection::Card {
        template: template_dir.join(format!("{key}.png")),
        color,
    }
}

/// Every asset `select` can resolve, for eager validation at startup.
pub fn required_templates(template_dir: &Path) -> Vec<PathBuf> {
    [
        "default",
        "cdu",
        "gruene",
        "afd",
        "linke",
        "spd",
        "fdp",
        "bundesregierung",
    ]
    .iter()
    .map(|key| template_dir.join(format!("{key}.png")))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dir() -> PathBuf {
        PathBuf::from("res/templates")
    }

    #[test]
    fn cdu_gets_white_text_on_its_branded_template() {
        assert_eq!(
            select(&[Faction::CduCsu], &dir()),
            Selection::Card {
                template: dir().join("cdu.png"),
                color: TextColor::White
            }
        );
    }

    #[test]
    fn single_sponsors_map_to_their_own_template() {
        for (faction, key) in [
            (Faction::Gruene, "gruene.png"),
            (Faction::Afd, "afd.png"),
            (Faction::Linke, "linke.png"),
            (Faction::Spd, "spd.png"),
            (Faction::Fdp, "fdp.png"),
            (Faction::Bundesregierung, "bundesregierung.png"),
        ] {
            assert_eq!(
                select(&[faction], &dir()),
                Selection::Card {
                    template: dir().join(key),
                    color: TextColor::Black
                }
            );
        }
    }

    #[test]
    fn not_applicable_items_are_skipped() {
        assert_eq!(select(&[Faction::NichtZutreffend], &dir()), Selection::Skip);
    }

    #[test]
    fn multi_sponsor_items_share_the_default_template() {
        let selection = select(&[Faction::Spd, Faction::Fdp, Faction::Gruene], &dir());
        assert_eq!(
            selection,
            Selection::Card {
                template: dir().join("default.png"),
                color: TextColor::Black
            }
        );
    }

    #[test]
    fn no_sponsor_data_falls_back_to_the_default_template() {
        assert_eq!(
            select(&[], &dir()),
            Selection::Card {
                template: dir().join("default.png"),
                color: TextColor::Black
            }
        );
    }

    #[test]
    fn required_templates_cover_the_whole_faction_set() {
        let paths = required_templates(&dir());
        assert_eq!(paths.len(), 8);
        assert!(paths.contains(&dir().join("default.png")));
        assert!(paths.contains(&dir().join("bundesregierung.png")));
    }
}
