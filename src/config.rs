use std::path::PathBuf;

use hyphenation::Language;

/// Locale for hyphenation and session-date month names.
///
/// Only German is deployed today; committee notices from other
/// parliaments would add a variant here rather than touch global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    German,
}

impl Locale {
    pub fn hyphenation_language(self) -> Language {
        match self {
            Locale::German => Language::German1996,
        }
    }

    /// Month number (1-12) for a written month name, as the extraction
    /// oracle emits it in `Sitzungsdatum`.
    pub fn month_number(self, name: &str) -> Option<u32> {
        let months: &[&str] = match self {
            Locale::German => &[
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ],
        };
        months
            .iter()
            .position(|m| *m == name)
            .map(|idx| idx as u32 + 1)
    }
}

/// Everything the composer needs that used to be process-global state
/// or magic numbers scattered through the layout code.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub locale: Locale,
    /// Directory holding one background PNG per faction plus `default.png`.
    pub template_dir: PathBuf,
    /// Root under which each run gets its content-addressed directory.
    pub output_root: PathBuf,
    /// Base printable width in characters; fields adjust it with an offset.
    pub base_width: u32,
    /// Hard cap on display lines per text block.
    pub max_lines: usize,
    /// Extra vertical units between lines on top of the font size.
    pub line_gap: u32,
    /// Per-line height used when vertically centering a block around its
    /// anchor. Tied to the template geometry, so it lives here and not in
    /// the painter.
    pub center_line_height: i32,
    /// Meetings whose session date is further in the past render nothing.
    pub staleness_days: i64,
    /// City shown in the location/date field.
    pub city: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            locale: Locale::German,
            template_dir: PathBuf::from("res/templates"),
            output_root: PathBuf::from(".temp"),
            base_width: 35,
            max_lines: 7,
            line_gap: 10,
            center_line_height: 90,
            staleness_days: 10,
            city: "Berlin".to_string(),
        }
    }
}
