//! Core library for rendering committee-notice agenda items into
//! captioned social-media card images.

mod compose;
mod config;
mod graphics;
mod hyphenate;
mod linebreak;
mod model;
mod templates;

pub use compose::Composer;
pub use config::{Locale, RenderConfig};
pub use graphics::{CardSpec, FieldSpec, paint_block, render_card};
pub use hyphenate::{Fragment, Hyphenator};
pub use linebreak::{TRUNCATION_MARKER, wrap};
pub use model::{
    AgendaItem, DateError, Faction, MeetingRecord, NoticeRecord, parse_session_date,
};
pub use templates::{Selection, TextColor, required_templates, select};
