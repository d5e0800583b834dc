//! Drawing layer: bitmap glyph painting and single-pass card rendering.

mod card;
mod paint;

pub use card::{CardSpec, FieldSpec, render_card};
pub use paint::{GLYPH_HEIGHT, GLYPH_WIDTH, paint_block};
