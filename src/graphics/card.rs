use std::path::PathBuf;

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::config::RenderConfig;
use crate::graphics::paint::paint_block;
use crate::hyphenate::Hyphenator;
use crate::linebreak::wrap;
use crate::templates::TextColor;

/// One text block of a card: what to draw, where, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub text: String,
    pub x: i32,
    pub y: i32,
    /// Center the block vertically around the anchor.
    pub center: bool,
    pub font_size: u32,
    /// Added to the configured base width to give this field's
    /// printable width in characters.
    pub width_offset: i32,
    pub color: TextColor,
}

/// Fully resolved description of one card, accumulated field by field
/// and rendered in a single pass. Keeping the drawing operations in data
/// form avoids threading a mutated canvas through the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSpec {
    pub template: PathBuf,
    pub fields: Vec<FieldSpec>,
}

/// Open the card's background template and paint every field onto it.
///
/// Fields with empty text are skipped entirely, leaving the template
/// untouched at their anchor.
pub fn render_card(
    spec: &CardSpec,
    hyphenator: &Hyphenator,
    config: &RenderConfig,
) -> Result<RgbaImage> {
    let mut canvas = image::open(&spec.template)
        .with_context(|| format!("failed to open template {}", spec.template.display()))?
        .to_rgba8();
    for field in &spec.fields {
        if field.text.is_empty() {
            continue;
        }
        let width = (config.base_width as i32 + field.width_offset).max(1) as usize;
        let lines = wrap(hyphenator, &field.text, width, config.max_lines);
        paint_block(
            &mut canvas,
            &lines,
            field.x,
            field.y,
            field.center,
            field.font_size,
            config.line_gap,
            config.center_line_height,
            field.color.rgba(),
        );
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use image::Rgba;

    #[test]
    fn renders_fields_onto_the_template() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("default.png");
        RgbaImage::from_pixel(300, 300, Rgba([200, 200, 200, 255]))
            .save(&template)
            .unwrap();

        let spec = CardSpec {
            template,
            fields: vec![
                FieldSpec {
                    text: "Antrag der SPD".to_string(),
                    x: 20,
                    y: 40,
                    center: false,
                    font_size: 18,
                    width_offset: 0,
                    color: TextColor::Black,
                },
                FieldSpec {
                    text: String::new(),
                    x: 20,
                    y: 200,
                    center: false,
                    font_size: 18,
                    width_offset: 0,
                    color: TextColor::Black,
                },
            ],
        };
        let config = RenderConfig::default();
        let hyphenator = Hyphenator::new(Locale::German).unwrap();
        let canvas = render_card(&spec, &hyphenator, &config).unwrap();
        assert!(canvas.pixels().any(|p| *p == Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn missing_template_is_fatal() {
        let spec = CardSpec {
            template: PathBuf::from("/nonexistent/template.png"),
            fields: Vec::new(),
        };
        let config = RenderConfig::default();
        let hyphenator = Hyphenator::new(Locale::German).unwrap();
        assert!(render_card(&spec, &hyphenator, &config).is_err());
    }
}
