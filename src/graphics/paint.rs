use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

/// Draw one multi-line text block anchored at `(x, y)`.
///
/// Line advance is `font_size + line_gap`. With `center` set, the whole
/// block shifts up by half its height (`center_line_height` per line) so
/// it centers around the anchor instead of starting there. An empty
/// `lines` slice leaves the canvas untouched.
#[allow(clippy::too_many_arguments)]
pub fn paint_block(
    canvas: &mut RgbaImage,
    lines: &[String],
    x: i32,
    y: i32,
    center: bool,
    font_size: u32,
    line_gap: u32,
    center_line_height: i32,
    color: Rgba<u8>,
) {
    if lines.is_empty() {
        return;
    }
    let mut offset_y = if center {
        -(center_line_height * lines.len() as i32) / 2
    } else {
        0
    };
    for line in lines {
        draw_line(canvas, line, x, y + offset_y, font_size, color);
        offset_y += (font_size + line_gap) as i32;
    }
}

fn draw_line(canvas: &mut RgbaImage, text: &str, x: i32, y: i32, font_size: u32, color: Rgba<u8>) {
    let scale = (font_size / GLYPH_HEIGHT).max(1);
    let advance = ((GLYPH_WIDTH + 1) * scale) as i32;
    let mut cursor_x = x;
    for ch in text.chars() {
        draw_glyph(canvas, cursor_x, y, ch, color, scale);
        cursor_x += advance;
    }
}

fn draw_glyph(canvas: &mut RgbaImage, x: i32, y: i32, ch: char, color: Rgba<u8>, scale: u32) {
    let pattern = glyph_pattern(ch);
    for (row, bits) in pattern.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                let px = x + (col * scale) as i32;
                let py = y + (row as u32 * scale) as i32;
                draw_filled_rect_mut(canvas, Rect::at(px, py).of_size(scale, scale), color);
            }
        }
    }
}

/// 5x7 display glyphs covering the German card repertoire. Unmapped
/// characters render blank.
#[rustfmt::skip]
fn glyph_pattern(ch: char) -> [u8; GLYPH_HEIGHT as usize] {
    match ch.to_ascii_uppercase() {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        'Ä' | 'ä' => [0b01010, 0b00100, 0b01010, 0b10001, 0b11111, 0b10001, 0b10001],
        'Ö' | 'ö' => [0b01010, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'Ü' | 'ü' => [0b01010, 0b00000, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'ß' => [0b01110, 0b10001, 0b10110, 0b10001, 0b10001, 0b10110, 0b10000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00110],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00100, 0b01000],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        ';' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00110, 0b00100, 0b01000],
        '/' => [0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b10000, 0b00000],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '[' => [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
        ']' => [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
        '\'' => [0b00100, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        '"' => [0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        '?' => [0b01110, 0b10001, 0b00010, 0b00100, 0b00100, 0b00000, 0b00100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '&' => [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '%' => [0b11001, 0b11010, 0b00100, 0b01000, 0b10110, 0b00110, 0b00000],
        '§' => [0b01110, 0b10000, 0b01110, 0b10001, 0b01110, 0b00001, 0b01110],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
    }

    fn painted_pixels(canvas: &RgbaImage) -> usize {
        canvas
            .pixels()
            .filter(|p| **p != Rgba([255, 255, 255, 255]))
            .count()
    }

    #[test]
    fn empty_block_is_a_no_op() {
        let mut canvas = blank(100, 100);
        paint_block(&mut canvas, &[], 10, 10, true, 18, 10, 90, Rgba([0, 0, 0, 255]));
        assert_eq!(painted_pixels(&canvas), 0);
    }

    #[test]
    fn text_marks_the_canvas() {
        let mut canvas = blank(400, 100);
        let lines = vec!["Antrag".to_string()];
        paint_block(&mut canvas, &lines, 10, 10, false, 18, 10, 90, Rgba([0, 0, 0, 255]));
        assert!(painted_pixels(&canvas) > 0);
    }

    #[test]
    fn centering_shifts_the_block_upwards() {
        let lines = vec!["A".to_string(), "B".to_string()];
        let mut plain = blank(100, 400);
        let mut centered = blank(100, 400);
        paint_block(&mut plain, &lines, 10, 200, false, 18, 10, 90, Rgba([0, 0, 0, 255]));
        paint_block(&mut centered, &lines, 10, 200, true, 18, 10, 90, Rgba([0, 0, 0, 255]));

        let top_of = |canvas: &RgbaImage| {
            canvas
                .enumerate_pixels()
                .filter(|(_, _, p)| **p != Rgba([255, 255, 255, 255]))
                .map(|(_, y, _)| y)
                .min()
                .unwrap()
        };
        // Two lines centered around y=200 start 90 units higher.
        assert_eq!(top_of(&plain) - top_of(&centered), 90);
    }

    #[test]
    fn out_of_bounds_anchors_do_not_panic() {
        let mut canvas = blank(50, 50);
        let lines = vec!["Überlang".to_string()];
        paint_block(&mut canvas, &lines, 40, -30, true, 62, 10, 90, Rgba([0, 0, 0, 255]));
    }
}
