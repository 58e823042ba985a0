//! Glyph rendering
//!
//! Expands font glyph masks into framebuffer pixels with integer scaling,
//! inversion and optional background fill. All writes go through
//! [`Framebuffer::set_pixel`], so text hanging off the edge of the buffer
//! is clipped pixel by pixel.

use crate::font::{MonoFont, GLYPH_ROWS};
use crate::framebuffer::Framebuffer;

/// Text rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    /// Integer scale factor applied on both axes; 1 reproduces the font
    /// bitmap exactly, 0 draws nothing
    pub scale: usize,
    /// Blank pixel columns between glyphs, not scaled
    pub spacing: usize,
    /// Swap foreground and background pixel values
    pub invert: bool,
    /// Also paint the off pixels of each glyph (solid text box)
    pub background: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            scale: 1,
            spacing: 1,
            invert: false,
            background: false,
        }
    }
}

/// Draw a string with its top-left corner at `(x, y)`
///
/// The pen advances `scale * font.cols() + spacing` pixels per character.
/// With `background` false only the set mask bits are plotted; with it
/// true the whole glyph cell is painted, using `invert` to decide which
/// value is foreground.
pub fn draw_text<const CAP: usize>(
    fb: &mut Framebuffer<CAP>,
    x: usize,
    y: usize,
    text: &str,
    font: &MonoFont,
    style: &TextStyle,
) {
    let mut pen_x = x;
    for ch in text.chars() {
        let glyph = font.glyph(ch);
        for (col, &mask) in glyph.iter().enumerate() {
            for row in 0..GLYPH_ROWS {
                let bit = (mask >> row) & 1 != 0;
                if !bit && !style.background {
                    continue;
                }
                let on = bit != style.invert;
                for sy in 0..style.scale {
                    for sx in 0..style.scale {
                        fb.set_pixel(
                            pen_x + col * style.scale + sx,
                            y + row * style.scale + sy,
                            on,
                        );
                    }
                }
            }
        }
        pen_x += style.scale * font.cols() + style.spacing;
    }
}
