//! String rasterizer
//!
//! A string is rendered into a 64 byte scratch buffer: 8 column buffers of 8 bytes,
//! one per glyph row. Glyph row `r` ends up in controller column `cursor + r`, and
//! the characters of the string run along the 64 logical rows of those columns.
//!
//! Inverse text lights every pixel the glyph leaves dark, including an 8th row
//! under the glyph and a spacer column after each character, which gives the
//! solid selection bar used for highlighted menu entries.

use display_interface::DisplayError;

use crate::ssd1306::{font::Font, geometry, COLUMN_BYTES, HEIGHT, PAGES};

/// Rows of a glyph
pub const GLYPH_HEIGHT: u8 = 7;

/// Size of the scratch buffer
pub const TEXT_BUFFER_LEN: usize = COLUMN_BYTES * PAGES as usize;

/// Rendered string, ready to be streamed one column buffer at a time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRaster {
    bytes: [u8; TEXT_BUFFER_LEN],
    inverse: bool,
    width: usize,
}

impl TextRaster {
    /// Whole scratch buffer, glyph row `r` at `r * 8..r * 8 + 8`
    pub fn as_bytes(&self) -> &[u8; TEXT_BUFFER_LEN] {
        &self.bytes
    }

    /// Whether this was rendered inverse
    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    /// Logical rows used by the string, spacer columns included
    pub fn width(&self) -> usize {
        self.width
    }

    /// Controller columns the string covers: 7, or 8 with the inverse underline
    pub fn rows(&self) -> usize {
        if self.inverse {
            usize::from(GLYPH_HEIGHT) + 1
        } else {
            usize::from(GLYPH_HEIGHT)
        }
    }

    /// Column buffers to send, in order
    pub fn columns(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.bytes.chunks_exact(COLUMN_BYTES).take(self.rows())
    }

    /// Whether glyph row `row` is lit at logical row `x`. Anything outside the
    /// 8 x 64 buffer is dark.
    pub fn is_lit(&self, row: u8, x: u8) -> bool {
        if row >= PAGES || x >= HEIGHT {
            return false;
        }
        let p = geometry::locate(x);
        self.bytes[usize::from(row) * COLUMN_BYTES + p.byte] & p.mask != 0
    }
}

/// Render `text` with `font`.
///
/// Every character takes `font.width() + 1` logical rows; the whole string has to
/// fit the 64 rows of the buffer.
pub fn rasterize(font: &Font<'_>, text: &str, inverse: bool) -> Result<TextRaster, DisplayError> {
    let width = text.chars().count() * font.advance();
    if width > usize::from(HEIGHT) {
        log::warn!(
            "String {:?} needs {} rows, only {} available",
            text,
            width,
            HEIGHT
        );
        return Err(DisplayError::OutOfBoundsError);
    }

    let mut bytes = [0u8; TEXT_BUFFER_LEN];
    let mut x = 0u8;
    for c in text.chars() {
        let glyph = font.glyph(c).ok_or_else(|| {
            log::warn!("No glyph for {:?}", c);
            DisplayError::InvalidFormatError
        })?;
        for &column in glyph {
            plot(&mut bytes, column, x, inverse);
            x += 1;
        }
        // spacer
        if inverse {
            plot(&mut bytes, 0, x, true);
        }
        x += 1;
    }

    Ok(TextRaster {
        bytes,
        inverse,
        width,
    })
}

/// Plot one font column at logical row `x`.
fn plot(bytes: &mut [u8; TEXT_BUFFER_LEN], column: u8, x: u8, inverse: bool) {
    let p = geometry::locate(x);
    let rows = if inverse {
        GLYPH_HEIGHT + 1
    } else {
        GLYPH_HEIGHT
    };
    for row in 0..rows {
        let set = column & (1 << row) != 0;
        if set != inverse {
            bytes[usize::from(row) * COLUMN_BYTES + p.byte] |= p.mask;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssd1306::font::FONT_5X7;

    #[test]
    fn single_glyph_round_trips() {
        let raster = rasterize(&FONT_5X7, "A", false).unwrap();
        let glyph = FONT_5X7.glyph('A').unwrap();

        for (x, &column) in glyph.iter().enumerate() {
            let mut decoded = 0u8;
            for row in 0..GLYPH_HEIGHT {
                if raster.is_lit(row, x as u8) {
                    decoded |= 1 << row;
                }
            }
            assert_eq!(decoded, column, "column {}", x);
        }
        // spacer stays dark
        assert!((0..8).all(|row| !raster.is_lit(row, 5)));
    }

    #[test]
    fn lookups_outside_the_buffer_are_dark() {
        let raster = rasterize(&FONT_5X7, " ", true).unwrap();
        assert!(raster.is_lit(7, 0));
        assert!(!raster.is_lit(8, 0));
        assert!(!raster.is_lit(u8::MAX, 0));
        assert!(!raster.is_lit(0, 64));
        assert!(!raster.is_lit(7, u8::MAX));
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = rasterize(&FONT_5X7, "Menu 1", true).unwrap();
        let b = rasterize(&FONT_5X7, "Menu 1", true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn inverse_is_the_complement_of_normal() {
        let normal = rasterize(&FONT_5X7, "Ok", false).unwrap();
        let inverse = rasterize(&FONT_5X7, "Ok", true).unwrap();

        for x in 0..normal.width() as u8 {
            for row in 0..GLYPH_HEIGHT {
                assert_ne!(normal.is_lit(row, x), inverse.is_lit(row, x));
            }
            assert!(!normal.is_lit(GLYPH_HEIGHT, x));
            assert!(inverse.is_lit(GLYPH_HEIGHT, x));
        }
    }

    #[test]
    fn first_glyph_lands_in_the_last_byte() {
        let table = [1, 7, 0x00, 0x7F];
        let font = Font::new(&table).unwrap();
        let raster = rasterize(&font, "!", false).unwrap();

        for (row, column) in raster.columns().enumerate() {
            assert_eq!(column, &[0, 0, 0, 0, 0, 0, 0, 0x80], "row {}", row);
        }
        assert_eq!(raster.columns().count(), 7);
    }

    #[test]
    fn inverse_sends_the_underline_column() {
        let raster = rasterize(&FONT_5X7, " ", true).unwrap();
        assert_eq!(raster.rows(), 8);
        let columns: Vec<&[u8]> = raster.columns().collect();
        assert_eq!(columns.len(), 8);
        // 5 glyph columns plus the spacer, rows 0..6 of a blank glyph
        for column in &columns {
            assert_eq!(column, &&[0, 0, 0, 0, 0, 0, 0, 0xFC][..]);
        }
    }

    #[test]
    fn ten_characters_fit_eleven_do_not() {
        assert_eq!(rasterize(&FONT_5X7, "0123456789", false).unwrap().width(), 60);
        assert!(matches!(
            rasterize(&FONT_5X7, "0123456789A", false),
            Err(DisplayError::OutOfBoundsError)
        ));
    }

    #[test]
    fn unknown_characters_are_rejected() {
        assert!(matches!(
            rasterize(&FONT_5X7, "caf\u{e9}", false),
            Err(DisplayError::InvalidFormatError)
        ));
    }

    #[test]
    fn empty_string_is_blank() {
        let raster = rasterize(&FONT_5X7, "", false).unwrap();
        assert_eq!(raster.width(), 0);
        assert_eq!(raster.as_bytes(), &[0; TEXT_BUFFER_LEN]);
    }
}
