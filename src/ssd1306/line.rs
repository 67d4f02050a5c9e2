//! Line primitives computed straight into column bytes
//!
//! A horizontal line is a run of logical rows inside one column, so it is a single
//! burst of at most 8 bytes. A vertical line is one row across many columns: the
//! same bit in the same page of every column, written with the controller's own
//! page/column seek instead of the one column clip.

use core::ops::Range;

use display_interface::DisplayError;
use embedded_graphics::pixelcolor::BinaryColor;

use crate::ssd1306::{
    cmd::Cmd,
    geometry::{self, PixelPosition},
    COLUMN_BYTES, HEIGHT, WIDTH,
};

/// Rows `x1..x2` of one column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HorizontalRun {
    bytes: [u8; COLUMN_BYTES],
    start: usize,
    len: usize,
}

/// Compute the column bytes for rows `x1..x2` (`x2` exclusive).
pub fn horizontal_run(x1: u8, x2: u8) -> Result<HorizontalRun, DisplayError> {
    if x1 >= x2 || x2 > HEIGHT {
        log::warn!("Horizontal run {}..{} is empty or off screen", x1, x2);
        return Err(DisplayError::OutOfBoundsError);
    }

    let mut bytes = [0u8; COLUMN_BYTES];
    for row in x1..x2 {
        let p = geometry::locate(row);
        bytes[p.byte] |= p.mask;
    }

    let start = bytes.iter().position(|&b| b != 0).unwrap_or(COLUMN_BYTES);
    let len = bytes[start..].iter().take_while(|&&b| b != 0).count();

    Ok(HorizontalRun { bytes, start, len })
}

impl HorizontalRun {
    /// All 8 column bytes
    pub fn bytes(&self) -> &[u8; COLUMN_BYTES] {
        &self.bytes
    }

    /// Smallest byte range holding every set bit
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Bytes to put on the wire.
    ///
    /// The page window always starts at page 0, so the burst runs from byte 0 to
    /// the end of the span; leading bytes go out as zero.
    pub fn transmit_len(&self) -> usize {
        self.span().end
    }

    /// Column bytes for `color`, `Off` erases
    pub fn payload(&self, color: BinaryColor) -> [u8; COLUMN_BYTES] {
        match color {
            BinaryColor::On => self.bytes,
            BinaryColor::Off => [0; COLUMN_BYTES],
        }
    }
}

/// Row `x` across columns `y1..y2`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerticalRun {
    position: PixelPosition,
    columns: Range<u8>,
}

/// Locate row `x` for columns `y1..y2` (`y2` exclusive).
pub fn vertical_run(y1: u8, y2: u8, x: u8) -> Result<VerticalRun, DisplayError> {
    if y1 >= y2 || y2 > WIDTH || x >= HEIGHT {
        log::warn!("Vertical run {}..{} at row {} is empty or off screen", y1, y2, x);
        return Err(DisplayError::OutOfBoundsError);
    }
    Ok(VerticalRun {
        position: geometry::locate(x),
        columns: y1..y2,
    })
}

impl VerticalRun {
    /// Page holding the row
    pub fn page(&self) -> u8 {
        self.position.byte as u8
    }

    /// Columns covered
    pub fn columns(&self) -> Range<u8> {
        self.columns.clone()
    }

    /// Page select followed by the low and high nibble of the first column
    pub fn seek_commands(&self) -> [u8; 3] {
        let column = self.columns.start;
        [
            Cmd::PAGE_START + self.page(),
            Cmd::LOWER_COLUMN_START + (column & 0x0F),
            Cmd::HIGHER_COLUMN_START + ((column >> 4) & 0x0F),
        ]
    }

    /// A chunk worth of the row bit, one byte per column
    pub fn fill(&self) -> [u8; COLUMN_BYTES] {
        [self.position.mask; COLUMN_BYTES]
    }

    /// Burst lengths covering the run, 8 columns at a time
    pub fn chunks(&self) -> impl Iterator<Item = usize> {
        let total = usize::from(self.columns.end - self.columns.start);
        (0..total)
            .step_by(COLUMN_BYTES)
            .map(move |done| (total - done).min(COLUMN_BYTES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_run_spans_two_bytes() {
        let run = horizontal_run(4, 12).unwrap();
        assert_eq!(run.bytes(), &[0, 0, 0, 0, 0, 0, 0xF0, 0x0F]);
        assert_eq!(run.span(), 6..8);
        assert_eq!(run.transmit_len(), 8);
    }

    #[test]
    fn full_height_run_fills_the_column() {
        let run = horizontal_run(0, 64).unwrap();
        assert_eq!(run.bytes(), &[0xFF; 8]);
        assert_eq!(run.span(), 0..8);
        assert_eq!(run.payload(BinaryColor::On), [0xFF; 8]);
        assert_eq!(run.payload(BinaryColor::Off), [0; 8]);
    }

    #[test]
    fn bottom_run_is_a_one_byte_burst() {
        let run = horizontal_run(60, 64).unwrap();
        assert_eq!(run.bytes(), &[0x0F, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(run.span(), 0..1);
        assert_eq!(run.transmit_len(), 1);
    }

    #[test]
    fn single_row_run() {
        let run = horizontal_run(17, 18).unwrap();
        // row 17: byte 7 - 2, bit 7 - 1
        assert_eq!(run.span(), 5..6);
        assert_eq!(run.bytes()[5], 0x40);
    }

    #[test]
    fn empty_and_reversed_runs_are_rejected() {
        for (x1, x2) in [(5, 5), (9, 3), (0, 65)] {
            assert!(matches!(
                horizontal_run(x1, x2),
                Err(DisplayError::OutOfBoundsError)
            ));
        }
    }

    #[test]
    fn vertical_run_at_row_zero() {
        let run = vertical_run(0, 16, 0).unwrap();
        assert_eq!(run.page(), 7);
        assert_eq!(run.fill(), [0x80; 8]);
        assert_eq!(run.seek_commands(), [0xB7, 0x00, 0x10]);
        assert_eq!(run.chunks().collect::<Vec<_>>(), vec![8, 8]);
    }

    #[test]
    fn vertical_run_with_a_partial_chunk() {
        let run = vertical_run(0x1A, 0x2D, 63).unwrap();
        assert_eq!(run.page(), 0);
        assert_eq!(run.fill(), [0x01; 8]);
        assert_eq!(run.seek_commands(), [0xB0, 0x0A, 0x11]);
        assert_eq!(run.chunks().collect::<Vec<_>>(), vec![8, 8, 3]);
    }

    #[test]
    fn vertical_run_bounds() {
        assert!(vertical_run(0, 128, 63).is_ok());
        assert!(vertical_run(0, 129, 0).is_err());
        assert!(vertical_run(10, 10, 0).is_err());
        assert!(vertical_run(0, 10, 64).is_err());
    }
}
