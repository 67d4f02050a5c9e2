//! Logical row to physical bit mapping
//!
//! The controller runs with mirrored segment remap (0xA1) and decrementing COM
//! scan (0xC8) to match how the panel is mounted. Within one 8 byte column the
//! byte order and the bit order are both reversed:
//!
//! | row `x` | byte          | mask                  |
//! |---------|---------------|-----------------------|
//! | 0       | 7             | `0x80`                |
//! | 7       | 7             | `0x01`                |
//! | 8       | 6             | `0x80`                |
//! | 63      | 0             | `0x01`                |
//!
//! Everything else in the driver works in logical rows and goes through
//! [`locate`].

use crate::ssd1306::HEIGHT;

/// Byte offset and bit mask of one logical row inside an 8 byte column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelPosition {
    /// Byte within the column, 0..8
    pub byte: usize,
    /// Single-bit mask within that byte
    pub mask: u8,
}

/// Map a logical row (0..64) to its position in a column buffer.
///
/// Rows are validated at the public API; only the low 6 bits are used here.
pub const fn locate(row: u8) -> PixelPosition {
    debug_assert!(row < HEIGHT);
    let row = row & (HEIGHT - 1);
    PixelPosition {
        byte: 7 - (row >> 3) as usize,
        mask: 1 << (7 - (row & 0b111)),
    }
}

/// Inverse of [`locate`]. Returns `None` if `mask` is not a single bit or
/// `byte` is outside the column.
pub const fn row_of(position: PixelPosition) -> Option<u8> {
    if position.byte >= 8 || !position.mask.is_power_of_two() {
        return None;
    }
    let bit = position.mask.trailing_zeros() as u8;
    Some(((7 - position.byte as u8) << 3) | (7 - bit))
}
