//! Column addressing window
//!
//! Clone controllers do not advance the page address in vertical addressing mode,
//! so the controller stays in horizontal mode and every burst is preceded by a
//! column window of exactly one column (`0x21 c c`). A full 8 byte burst then fills
//! that column top to bottom, which is what vertical mode would have done.
//!
//! [`Cursor::Raw`] suspends the clipping for sequences that position the address
//! pointer themselves (vertical lines). Whoever enters raw mode restores the
//! previous cursor and resets the window to [`FULL_WINDOW`] when done.

use display_interface::DisplayError;

use crate::ssd1306::{cmd::Cmd, flag::Flag, WIDTH};

/// Commands restoring the full screen window, columns 0..=127 and pages 0..=7
pub const FULL_WINDOW: [u8; 6] = [
    Cmd::COLUMN_ADDRESS,
    Flag::FIRST_COLUMN,
    Flag::LAST_COLUMN,
    Cmd::PAGE_ADDRESS,
    Flag::FIRST_PAGE,
    Flag::LAST_PAGE,
];

/// Where the next data burst goes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// Clip to this single column before the burst, then move one column on
    Column(u8),
    /// Leave the window alone, the controller address pointer decides
    Raw,
}

/// Driver side copy of the controller window state
#[derive(Debug)]
pub struct AddressWindow {
    cursor: Cursor,
}

impl AddressWindow {
    /// Window state after power on: column 0
    pub const fn new() -> Self {
        AddressWindow {
            cursor: Cursor::Column(0),
        }
    }

    /// Current cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Point the cursor at `column`.
    pub fn set_column(&mut self, column: u8) -> Result<(), DisplayError> {
        if column >= WIDTH {
            log::warn!("Column {} is outside 0..{}", column, WIDTH);
            return Err(DisplayError::OutOfBoundsError);
        }
        self.cursor = Cursor::Column(column);
        Ok(())
    }

    /// Back to column 0
    pub fn home(&mut self) {
        self.cursor = Cursor::Column(0);
    }

    /// Stop clipping. Returns the cursor to hand back to [`AddressWindow::restore`].
    pub fn enter_raw_mode(&mut self) -> Cursor {
        core::mem::replace(&mut self.cursor, Cursor::Raw)
    }

    /// Put back a cursor saved by [`AddressWindow::enter_raw_mode`]
    pub fn restore(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    /// Called once per burst. Raw mode does not move.
    ///
    /// The column may end up at [`WIDTH`] after the last column was written; the
    /// drawing entry points validate the cursor before using it again.
    pub fn advance(&mut self) {
        if let Cursor::Column(column) = &mut self.cursor {
            *column = column.saturating_add(1).min(WIDTH);
        }
    }

    /// One column clip for the current cursor, `None` in raw mode
    pub fn clip_commands(&self) -> Option<[u8; 3]> {
        match self.cursor {
            Cursor::Column(column) => Some([Cmd::COLUMN_ADDRESS, column, column]),
            Cursor::Raw => None,
        }
    }
}

impl Default for AddressWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_follows_the_cursor() {
        let mut window = AddressWindow::new();
        assert_eq!(window.clip_commands(), Some([0x21, 0, 0]));

        window.set_column(42).unwrap();
        assert_eq!(window.clip_commands(), Some([0x21, 42, 42]));

        window.advance();
        assert_eq!(window.cursor(), Cursor::Column(43));
        assert_eq!(window.clip_commands(), Some([0x21, 43, 43]));
    }

    #[test]
    fn columns_past_the_edge_are_rejected() {
        let mut window = AddressWindow::new();
        window.set_column(127).unwrap();
        assert!(matches!(
            window.set_column(128),
            Err(DisplayError::OutOfBoundsError)
        ));
        assert_eq!(window.cursor(), Cursor::Column(127));
    }

    #[test]
    fn advance_stops_at_the_edge() {
        let mut window = AddressWindow::new();
        window.set_column(127).unwrap();
        window.advance();
        window.advance();
        assert_eq!(window.cursor(), Cursor::Column(WIDTH));
    }

    #[test]
    fn raw_mode_round_trip() {
        let mut window = AddressWindow::new();
        window.set_column(9).unwrap();

        let saved = window.enter_raw_mode();
        assert_eq!(window.cursor(), Cursor::Raw);
        assert_eq!(window.clip_commands(), None);

        window.advance();
        assert_eq!(window.cursor(), Cursor::Raw);

        window.restore(saved);
        assert_eq!(window.cursor(), Cursor::Column(9));
    }

    #[test]
    fn full_window_covers_the_screen() {
        assert_eq!(FULL_WINDOW, [0x21, 0, 127, 0x22, 0, 7]);
    }
}
