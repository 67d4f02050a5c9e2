//! SSD1306 OLED Display Driver without a frame buffer
//!
//! Used with the common 0.96" 128x64 I2C OLED modules.
//!
//! There is no frame buffer. Text and line pixels are computed on the fly into an
//! 8 byte column buffer and written straight into the controller RAM.
//!
//! ### Clone controllers
//! Some SSD1306 clones (the slightly smaller PCBs with crisper panels, mounting hole
//! pitch differs from genuine modules) do not increment the page address in vertical
//! addressing mode. This driver never uses vertical mode. Vertical mode is simulated
//! in horizontal mode by clipping the column window to exactly one column before
//! every burst, see [`window`].
//!
//! ### Orientation
//! The panel is driven with mirrored segment remap and reversed COM scan, so a
//! logical row `x` lands on byte `7 - x / 8`, bit `7 - x % 8` of a column. The
//! transform lives in [`geometry`] and nowhere else.
//!
//! ### Usage
//! 1. create the driver with [`driver::Ssd1306::new`] and call
//!    [`driver::Ssd1306::init`]
//! 1. position text with [`driver::Ssd1306::set_column`] and draw it with
//!    [`driver::Ssd1306::draw_string`]
//! 1. draw separators with [`driver::Ssd1306::draw_horizontal_line`] and
//!    [`driver::Ssd1306::draw_vertical_line`]
//!
#![warn(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod driver;
pub mod font;
pub mod geometry;
pub mod glyph;
pub mod interface;
pub mod line;
pub mod window;

pub mod cmd;
pub mod flag;
pub mod pins;

/// Display width, controller columns
pub const WIDTH: u8 = 128;

/// Display height, logical rows (one bit each across the 8 pages of a column)
pub const HEIGHT: u8 = 64;

/// Pages per column, one byte each
pub const PAGES: u8 = 8;

/// Bytes in one full column burst
pub const COLUMN_BYTES: usize = PAGES as usize;

/// Default 7-bit I2C address of the module (0x78 in 8-bit wire notation)
pub const DEFAULT_ADDRESS: u8 = 0x3C;
