//! Frame-buffer-less driver for 128x64 SSD1306 OLED modules on I2C.
//!
//! Text and lines are computed column by column and written straight into the
//! controller, see [`ssd1306`] for the addressing scheme and the workaround for
//! clone controllers.
#![cfg_attr(not(test), no_std)]

pub mod ssd1306;

pub use crate::ssd1306::cmd::Cmd;
pub use crate::ssd1306::flag::Flag;
pub use crate::ssd1306::pins::Pins;

pub use crate::ssd1306::driver::{Ssd1306, INIT_SEQUENCE};
pub use crate::ssd1306::font::{Font, FONT_5X7};
pub use crate::ssd1306::interface::BusDiagnostics;
pub use crate::ssd1306::window::Cursor;
pub use crate::ssd1306::{DEFAULT_ADDRESS, HEIGHT, WIDTH};

pub use display_interface::DisplayError;
pub use embedded_graphics::pixelcolor::BinaryColor;
