//! SSD1306 Display Driver Implementation
//!
//! This module contains the public driver for the SSD1306 OLED controller. It owns the
//! I2C interface, the window state and the font, and turns drawing calls into bus
//! transactions immediately. Nothing is buffered.
//!
//! ## Function categories
//!
//! ### Initialization
//! - `new()` / `with_wire_address()` - wrap the bus, no traffic
//! - `init()` - controller setup sequence, font header, clear
//!
//! ### Display control
//! - `clear()`, `set_brightness()`, `set_inverse_video()`, `set_display_on()`
//!
//! ### Drawing
//! - `set_column()` + `draw_string()` - text, normal or inverse
//! - `draw_horizontal_line()` - rows `x1..x2` of column `y`
//! - `draw_vertical_line()` - row `x` across columns `y1..y2`
//!
//! ### Direct access
//! - `direct_cmd()`, `reset_window()`
//!
//! ## Error policy
//!
//! `init()` returns bus failures. After that, drawing is best effort: a failed
//! transaction is logged and counted in [`BusDiagnostics`], the rest of the sequence
//! still goes out, and the call returns `Ok`. Only invalid arguments are reported,
//! before anything is sent.
//!
//! Every drawing call leaves the controller window reset to the full screen.

pub use display_interface::DisplayError;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_hal::i2c::I2c;

use crate::ssd1306::{
    cmd::Cmd,
    flag::Flag,
    font::Font,
    glyph,
    interface::{BusDiagnostics, I2cInterface},
    line,
    window::Cursor,
    COLUMN_BYTES, WIDTH,
};

/// One-time controller setup, one command per transaction.
///
/// Horizontal addressing is used on purpose: clone controllers mishandle vertical
/// mode, see [`crate::ssd1306::window`].
pub const INIT_SEQUENCE: &[u8] = &[
    Cmd::DISPLAY_OFF,
    Cmd::NORMAL_DISPLAY,
    Cmd::DISPLAY_OFF,
    Cmd::CLOCK_DIVIDE,
    Flag::CLOCK_DIVIDE_DEFAULT,
    Cmd::MULTIPLEX_RATIO,
    Flag::MULTIPLEX_64,
    Cmd::DISPLAY_OFFSET,
    Flag::NO_OFFSET,
    Cmd::DISPLAY_START_LINE,
    Cmd::CHARGE_PUMP,
    Flag::CHARGE_PUMP_ENABLE,
    Cmd::SEGMENT_REMAP_MIRRORED, // mirror horizontally
    Cmd::COM_SCAN_DECREMENT,     // flip vertically
    Cmd::COM_PINS,
    Flag::COM_PINS_ALTERNATIVE,
    Cmd::SET_CONTRAST,
    Flag::CONTRAST_DEFAULT,
    Cmd::PRECHARGE_PERIOD,
    Flag::PRECHARGE_DEFAULT,
    Cmd::VCOMH_DESELECT,
    Flag::VCOMH_DEFAULT,
    Cmd::DISPLAY_RESUME_FROM_RAM,
    Cmd::NORMAL_DISPLAY,
    Cmd::DEACTIVATE_SCROLL,
    Cmd::MEMORY_ADDRESSING_MODE,
    Flag::ADDRESSING_HORIZONTAL,
];

const BLANK_COLUMN: [u8; COLUMN_BYTES] = [0; COLUMN_BYTES];

/// SSD1306 OLED Display Driver
///
/// ## Type Parameters
///
/// - `'f` - lifetime of the font table
/// - `I2C` - I2C bus the module is attached to
pub struct Ssd1306<'f, I2C> {
    interface: I2cInterface<I2C>,
    font: Font<'f>,
}

impl<'f, I2C> Ssd1306<'f, I2C> {
    /// Create the driver for the device at 7-bit `address`. Nothing is sent until
    /// [`Ssd1306::init`].
    pub fn new(i2c: I2C, address: u8, font: Font<'f>) -> Self {
        Ssd1306 {
            interface: I2cInterface::new(i2c, address),
            font,
        }
    }

    /// Create the driver from an 8-bit "wire" address such as `0x78`, as printed on
    /// most module silkscreens.
    pub fn with_wire_address(i2c: I2C, wire_address: u8, font: Font<'f>) -> Self {
        Self::new(i2c, wire_address >> 1, font)
    }

    /// Font used for strings
    pub fn font(&self) -> &Font<'f> {
        &self.font
    }

    /// Where the next string goes
    pub fn column(&self) -> Cursor {
        self.interface.window().cursor()
    }

    /// Bus failures seen so far
    pub fn diagnostics(&self) -> BusDiagnostics {
        self.interface.diagnostics()
    }

    /// Forget recorded bus failures
    pub fn reset_diagnostics(&mut self) {
        self.interface.reset_diagnostics();
    }

    /// Position the next string at controller column `column` (0..128).
    pub fn set_column(&mut self, column: u8) -> Result<(), DisplayError> {
        self.interface.window_mut().set_column(column)
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.interface.release()
    }
}

impl<'f, I2C> Ssd1306<'f, I2C>
where
    I2C: I2c,
{
    /// Run the setup sequence and clear the screen.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        log::info!(
            "Initializing SSD1306 at 0x{:02X}",
            self.interface.address()
        );

        for &command in INIT_SEQUENCE {
            if let Err(e) = self.interface.cmd(command) {
                log::error!("Init command 0x{:02X} failed: {:?}", command, e);
                return Err(e);
            }
        }

        log::info!("Font loaded, glyph width {}", self.font.width());

        if let Err(e) = self.clear_frame() {
            log::error!("Clearing display during init failed: {:?}", e);
            return Err(e);
        }

        log::info!("Display initialized");
        Ok(())
    }

    /// Blank the whole screen.
    ///
    /// The display is switched off while the 128 columns are written. There is no
    /// rollback: a failed transaction leaves whatever made it to the controller.
    pub fn clear(&mut self) {
        log::debug!("Clearing display");
        Self::settle(self.clear_frame());
    }

    fn clear_frame(&mut self) -> Result<(), DisplayError> {
        self.interface.window_mut().home();
        let mut result = self.interface.cmd(Cmd::DISPLAY_OFF);
        for _ in 0..WIDTH {
            result = result.and(self.interface.send_data(&BLANK_COLUMN));
        }
        result = result.and(self.interface.cmd(Cmd::DISPLAY_ON));

        self.interface.window_mut().home();
        result.and(self.interface.reset_window())
    }

    /// Set the contrast, 0..=255
    pub fn set_brightness(&mut self, level: u8) {
        let result = self.interface.cmd(Cmd::SET_CONTRAST);
        Self::settle(result.and(self.interface.cmd(level)));
    }

    /// Swap lit and dark pixels on the whole screen
    pub fn set_inverse_video(&mut self, inverse: bool) {
        let command = if inverse {
            Cmd::INVERSE_DISPLAY
        } else {
            Cmd::NORMAL_DISPLAY
        };
        Self::settle(self.interface.cmd(command));
    }

    /// Switch the panel on or off, RAM content is kept
    pub fn set_display_on(&mut self, on: bool) {
        let command = if on { Cmd::DISPLAY_ON } else { Cmd::DISPLAY_OFF };
        Self::settle(self.interface.cmd(command));
    }

    /// Reset the controller window to the full screen
    pub fn reset_window(&mut self) {
        Self::settle(self.interface.reset_window());
    }

    /// Send a raw command byte. Bus errors are returned.
    pub fn direct_cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        self.interface.cmd(command)
    }

    /// Draw `text` starting at the current column.
    ///
    /// Takes 7 columns, 8 when `inverse`, and leaves the cursor on the column after
    /// them, so consecutive calls stack lines of text.
    pub fn draw_string(&mut self, text: &str, inverse: bool) -> Result<(), DisplayError> {
        let Cursor::Column(column) = self.interface.window().cursor() else {
            return Err(DisplayError::OutOfBoundsError);
        };
        let raster = glyph::rasterize(&self.font, text, inverse)?;
        if usize::from(column) + raster.rows() > usize::from(WIDTH) {
            log::warn!(
                "String at column {} needs {} columns, screen ends at {}",
                column,
                raster.rows(),
                WIDTH
            );
            return Err(DisplayError::OutOfBoundsError);
        }

        log::debug!("Drawing {:?} at column {} (inverse: {})", text, column, inverse);
        let mut result = Ok(());
        for bytes in raster.columns() {
            result = result.and(self.interface.send_data(bytes));
        }
        Self::settle(result.and(self.interface.reset_window()));
        Ok(())
    }

    /// Draw rows `x1..x2` of column `y`; `BinaryColor::Off` erases them.
    pub fn draw_horizontal_line(
        &mut self,
        x1: u8,
        x2: u8,
        y: u8,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        let run = line::horizontal_run(x1, x2)?;
        self.interface.window_mut().set_column(y)?;

        log::debug!("Horizontal line {}..{} at column {} ({:?})", x1, x2, y, color);
        let payload = run.payload(color);
        let len = run.transmit_len();
        let mut result = self.interface.send_data(&payload[..len]);
        // a partial burst has already reset the window
        if len == COLUMN_BYTES {
            result = result.and(self.interface.reset_window());
        }
        Self::settle(result);
        Ok(())
    }

    /// Draw row `x` across columns `y1..y2`.
    ///
    /// The one column clip cannot express a row across columns, so this falls back to
    /// page/column seeking and raw bursts. Only seeking is involved, which clone
    /// controllers handle correctly.
    pub fn draw_vertical_line(&mut self, y1: u8, y2: u8, x: u8) -> Result<(), DisplayError> {
        let run = line::vertical_run(y1, y2, x)?;

        log::debug!("Vertical line {}..{} at row {} (page {})", y1, y2, x, run.page());
        let mut result = self.interface.reset_window();
        for command in run.seek_commands() {
            result = result.and(self.interface.cmd(command));
        }

        let saved = self.interface.window_mut().enter_raw_mode();
        let fill = run.fill();
        for len in run.chunks() {
            result = result.and(self.interface.send_data(&fill[..len]));
        }
        self.interface.window_mut().restore(saved);

        Self::settle(result.and(self.interface.reset_window()));
        Ok(())
    }

    /// Bus failures while drawing are already counted; drawing carries on.
    fn settle(result: Result<(), DisplayError>) {
        if result.is_err() {
            log::debug!("Operation finished with failed bus transactions");
        }
    }
}
