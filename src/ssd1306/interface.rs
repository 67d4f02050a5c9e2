//! Display interface using I2C
//!
//! Each controller command travels as a `0x80` control byte followed by the
//! command byte. A data burst is a single `0x40` control byte followed by up to
//! 8 column bytes. Everything belonging to one step goes out in a single
//! `I2c::write`, i.e. one start/stop transaction.
use display_interface::DisplayError;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use crate::ssd1306::{
    flag::Flag,
    window::{AddressWindow, FULL_WINDOW},
    COLUMN_BYTES,
};

/// Largest transaction: one column clip (3 commands) plus a full burst
const MAX_FRAME: usize = 16;

/// Failed bus transactions seen so far
///
/// Drawing never stops on a bus error, so this is the only place a flaky
/// connection shows up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusDiagnostics {
    /// Number of I2C writes that returned an error
    pub failed_transactions: u32,
    /// Kind of the most recent error
    pub last_error: Option<ErrorKind>,
}

/// Bytes of one I2C write, control bytes included
struct Frame {
    bytes: [u8; MAX_FRAME],
    len: usize,
}

impl Frame {
    fn new() -> Self {
        Frame {
            bytes: [0; MAX_FRAME],
            len: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        self.bytes[self.len] = byte;
        self.len += 1;
    }

    fn commands(&mut self, commands: &[u8]) {
        for &command in commands {
            self.push(Flag::COMMAND_MODE);
            self.push(command);
        }
    }

    fn data(&mut self, data: &[u8]) {
        self.push(Flag::DATA_MODE);
        for &byte in data {
            self.push(byte);
        }
    }

    fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// The connection to the controller: bus, address and the window state that
/// decides how each burst is framed
pub struct I2cInterface<I2C> {
    i2c: I2C,
    /// 7-bit device address
    address: u8,
    window: AddressWindow,
    diagnostics: BusDiagnostics,
}

impl<I2C> I2cInterface<I2C> {
    /// Wrap an I2C bus. Nothing is sent yet.
    pub fn new(i2c: I2C, address: u8) -> Self {
        I2cInterface {
            i2c,
            address,
            window: AddressWindow::new(),
            diagnostics: BusDiagnostics::default(),
        }
    }

    /// 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Window state
    pub fn window(&self) -> &AddressWindow {
        &self.window
    }

    /// Window state, mutable
    pub fn window_mut(&mut self) -> &mut AddressWindow {
        &mut self.window
    }

    /// Bus failures recorded so far
    pub fn diagnostics(&self) -> BusDiagnostics {
        self.diagnostics
    }

    /// Forget recorded failures
    pub fn reset_diagnostics(&mut self) {
        self.diagnostics = BusDiagnostics::default();
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    fn write(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        match self.i2c.write(self.address, frame.as_slice()) {
            Ok(()) => Ok(()),
            Err(e) => {
                let kind = e.kind();
                log::warn!(
                    "I2C write of {} bytes to 0x{:02X} failed: {:?}",
                    frame.len,
                    self.address,
                    kind
                );
                self.diagnostics.failed_transactions =
                    self.diagnostics.failed_transactions.saturating_add(1);
                self.diagnostics.last_error = Some(kind);
                Err(DisplayError::BusWriteError)
            }
        }
    }

    /// Basic function for sending a single command
    pub fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        self.cmds(&[command])
    }

    /// Send several commands in one transaction
    pub fn cmds(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        if commands.len() * 2 > MAX_FRAME {
            return Err(DisplayError::InvalidFormatError);
        }
        let mut frame = Frame::new();
        frame.commands(commands);
        self.write(&frame)
    }

    /// Send up to 8 bytes of pixel data.
    ///
    /// Unless the window is in raw mode the column window is first clipped to the
    /// cursor column, and the cursor moves one column on afterwards. A burst
    /// shorter than a full column leaves the controller pointer mid-column, so it
    /// is followed by a window reset.
    pub fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        if data.len() > COLUMN_BYTES {
            return Err(DisplayError::InvalidFormatError);
        }

        let mut frame = Frame::new();
        if let Some(clip) = self.window.clip_commands() {
            frame.commands(&clip);
        }
        frame.data(data);

        log::trace!(
            "Burst of {} bytes at {:?}",
            data.len(),
            self.window.cursor()
        );
        let result = self.write(&frame);
        self.window.advance();

        if data.len() != COLUMN_BYTES {
            return result.and(self.reset_window());
        }
        result
    }

    /// Reset the controller window to the full screen
    pub fn reset_window(&mut self) -> Result<(), DisplayError> {
        log::trace!("Resetting window to full screen");
        self.cmds(&FULL_WINDOW)
    }
}
