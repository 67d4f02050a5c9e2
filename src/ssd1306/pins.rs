//! Pin definitions for the OLED module wiring used by the demo binary

/// Pin configuration constants for the I2C display bus
pub struct Pins;

#[allow(dead_code)]
impl Pins {
    /// I2C data line
    pub const SDA: u8 = 21;
    /// I2C clock line
    pub const SCL: u8 = 22;
}
