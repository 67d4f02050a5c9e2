//! Control bytes and command parameters

/// Control bytes and parameter values used with the SSD1306 command set.
///
/// Every command byte on the wire is preceded by [`Flag::COMMAND_MODE`], a data
/// burst by a single [`Flag::DATA_MODE`].
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // I2C control bytes (Co and D/C# bits)
    pub const COMMAND_MODE: u8 = 0x80;
    pub const DATA_MODE: u8 = 0x40;

    // Memory Addressing Mode (0x20) values
    pub const ADDRESSING_HORIZONTAL: u8 = 0x00;
    pub const ADDRESSING_VERTICAL: u8 = 0x01; // unreliable on clone controllers
    pub const ADDRESSING_PAGE: u8 = 0x02;

    // Clock Divide (0xD5): suggested ratio
    pub const CLOCK_DIVIDE_DEFAULT: u8 = 0x80;

    // Multiplex Ratio (0xA8): 64 lines
    pub const MULTIPLEX_64: u8 = 0x3F;

    // Display Offset (0xD3)
    pub const NO_OFFSET: u8 = 0x00;

    // Charge Pump (0x8D)
    pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
    pub const CHARGE_PUMP_DISABLE: u8 = 0x10;

    // COM Pins (0xDA): alternative configuration, no left/right remap
    pub const COM_PINS_ALTERNATIVE: u8 = 0x12;

    // Contrast (0x81)
    pub const CONTRAST_DEFAULT: u8 = 0xCF;

    // Precharge Period (0xD9)
    pub const PRECHARGE_DEFAULT: u8 = 0xF1;

    // VCOMH Deselect Level (0xDB)
    pub const VCOMH_DEFAULT: u8 = 0x40;

    // Column and page window bounds
    pub const FIRST_COLUMN: u8 = 0;
    pub const LAST_COLUMN: u8 = 127;
    pub const FIRST_PAGE: u8 = 0;
    pub const LAST_PAGE: u8 = 7;
}
