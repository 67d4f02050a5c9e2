//! SSD1306 command opcodes

/// SSD1306 command opcodes, sent after a [`crate::ssd1306::flag::Flag::COMMAND_MODE`] byte
pub struct Cmd;
#[allow(dead_code, missing_docs)]
impl Cmd {
    // Fundamental
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DISPLAY_RESUME_FROM_RAM: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERSE_DISPLAY: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;

    // Scrolling
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;

    // Addressing
    pub const MEMORY_ADDRESSING_MODE: u8 = 0x20;
    pub const COLUMN_ADDRESS: u8 = 0x21;
    pub const PAGE_ADDRESS: u8 = 0x22;
    pub const PAGE_START: u8 = 0xB0;
    pub const LOWER_COLUMN_START: u8 = 0x00;
    pub const HIGHER_COLUMN_START: u8 = 0x10;

    // Hardware configuration
    pub const DISPLAY_START_LINE: u8 = 0x40;
    pub const SEGMENT_REMAP_MIRRORED: u8 = 0xA1;
    pub const MULTIPLEX_RATIO: u8 = 0xA8;
    pub const COM_SCAN_DECREMENT: u8 = 0xC8;
    pub const DISPLAY_OFFSET: u8 = 0xD3;
    pub const COM_PINS: u8 = 0xDA;

    // Timing and driving
    pub const CLOCK_DIVIDE: u8 = 0xD5;
    pub const PRECHARGE_PERIOD: u8 = 0xD9;
    pub const VCOMH_DESELECT: u8 = 0xDB;
    pub const CHARGE_PUMP: u8 = 0x8D;
}

/*
Datasheet names for the opcodes above:
0x81 - Set Contrast Control
0xA4 - Entire Display ON, resume to RAM content
0xA6/0xA7 - Set Normal/Inverse Display
0xAE/0xAF - Set Display OFF/ON
0x20 - Set Memory Addressing Mode
0x21 - Set Column Address (start, end)
0x22 - Set Page Address (start, end)
0xB0..0xB7 - Set Page Start Address for page addressing mode
0x00..0x0F / 0x10..0x1F - Set Lower/Higher Column Start Address
*/
