//! SSD1306 command encoding
//!
//! Each command is a value that encodes to at most three bytes. Operands
//! are masked to their valid bit width rather than validated, matching the
//! controller's own tolerance.

/// SSD1306 command opcodes
pub mod opcode {
    pub const ADDRESSING_MODE: u8 = 0x20;
    pub const COLUMN_RANGE: u8 = 0x21;
    pub const PAGE_RANGE: u8 = 0x22;
    pub const START_LINE: u8 = 0x40;
    pub const CONTRAST: u8 = 0x81;
    pub const SEGMENT_REMAP_OFF: u8 = 0xA0;
    pub const SEGMENT_REMAP_ON: u8 = 0xA1;
    pub const ALL_ON_DISABLE: u8 = 0xA4;
    pub const ALL_ON_ENABLE: u8 = 0xA5;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const MULTIPLEX: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const PAGE_SELECT: u8 = 0xB0;
    pub const COM_SCAN_NORMAL: u8 = 0xC0;
    pub const COM_SCAN_REMAP: u8 = 0xC8;
    pub const DISPLAY_OFFSET: u8 = 0xD3;
    pub const CLOCK_FREQ: u8 = 0xD5;
    pub const PRECHARGE: u8 = 0xD9;
    pub const COM_PINS: u8 = 0xDA;
    pub const COLUMN_LOW: u8 = 0x00;
    pub const COLUMN_HIGH: u8 = 0x10;
}

/// Memory addressing mode operand for [`Command::SetAddressingMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressingMode {
    /// Column auto-increment wrapping to the next page
    Horizontal = 0x00,
    /// Page auto-increment wrapping to the next column
    Vertical = 0x01,
    /// Column auto-increment within a single page
    Page = 0x02,
}

/// A single SSD1306 controller command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Select the memory addressing mode
    SetAddressingMode(AddressingMode),
    /// Column address window for horizontal/vertical modes (0-127)
    SetColumnRange { start: u8, end: u8 },
    /// Page address window for horizontal/vertical modes (0-7)
    SetPageRange { start: u8, end: u8 },
    /// Page-mode page select (0-7)
    SelectPage(u8),
    /// Page-mode column start, low nibble
    ColumnLow(u8),
    /// Page-mode column start, high nibble
    ColumnHigh(u8),
    /// Light every pixel regardless of RAM content
    AllPixelsOn(bool),
    /// Invert the RAM-to-pixel polarity
    Invert(bool),
    /// Display panel on/off
    DisplayOn(bool),
    /// Output contrast (0-255)
    Contrast(u8),
    /// Vertical COM offset
    DisplayOffset(u8),
    /// RAM row mapped to the top display line (0-63)
    StartLine(u8),
    /// COM pin hardware configuration
    ComPins {
        alternative: bool,
        left_right_remap: bool,
    },
    /// Multiplex ratio
    Multiplex(u8),
    /// Mirror horizontally by remapping SEG0
    SegmentRemap(bool),
    /// Mirror vertically by reversing COM scan
    ComScanRemap(bool),
    /// Oscillator frequency and clock divide (fixed tuning)
    OscillatorFrequency,
    /// Precharge period (fixed tuning)
    PrechargePeriod,
}

impl Command {
    /// Encode to the controller wire format
    ///
    /// Returns the byte buffer and the number of valid bytes in it.
    pub fn encode(self) -> ([u8; 3], usize) {
        match self {
            Command::SetAddressingMode(mode) => ([opcode::ADDRESSING_MODE, mode as u8, 0], 2),
            Command::SetColumnRange { start, end } => {
                ([opcode::COLUMN_RANGE, start & 0x7F, end & 0x7F], 3)
            }
            Command::SetPageRange { start, end } => {
                ([opcode::PAGE_RANGE, start & 0x07, end & 0x07], 3)
            }
            Command::SelectPage(page) => ([opcode::PAGE_SELECT | (page & 0x07), 0, 0], 1),
            Command::ColumnLow(column) => ([opcode::COLUMN_LOW | (column & 0x0F), 0, 0], 1),
            Command::ColumnHigh(column) => {
                ([opcode::COLUMN_HIGH | ((column >> 4) & 0x0F), 0, 0], 1)
            }
            Command::AllPixelsOn(active) => {
                let op = if active {
                    opcode::ALL_ON_ENABLE
                } else {
                    opcode::ALL_ON_DISABLE
                };
                ([op, 0, 0], 1)
            }
            Command::Invert(active) => {
                let op = if active {
                    opcode::INVERT_DISPLAY
                } else {
                    opcode::NORMAL_DISPLAY
                };
                ([op, 0, 0], 1)
            }
            Command::DisplayOn(active) => {
                let op = if active {
                    opcode::DISPLAY_ON
                } else {
                    opcode::DISPLAY_OFF
                };
                ([op, 0, 0], 1)
            }
            Command::Contrast(value) => ([opcode::CONTRAST, value, 0], 2),
            Command::DisplayOffset(offset) => ([opcode::DISPLAY_OFFSET, offset, 0], 2),
            Command::StartLine(line) => ([opcode::START_LINE | (line & 0x3F), 0, 0], 1),
            Command::ComPins {
                alternative,
                left_right_remap,
            } => {
                let mut operand = 0x02;
                if alternative {
                    operand |= 0x10;
                }
                if left_right_remap {
                    operand |= 0x20;
                }
                ([opcode::COM_PINS, operand, 0], 2)
            }
            Command::Multiplex(ratio) => ([opcode::MULTIPLEX, ratio, 0], 2),
            Command::SegmentRemap(active) => {
                let op = if active {
                    opcode::SEGMENT_REMAP_ON
                } else {
                    opcode::SEGMENT_REMAP_OFF
                };
                ([op, 0, 0], 1)
            }
            Command::ComScanRemap(active) => {
                let op = if active {
                    opcode::COM_SCAN_REMAP
                } else {
                    opcode::COM_SCAN_NORMAL
                };
                ([op, 0, 0], 1)
            }
            Command::OscillatorFrequency => ([opcode::CLOCK_FREQ, 0b1000_0001, 0], 2),
            Command::PrechargePeriod => ([opcode::PRECHARGE, 0x22, 0], 2),
        }
    }
}
