//! HD44780 character LCD driver
//!
//! One driver implements the panel's command protocol; the transport
//! behind it is swappable. Every command or character byte travels as two
//! 4-bit nibbles (high half first), and each nibble is latched by an
//! enable strobe. The two transports only differ in how the nibble and
//! strobe reach the panel:
//!
//! - [`i2c::ExpanderBus`] multiplexes nibble, register-select, backlight
//!   and enable onto one byte behind an I2C port expander
//! - [`parallel::ParallelBus`] drives four data lines plus dedicated
//!   register-select and enable pins

pub mod i2c;
pub mod parallel;

pub use i2c::ExpanderBus;
pub use parallel::ParallelBus;

use embedded_hal::delay::DelayNs;
use scarper_core::traits::CharacterDisplay;

/// Panel initialization: force 8-bit mode twice, drop to 4-bit, then
/// 2-line 5x8 font, display on, entry mode left-to-right
const INIT_SEQUENCE: [u8; 5] = [0x33, 0x32, 0x28, 0x0C, 0x06];

/// Clear display command
const CMD_CLEAR: u8 = 0x01;
/// Set DDRAM address command; the low 7 bits are the cell address
const CMD_SET_DDRAM: u8 = 0x80;

/// Recovery time the panel needs after clear and after each init step
const SETTLE_MS: u32 = 2;
/// Execution time for ordinary commands and characters
const COMMAND_US: u32 = 50;

/// Character grid geometry
///
/// The DDRAM row base addresses are quirks of the panel wiring: rows are
/// interleaved, not consecutive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Geometry {
    /// 16 columns, 2 rows
    Cols16Rows2,
    /// 20 columns, 4 rows
    Cols20Rows4,
}

impl Geometry {
    /// Columns in this geometry
    pub fn cols(self) -> u8 {
        match self {
            Geometry::Cols16Rows2 => 16,
            Geometry::Cols20Rows4 => 20,
        }
    }

    /// Rows in this geometry
    pub fn rows(self) -> u8 {
        match self {
            Geometry::Cols16Rows2 => 2,
            Geometry::Cols20Rows4 => 4,
        }
    }

    /// DDRAM base address of a row
    pub fn row_offset(self, row: u8) -> u8 {
        match self {
            Geometry::Cols16Rows2 => [0x00, 0x40][row as usize % 2],
            Geometry::Cols20Rows4 => [0, 64, 20, 84][row as usize % 4],
        }
    }
}

/// Transport carrying one nibble to the panel
///
/// `nibble` arrives in the high four bits; `data` selects the data
/// register (true, for characters) or the instruction register (false,
/// for commands). Implementations strobe enable around the nibble.
pub trait NibbleBus {
    /// Transport error
    type Error;

    /// Latch one nibble into the panel
    fn write_nibble(&mut self, nibble: u8, data: bool) -> Result<(), Self::Error>;
}

/// The panel driver, generic over its transport
pub struct Hd44780<B, D> {
    bus: B,
    delay: D,
    geometry: Geometry,
}

impl<B, D> Hd44780<B, D>
where
    B: NibbleBus,
    D: DelayNs,
{
    /// Create a driver. Call [`init`](CharacterDisplay::init) before use.
    pub fn new(bus: B, geometry: Geometry, delay: D) -> Self {
        Self {
            bus,
            delay,
            geometry,
        }
    }

    fn write_byte(&mut self, byte: u8, data: bool) -> Result<(), B::Error> {
        self.bus.write_nibble(byte & 0xF0, data)?;
        self.bus.write_nibble(byte << 4, data)?;
        self.delay.delay_us(COMMAND_US);
        Ok(())
    }

    fn command(&mut self, cmd: u8) -> Result<(), B::Error> {
        self.write_byte(cmd, false)
    }
}

impl<B, D> CharacterDisplay for Hd44780<B, D>
where
    B: NibbleBus,
    D: DelayNs,
{
    type Error = B::Error;

    fn init(&mut self) -> Result<(), B::Error> {
        for cmd in INIT_SEQUENCE {
            self.command(cmd)?;
            self.delay.delay_ms(SETTLE_MS);
        }
        self.clear()
    }

    fn clear(&mut self) -> Result<(), B::Error> {
        self.command(CMD_CLEAR)?;
        // The panel is busy far longer after clear than after other commands
        self.delay.delay_ms(SETTLE_MS);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), B::Error> {
        debug_assert!(col < self.geometry.cols() && row < self.geometry.rows());
        self.command(CMD_SET_DDRAM | (self.geometry.row_offset(row) + col))
    }

    fn write_text(&mut self, text: &str) -> Result<(), B::Error> {
        for byte in text.bytes() {
            self.write_byte(byte, true)?;
        }
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.geometry.cols(), self.geometry.rows())
    }
}
