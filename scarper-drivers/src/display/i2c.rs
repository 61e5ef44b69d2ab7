//! I2C port-expander transport for the HD44780
//!
//! The expander drives the panel's D4-D7, register-select, backlight and
//! enable lines from one byte. Each nibble is sent as two bus writes of
//! the same frame: first with the enable bit set, then with it clear, so
//! the panel latches on the falling strobe.

use embedded_hal::delay::DelayNs;
use scarper_hal::I2cBus;

use super::NibbleBus;

/// Common expander backpack address
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Backlight control bit, kept on
const BACKLIGHT: u8 = 0x08;
/// Enable strobe bit
const ENABLE: u8 = 0x04;
/// Register-select bit: set for data, clear for commands
const REGISTER_SELECT: u8 = 0x01;

/// Hold time between the strobe-high and strobe-low writes
const STROBE_US: u32 = 10;

/// The expander transport
pub struct ExpanderBus<I, D> {
    i2c: I,
    address: u8,
    delay: D,
}

impl<I, D> ExpanderBus<I, D>
where
    I: I2cBus,
    D: DelayNs,
{
    /// Create a transport for the expander at `address` on a shared bus
    pub fn new(i2c: I, address: u8, delay: D) -> Self {
        Self {
            i2c,
            address,
            delay,
        }
    }
}

impl<I, D> NibbleBus for ExpanderBus<I, D>
where
    I: I2cBus,
    D: DelayNs,
{
    type Error = I::Error;

    fn write_nibble(&mut self, nibble: u8, data: bool) -> Result<(), I::Error> {
        let rs = if data { REGISTER_SELECT } else { 0 };
        let frame = (nibble & 0xF0) | rs | BACKLIGHT;

        self.i2c.write(self.address, &[frame | ENABLE])?;
        self.delay.delay_us(STROBE_US);
        self.i2c.write(self.address, &[frame])?;
        self.delay.delay_us(STROBE_US);
        Ok(())
    }
}
