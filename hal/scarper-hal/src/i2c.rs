//! I2C bus abstractions
//!
//! Provides a trait for I2C master operations that can be implemented
//! by chip-specific HALs. Both the LCD expander and the RTC sit on the
//! same physical bus, so implementations must allow two driver instances
//! to share one peripheral (the RP2040 HAL does this with a `RefCell`).

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given 7-bit address
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// This is commonly used to write a register address then read data.
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz) - the LCD expander's comfortable speed
    pub const STANDARD: Self = Self { frequency: 100_000 };
}
