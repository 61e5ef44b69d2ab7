//! Shareable blocking I2C bus
//!
//! The LCD expander and the RTC both hang off I2C0. embassy-rp's
//! blocking `I2c` wants exclusive ownership, so the bus lives in a
//! `RefCell` and each driver holds a [`SharedI2c`] handle. The control
//! loop is single-threaded, so transactions never interleave and the
//! borrow can never collide.

use core::cell::RefCell;

use embedded_hal::i2c::I2c;
use scarper_hal::I2cConfig;

/// A handle onto a `RefCell`-shared I2C peripheral
pub struct SharedI2c<'a, T> {
    bus: &'a RefCell<T>,
}

impl<'a, T> SharedI2c<'a, T> {
    pub fn new(bus: &'a RefCell<T>) -> Self {
        Self { bus }
    }
}

impl<T: I2c> scarper_hal::I2cBus for SharedI2c<'_, T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), T::Error> {
        self.bus.borrow_mut().write(address, data)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), T::Error> {
        self.bus.borrow_mut().write_read(address, write_data, read_buf)
    }
}

/// Translate the shared bus configuration into embassy-rp's
pub fn config(shared: I2cConfig) -> embassy_rp::i2c::Config {
    let mut config = embassy_rp::i2c::Config::default();
    config.frequency = shared.frequency;
    config
}
