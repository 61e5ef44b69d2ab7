//! RP2040-specific HAL for the alarm clock robot firmware
//!
//! This crate implements the shared `scarper-hal` traits on top of
//! embassy-rp peripherals:
//!
//! - GPIO output/input pins
//! - PWM channels with runtime frequency control
//! - A shareable blocking I2C bus (LCD expander and RTC sit on one bus)
//! - The monotonic microsecond clock

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod pwm;
pub mod time;

pub use gpio::{InPin, OutPin};
pub use i2c::SharedI2c;
pub use pwm::PwmOutput;
pub use time::SystemClock;
