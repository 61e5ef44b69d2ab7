//! Scarper Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the drivers are
//! written against, so the same driver code runs on real RP2040 pins and
//! on host-side mocks in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (scarper-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  scarper-drivers (generic drivers)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  scarper-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  scarper-hal-rp2040 (embassy-rp impls)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`pwm::PwmChannel`] - PWM frequency/duty control
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`time::Clock`] - Monotonic microsecond clock
//!
//! Blocking delays are not re-abstracted here; drivers take
//! `embedded_hal::delay::DelayNs` directly.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod pwm;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use i2c::{I2cBus, I2cConfig};
pub use pwm::{PwmChannel, DUTY_MAX};
pub use time::Clock;
