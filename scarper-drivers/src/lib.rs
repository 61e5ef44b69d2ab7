//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the device traits
//! defined in scarper-core, generic over the scarper-hal pin/bus traits:
//!
//! - HD44780 character LCD (I2C expander and direct-GPIO transports)
//! - DS1307-style I2C real-time clock
//! - HC-SR04 ultrasonic ranger
//! - Three-button pad with release-edge debouncing
//! - H-bridge DC motor and PWM buzzer
//!
//! All drivers are blocking; the timeout on the ultrasonic ranger is the
//! only bounded wait, everything else completes in fixed protocol time.

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod buzzer;
pub mod display;
pub mod motor;
pub mod rtc;
pub mod ultrasonic;

#[cfg(test)]
pub(crate) mod testutil;
