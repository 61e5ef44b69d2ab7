//! Board-agnostic core logic for the alarm clock robot firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Packed-BCD register codec
//! - Wall-clock time types and wrapping field arithmetic
//! - Device abstraction traits (display, buttons, RTC, ranger, actuators)
//! - The two cooperative UI dialogs (option picker, time editor)
//! - Operating-mode state machine
//! - Top-level alarm controller

#![no_std]
#![deny(unsafe_code)]

pub mod bcd;
pub mod controller;
pub mod state;
pub mod time;
pub mod traits;
pub mod ui;

#[cfg(test)]
pub(crate) mod testutil;
