//! GPIO trait implementations for embassy-rp pins
//!
//! The pin traits live in scarper-hal and the pin types in embassy-rp,
//! both foreign to this crate, so coherence requires local newtype
//! wrappers around the embassy types.

use embassy_rp::gpio::{Input, Output};

/// A push-pull output pin
pub struct OutPin<'d>(Output<'d>);

impl<'d> OutPin<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl scarper_hal::OutputPin for OutPin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// An input pin
pub struct InPin<'d>(Input<'d>);

impl<'d> InPin<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl scarper_hal::InputPin for InPin<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
