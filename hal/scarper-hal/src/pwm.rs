//! PWM channel abstraction
//!
//! One trait covers both PWM consumers in this firmware: the H-bridge
//! enable line (fixed frequency, variable duty) and the buzzer (variable
//! frequency, fixed 50% duty).

/// Full-scale duty value: `set_duty(DUTY_MAX)` is a 100% duty cycle.
///
/// The scale is 65_536, not 65_535, so that a motor command of `1.0`
/// maps to exactly `65536 * 1.0`. Implementations clamp to whatever
/// their compare register can hold.
pub const DUTY_MAX: u32 = 65_536;

/// A single PWM output channel
pub trait PwmChannel {
    /// Set the PWM carrier frequency in Hz.
    ///
    /// The duty cycle ratio is preserved across frequency changes.
    fn set_frequency(&mut self, hz: u32);

    /// Set the duty cycle, where [`DUTY_MAX`] is fully on and 0 is off.
    ///
    /// Values above `DUTY_MAX` are clamped.
    fn set_duty(&mut self, duty: u32);
}
