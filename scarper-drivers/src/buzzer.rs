//! PWM tone buzzer
//!
//! A passive buzzer on one PWM channel. Tone is the carrier frequency,
//! volume is fixed at 50% duty; silencing only zeroes the duty so the
//! next tone starts cleanly.

use scarper_core::traits::Buzzer;
use scarper_hal::{PwmChannel, DUTY_MAX};

/// Default alert tone
pub const DEFAULT_TONE_HZ: u32 = 3_000;

const HALF_DUTY: u32 = DUTY_MAX / 2;

/// The buzzer driver
pub struct PwmBuzzer<W> {
    pwm: W,
    tone_hz: u32,
}

impl<W: PwmChannel> PwmBuzzer<W> {
    /// Create a silent buzzer at the default tone
    pub fn new(mut pwm: W) -> Self {
        pwm.set_duty(0);
        Self {
            pwm,
            tone_hz: DEFAULT_TONE_HZ,
        }
    }
}

impl<W: PwmChannel> Buzzer for PwmBuzzer<W> {
    fn on(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("buzzer on at {} Hz", self.tone_hz);
        self.pwm.set_frequency(self.tone_hz);
        self.pwm.set_duty(HALF_DUTY);
    }

    fn off(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("buzzer off");
        self.pwm.set_duty(0);
    }

    fn set_frequency(&mut self, hz: u32) {
        self.tone_hz = hz;
    }
}
