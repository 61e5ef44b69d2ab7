//! PWM channel implementation on RP2040 PWM slices
//!
//! The slice counter is clocked at 1MHz (sys_clk 125MHz with divider
//! 125), so a target frequency maps directly to `top = 1_000_000 / hz - 1`.
//! That keeps every frequency this firmware uses (512Hz motor carrier,
//! audible buzzer tones) within the 16-bit wrap register.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::traits::ToFixed;
use scarper_hal::DUTY_MAX;

/// Counter tick rate after the slice divider
const TICK_HZ: u32 = 1_000_000;
/// sys_clk / TICK_HZ
const DIVIDER: u8 = 125;

/// Which compare register of the slice this output drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceOutput {
    A,
    B,
}

/// One PWM output pin on an RP2040 slice
///
/// Holds the slice plus a shadow of its config; frequency and duty
/// changes rewrite the config and push it to the hardware, the way
/// embassy-rp expects.
pub struct PwmOutput<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
    output: SliceOutput,
    duty: u32,
}

impl<'d> PwmOutput<'d> {
    /// Wrap a slice configured with `Pwm::new_output_a`
    pub fn new_a(pwm: Pwm<'d>) -> Self {
        Self::new(pwm, SliceOutput::A)
    }

    /// Wrap a slice configured with `Pwm::new_output_b`
    pub fn new_b(pwm: Pwm<'d>) -> Self {
        Self::new(pwm, SliceOutput::B)
    }

    fn new(mut pwm: Pwm<'d>, output: SliceOutput) -> Self {
        let mut config = PwmConfig::default();
        config.divider = DIVIDER.to_fixed();
        config.compare_a = 0;
        config.compare_b = 0;
        pwm.set_config(&config);
        Self {
            pwm,
            config,
            output,
            duty: 0,
        }
    }

    fn apply(&mut self) {
        let compare = ((self.duty as u64 * (self.config.top as u64 + 1)) >> 16) as u16;
        match self.output {
            SliceOutput::A => self.config.compare_a = compare,
            SliceOutput::B => self.config.compare_b = compare,
        }
        self.pwm.set_config(&self.config);
    }
}

impl scarper_hal::PwmChannel for PwmOutput<'_> {
    fn set_frequency(&mut self, hz: u32) {
        let hz = hz.clamp(TICK_HZ / u16::MAX as u32 + 1, TICK_HZ);
        self.config.top = (TICK_HZ / hz - 1) as u16;
        self.apply();
    }

    fn set_duty(&mut self, duty: u32) {
        self.duty = duty.min(DUTY_MAX);
        self.apply();
    }
}
