//! H-bridge DC motor driver
//!
//! Two direction inputs select the bridge polarity, a PWM channel on the
//! enable pin scales the speed. The signed drive value folds into
//! direction plus magnitude.

use scarper_core::traits::Motor;
use scarper_hal::{OutputPin, PwmChannel, DUTY_MAX};

/// PWM carrier on the enable pin
const PWM_FREQUENCY_HZ: u32 = 512;

/// The bridge driver
pub struct HBridge<P, W> {
    in_a: P,
    in_b: P,
    enable: W,
}

impl<P, W> HBridge<P, W>
where
    P: OutputPin,
    W: PwmChannel,
{
    /// Create a driver over two direction pins and the enable PWM channel.
    /// Starts stopped.
    pub fn new(in_a: P, in_b: P, mut enable: W) -> Self {
        enable.set_frequency(PWM_FREQUENCY_HZ);
        enable.set_duty(0);
        Self { in_a, in_b, enable }
    }
}

impl<P, W> Motor for HBridge<P, W>
where
    P: OutputPin,
    W: PwmChannel,
{
    fn drive(&mut self, value: f32) {
        let magnitude = if value >= 0.0 {
            self.in_a.set_low();
            self.in_b.set_high();
            value
        } else {
            self.in_a.set_high();
            self.in_b.set_low();
            -value
        };

        // Round to the nearest duty step; a bare cast would truncate
        let duty = (magnitude * DUTY_MAX as f32 + 0.5) as u32;
        #[cfg(feature = "defmt")]
        defmt::trace!("motor drive {} -> duty {}", value, duty);
        self.enable.set_duty(duty);
    }
}
