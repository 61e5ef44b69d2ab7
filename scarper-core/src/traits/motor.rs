//! Actuator traits: drive motor and buzzer

/// A signed-duty DC motor behind an H-bridge
pub trait Motor {
    /// Drive the motor: 1.0 full forward, -1.0 full backward, 0.0 stop.
    ///
    /// Sign selects the direction pins, magnitude maps to PWM duty.
    /// Values are expected in [-1.0, 1.0].
    fn drive(&mut self, value: f32);

    /// Stop the motor (duty 0)
    fn stop(&mut self) {
        self.drive(0.0);
    }
}

/// A PWM tone buzzer
pub trait Buzzer {
    /// Start the tone at the configured frequency, 50% duty
    fn on(&mut self);

    /// Silence the buzzer (duty 0, frequency untouched)
    fn off(&mut self);

    /// Change the tone used by the next [`on`](Buzzer::on)
    fn set_frequency(&mut self, hz: u32);
}
