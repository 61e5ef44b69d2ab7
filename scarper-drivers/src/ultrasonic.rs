//! HC-SR04 ultrasonic ranger
//!
//! A 20us trigger pulse starts a measurement; the sensor answers with an
//! echo pulse whose width is the round-trip time of the sound burst.
//! Both the wait for the echo to rise and the wait for it to fall share
//! one timeout window starting at the trigger, so a missing or stuck
//! echo line never blocks the caller for more than [`TIMEOUT_US`].

use embedded_hal::delay::DelayNs;
use scarper_core::traits::{Distance, RangeFinder};
use scarper_hal::{Clock, InputPin, OutputPin};

/// Whole measurement window; past this the target is out of range
/// or the echo line is dead
pub const TIMEOUT_US: u64 = 100_000;

/// Quiet time on the trigger line before the pulse
const SETTLE_US: u32 = 5;
/// Trigger pulse width
const TRIGGER_US: u32 = 20;

/// Round-trip microseconds per centimetre of distance
const US_PER_CM: f32 = 58.0;

/// The ranger driver
pub struct HcSr04<T, E, C, D> {
    trigger: T,
    echo: E,
    clock: C,
    delay: D,
}

impl<T, E, C, D> HcSr04<T, E, C, D>
where
    T: OutputPin,
    E: InputPin,
    C: Clock,
    D: DelayNs,
{
    /// Create a driver; the trigger line is parked low
    pub fn new(mut trigger: T, echo: E, clock: C, delay: D) -> Self {
        trigger.set_low();
        Self {
            trigger,
            echo,
            clock,
            delay,
        }
    }
}

impl<T, E, C, D> RangeFinder for HcSr04<T, E, C, D>
where
    T: OutputPin,
    E: InputPin,
    C: Clock,
    D: DelayNs,
{
    fn measure(&mut self) -> Distance {
        let window_start = self.clock.now_us();

        self.trigger.set_low();
        self.delay.delay_us(SETTLE_US);
        self.trigger.set_high();
        self.delay.delay_us(TRIGGER_US);
        self.trigger.set_low();

        while self.echo.is_low() {
            if self.clock.elapsed_us(window_start) > TIMEOUT_US {
                return Distance::NoEcho;
            }
        }
        let pulse_start = self.clock.now_us();

        while self.echo.is_high() {
            if self.clock.elapsed_us(window_start) > TIMEOUT_US {
                return Distance::NoEcho;
            }
        }
        let pulse_end = self.clock.now_us();

        Distance::Cm((pulse_end - pulse_start) as f32 / US_PER_CM)
    }
}
