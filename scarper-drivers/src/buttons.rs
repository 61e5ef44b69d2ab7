//! Three-button input pad
//!
//! Active-high momentary buttons sampled every 10ms. Events fire on the
//! press→release edge; bounce during the press phase only extends the
//! hold and cannot double-trigger.

use embedded_hal::delay::DelayNs;
use scarper_core::traits::{ButtonEvent, Buttons, BUTTON_COUNT};
use scarper_hal::InputPin;

/// Sampling period of the edge-wait loop
const POLL_INTERVAL_MS: u32 = 10;

/// The pad driver
pub struct ButtonPad<P, D> {
    pins: [P; BUTTON_COUNT],
    delay: D,
}

impl<P, D> ButtonPad<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    /// Create a pad over three active-high inputs, ordered select, down, up
    pub fn new(pins: [P; BUTTON_COUNT], delay: D) -> Self {
        Self { pins, delay }
    }

    fn sample(&self) -> [bool; BUTTON_COUNT] {
        core::array::from_fn(|i| self.pins[i].is_high())
    }
}

impl<P, D> Buttons for ButtonPad<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    fn is_pressed(&self, index: usize) -> bool {
        self.pins[index].is_high()
    }

    fn wait_for_edge(&mut self) -> ButtonEvent {
        let mut previous = self.sample();
        loop {
            self.delay.delay_ms(POLL_INTERVAL_MS);
            let current = self.sample();
            for i in 0..BUTTON_COUNT {
                if previous[i] && !current[i] {
                    if let Some(event) = ButtonEvent::from_index(i) {
                        return event;
                    }
                }
            }
            previous = current;
        }
    }
}
