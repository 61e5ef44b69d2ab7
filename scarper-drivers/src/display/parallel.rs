//! Direct-GPIO transport for the HD44780
//!
//! Four dedicated data lines (D4-D7) plus register-select and enable
//! pins. The nibble is set up on the data lines, then an explicit
//! low→high→low enable pulse latches it.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use scarper_hal::OutputPin;

use super::NibbleBus;

/// Setup/hold time around the enable pulse edges
const PULSE_US: u32 = 2;

/// The direct-GPIO transport
pub struct ParallelBus<P, D> {
    rs: P,
    enable: P,
    /// D4..D7, least significant first
    data: [P; 4],
    delay: D,
}

impl<P, D> ParallelBus<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a transport over six output pins
    pub fn new(rs: P, enable: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            enable,
            data,
            delay,
        }
    }
}

impl<P, D> NibbleBus for ParallelBus<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    type Error = Infallible;

    fn write_nibble(&mut self, nibble: u8, data: bool) -> Result<(), Infallible> {
        self.rs.set_state(data);
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(nibble & (0x10 << bit) != 0);
        }

        // Explicit enable pulse; the panel latches on the falling edge
        self.enable.set_low();
        self.delay.delay_us(PULSE_US);
        self.enable.set_high();
        self.delay.delay_us(PULSE_US);
        self.enable.set_low();
        self.delay.delay_us(PULSE_US);
        Ok(())
    }
}
