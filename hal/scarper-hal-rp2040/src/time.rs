//! Monotonic clock backed by the embassy time driver

use embassy_time::Instant;
use scarper_hal::Clock;

/// The system microsecond clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
