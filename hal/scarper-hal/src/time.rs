//! Monotonic time abstraction
//!
//! `embedded-hal` covers blocking delays but has no way to *read* time,
//! and the ultrasonic ranger needs one: its echo waits are guarded by a
//! deadline measured against trigger-pulse start. This trait is that
//! missing piece.

/// A monotonic microsecond clock
///
/// Implementations must be monotonic and must not wrap within the
/// lifetime of the device (a `u64` of microseconds lasts ~584k years).
pub trait Clock {
    /// Current monotonic time in microseconds since some fixed epoch
    fn now_us(&self) -> u64;

    /// Microseconds elapsed since an earlier [`now_us`](Clock::now_us) sample
    fn elapsed_us(&self, since: u64) -> u64 {
        self.now_us().saturating_sub(since)
    }
}

impl<C: Clock> Clock for &C {
    fn now_us(&self) -> u64 {
        (*self).now_us()
    }
}
