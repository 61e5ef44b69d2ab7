//! Real-time clock trait

use crate::time::CalendarTime;

/// Battery-backed (or at least free-running) wall clock
///
/// Reads and writes go through the chip's register block as one atomic
/// transfer, so the six calendar fields always come from a single instant.
pub trait Rtc {
    /// Bus error type
    type Error;

    /// Read the full calendar record
    fn read(&mut self) -> Result<CalendarTime, Self::Error>;

    /// Write the full calendar record back
    ///
    /// Callers changing only time of day must pass the date fields from a
    /// previous [`read`](Rtc::read) unchanged.
    fn write(&mut self, time: &CalendarTime) -> Result<(), Self::Error>;
}
