//! Distance ranging trait

/// One distance measurement
///
/// A fresh sample is produced on every call and never cached. `NoEcho`
/// replaces the original firmware's −1.0 sentinel: a disconnected or noisy
/// sensor reports a distinct variant instead of a value that numerically
/// compares as "very close".
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Distance {
    /// Echo observed; round-trip converted to centimeters
    Cm(f32),
    /// No echo edge within the timeout window
    NoEcho,
}

impl Distance {
    /// True when a target was seen closer than `threshold_cm`.
    ///
    /// `NoEcho` is treated as "nothing in range", so a failed sensor never
    /// triggers evasive maneuvers.
    pub fn is_within(self, threshold_cm: f32) -> bool {
        match self {
            Distance::Cm(d) => d < threshold_cm,
            Distance::NoEcho => false,
        }
    }

    /// The measured distance, if an echo was seen
    pub fn cm(self) -> Option<f32> {
        match self {
            Distance::Cm(d) => Some(d),
            Distance::NoEcho => None,
        }
    }
}

/// An ultrasonic (or similar) distance sensor
pub trait RangeFinder {
    /// Take one measurement, blocking at most the sensor's timeout window
    fn measure(&mut self) -> Distance;
}
