//! Wall-clock time types
//!
//! All fields are held modulo their range at all times; arithmetic on them
//! wraps rather than overflows. Nothing here is persisted - the alarm
//! setting lives only as long as power does.

/// One editable field of a wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    /// Hours, modulo 24
    Hours,
    /// Minutes, modulo 60
    Minutes,
    /// Seconds, modulo 60
    Seconds,
}

impl TimeField {
    /// Editing order used by the time dialog: hours, minutes, seconds
    pub const EDIT_ORDER: [TimeField; 3] =
        [TimeField::Hours, TimeField::Minutes, TimeField::Seconds];

    /// The wrapping modulus of this field
    pub fn modulus(self) -> u8 {
        match self {
            TimeField::Hours => 24,
            TimeField::Minutes => 60,
            TimeField::Seconds => 60,
        }
    }
}

/// Time of day: hours, minutes, seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClockTime {
    /// Hours (0-23)
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
}

impl WallClockTime {
    /// Create a time of day, wrapping each field into range
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours: hours % 24,
            minutes: minutes % 60,
            seconds: seconds % 60,
        }
    }

    /// Read one field
    pub fn field(&self, field: TimeField) -> u8 {
        match field {
            TimeField::Hours => self.hours,
            TimeField::Minutes => self.minutes,
            TimeField::Seconds => self.seconds,
        }
    }

    fn field_mut(&mut self, field: TimeField) -> &mut u8 {
        match field {
            TimeField::Hours => &mut self.hours,
            TimeField::Minutes => &mut self.minutes,
            TimeField::Seconds => &mut self.seconds,
        }
    }

    /// Increment one field by 1, wrapping at its modulus.
    ///
    /// This is the dialog's edit operation: no carry into other fields
    /// (bumping seconds past 59 does not touch minutes).
    pub fn increment(&mut self, field: TimeField) {
        let m = field.modulus();
        let v = self.field_mut(field);
        *v = (*v + 1) % m;
    }

    /// Decrement one field by 1, wrapping at its modulus
    pub fn decrement(&mut self, field: TimeField) {
        let m = field.modulus();
        let v = self.field_mut(field);
        *v = (*v + m - 1) % m;
    }

    /// The time one second later, with carry through minutes and hours
    pub fn next_second(self) -> Self {
        let mut t = self;
        t.seconds += 1;
        if t.seconds == 60 {
            t.seconds = 0;
            t.minutes += 1;
            if t.minutes == 60 {
                t.minutes = 0;
                t.hours = (t.hours + 1) % 24;
            }
        }
        t
    }
}

impl core::fmt::Display for WallClockTime {
    /// Formats as `HH:MM:SS` with zero padding
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Full calendar record as the RTC register block stores it
///
/// The date and weekday fields are pass-through payload: the UI only ever
/// edits time of day, but the register protocol reads and writes the whole
/// block, so a time-of-day change must carry the date fields unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarTime {
    /// Time of day
    pub time: WallClockTime,
    /// Day of week (chip-defined numbering, carried verbatim)
    pub weekday: u8,
    /// Day of month
    pub day: u8,
    /// Month
    pub month: u8,
    /// Year modulo 100
    pub year: u8,
}

impl CalendarTime {
    /// Replace only the time of day, keeping the date payload
    pub fn with_time(self, time: WallClockTime) -> Self {
        Self { time, ..self }
    }
}

/// The alarm: a target time of day and whether it is armed
///
/// Starts disarmed at 00:00:00 and is mutated only through the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmSetting {
    /// Whether the alarm will fire
    pub enabled: bool,
    /// Target time of day
    pub time: WallClockTime,
}

impl AlarmSetting {
    /// Arm the alarm at the given time
    pub fn arm(&mut self, time: WallClockTime) {
        self.enabled = true;
        self.time = time;
    }

    /// Disarm the alarm, keeping the last set time
    pub fn disarm(&mut self) {
        self.enabled = false;
    }

    /// True when armed and the given time matches exactly
    pub fn matches(&self, now: WallClockTime) -> bool {
        self.enabled && self.time == now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wraps_fields() {
        let t = WallClockTime::new(25, 61, 60);
        assert_eq!(t, WallClockTime::new(1, 1, 0));
    }

    #[test]
    fn test_field_edit_does_not_carry() {
        let mut t = WallClockTime::new(10, 59, 59);
        t.increment(TimeField::Seconds);
        assert_eq!(t, WallClockTime::new(10, 59, 0));

        t.decrement(TimeField::Seconds);
        assert_eq!(t, WallClockTime::new(10, 59, 59));
    }

    #[test]
    fn test_hours_wrap_both_directions() {
        let mut t = WallClockTime::new(23, 0, 0);
        t.increment(TimeField::Hours);
        assert_eq!(t.hours, 0);
        t.decrement(TimeField::Hours);
        assert_eq!(t.hours, 23);
    }

    #[test]
    fn test_increment_hours_24_times_is_identity() {
        let orig = WallClockTime::new(7, 30, 0);
        let mut t = orig;
        for _ in 0..24 {
            t.increment(TimeField::Hours);
        }
        assert_eq!(t, orig);
    }

    #[test]
    fn test_next_second_carries_into_minutes() {
        let mut t = WallClockTime::new(7, 29, 0);
        for _ in 0..60 {
            t = t.next_second();
        }
        assert_eq!(t, WallClockTime::new(7, 30, 0));
    }

    #[test]
    fn test_next_second_midnight_rollover() {
        let t = WallClockTime::new(23, 59, 59).next_second();
        assert_eq!(t, WallClockTime::new(0, 0, 0));
    }

    #[test]
    fn test_display_padding() {
        let mut s = heapless::String::<8>::new();
        core::fmt::write(&mut s, format_args!("{}", WallClockTime::new(7, 5, 9))).unwrap();
        assert_eq!(s.as_str(), "07:05:09");
    }

    #[test]
    fn test_with_time_keeps_date_payload() {
        let cal = CalendarTime {
            time: WallClockTime::new(1, 2, 3),
            weekday: 4,
            day: 15,
            month: 6,
            year: 25,
        };
        let updated = cal.with_time(WallClockTime::new(9, 8, 7));
        assert_eq!(updated.time, WallClockTime::new(9, 8, 7));
        assert_eq!(updated.weekday, 4);
        assert_eq!(updated.day, 15);
        assert_eq!(updated.month, 6);
        assert_eq!(updated.year, 25);
    }

    #[test]
    fn test_alarm_starts_disarmed_at_midnight() {
        let alarm = AlarmSetting::default();
        assert!(!alarm.enabled);
        assert_eq!(alarm.time, WallClockTime::default());
        assert!(!alarm.matches(WallClockTime::default()));
    }

    #[test]
    fn test_alarm_matches_exact_time_only() {
        let mut alarm = AlarmSetting::default();
        alarm.arm(WallClockTime::new(7, 30, 0));
        assert!(alarm.matches(WallClockTime::new(7, 30, 0)));
        assert!(!alarm.matches(WallClockTime::new(7, 30, 1)));
        alarm.disarm();
        assert!(!alarm.matches(WallClockTime::new(7, 30, 0)));
    }
}
