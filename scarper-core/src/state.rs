//! Operating-mode state machine
//!
//! All display, menu, and actuator behavior is a function of the current
//! mode and an event. The dialogs themselves run cooperatively (they block
//! inside a mode); transitions happen at their boundaries.

/// Operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Showing the clock (and alarm line when armed), watching for input
    DisplayingClock,
    /// Option picker open
    InMenu,
    /// Time editor open for the clock
    SettingTime,
    /// Time editor open for the alarm
    SettingAlarm,
    /// Alarm fired; motors and ranger active until dismissed
    Evading,
}

/// Events that trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A button was held while the clock was showing
    MenuRequested,
    /// User picked "set time"
    ChoseSetTime,
    /// User picked "set alarm"
    ChoseSetAlarm,
    /// User picked "disable alarm"
    ChoseDisableAlarm,
    /// User picked "exit"
    ChoseExit,
    /// A time editor returned its result
    EditFinished,
    /// Clock time equals the armed alarm time
    AlarmMatched,
    /// A button press ended the evasion behavior
    AlarmDismissed,
}

impl Mode {
    /// Check if this mode may command the motors
    pub fn motors_allowed(&self) -> bool {
        matches!(self, Mode::Evading)
    }

    /// Process an event and return the next mode
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            (DisplayingClock, MenuRequested) => InMenu,
            (DisplayingClock, AlarmMatched) => Evading,

            (InMenu, ChoseSetTime) => SettingTime,
            (InMenu, ChoseSetAlarm) => SettingAlarm,
            // Disabling the alarm and exiting return straight to the clock
            (InMenu, ChoseDisableAlarm) => DisplayingClock,
            (InMenu, ChoseExit) => DisplayingClock,

            (SettingTime, EditFinished) => DisplayingClock,
            (SettingAlarm, EditFinished) => DisplayingClock,

            (Evading, AlarmDismissed) => DisplayingClock,

            // Default: stay in current mode
            _ => self,
        }
    }
}
