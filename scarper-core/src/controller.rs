//! Top-level alarm controller
//!
//! One `tick` runs the whole control loop: sample the clock, route button
//! input into the menu dialogs, redraw only on change, and fire the
//! evasion behavior on an exact alarm match. The firmware calls `tick`
//! every ~10 ms; everything in here is blocking and single-threaded.

use core::fmt::Write as _;

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::state::{Event, Mode};
use crate::time::{AlarmSetting, WallClockTime};
use crate::traits::{Buttons, Buzzer, CharacterDisplay, Motor, RangeFinder, Rtc};
use crate::ui::{select_dialog, time_dialog};

/// Distance below which an approaching user triggers a dodge
pub const PROXIMITY_THRESHOLD_CM: f32 = 40.0;
/// Forward burst between distance checks while evading
const FORWARD_BURST_MS: u32 = 100;
/// Duration of one dodge turn
const TURN_BURST_MS: u32 = 333;
/// Poll interval while waiting for the dismissing button to be released
const RELEASE_POLL_MS: u32 = 10;

/// Menu entries, in display order
const MENU_OPTIONS: [&str; 4] = ["set alarm", "disable alarm", "set time", "exit"];

/// What the user picked in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum MenuChoice {
    SetAlarm,
    DisableAlarm,
    SetTime,
    Exit,
}

impl MenuChoice {
    fn from_index(index: usize) -> Self {
        match index {
            0 => MenuChoice::SetAlarm,
            1 => MenuChoice::DisableAlarm,
            2 => MenuChoice::SetTime,
            _ => MenuChoice::Exit,
        }
    }
}

/// Every device the controller touches, borrowed together.
///
/// Replaces the original firmware's module-level globals: constructed once
/// in `main` and passed into every tick. No component owns another's
/// hardware; each field is the sole owner of its pins and bus handles.
pub struct Robot<D, B, C, R, M, Z, Y> {
    /// Character LCD (either transport variant)
    pub display: D,
    /// Three-button pad
    pub buttons: B,
    /// Wall clock
    pub rtc: C,
    /// Ultrasonic ranger
    pub ranger: R,
    /// Left drive motor
    pub left_motor: M,
    /// Right drive motor
    pub right_motor: M,
    /// Alarm buzzer
    pub buzzer: Z,
    /// Blocking delay provider
    pub delay: Y,
}

/// Errors a tick can surface.
///
/// All of these are bus failures and there is no recovery strategy:
/// the firmware logs them and resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError<DE, CE> {
    /// Display transport failed
    Display(DE),
    /// RTC transfer failed
    Rtc(CE),
}

/// The clock/alarm/evasion control loop state
pub struct AlarmController {
    mode: Mode,
    alarm: AlarmSetting,
    /// Time as of the last redraw; redraws are gated on change to avoid
    /// visible flicker
    last_drawn: Option<WallClockTime>,
}

impl Default for AlarmController {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmController {
    /// Create a controller: clock mode, alarm disarmed
    pub fn new() -> Self {
        Self {
            mode: Mode::DisplayingClock,
            alarm: AlarmSetting::default(),
            last_drawn: None,
        }
    }

    /// Current operating mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current alarm setting
    pub fn alarm(&self) -> AlarmSetting {
        self.alarm
    }

    fn apply(&mut self, event: Event) {
        let next = self.mode.transition(event);
        #[cfg(feature = "defmt")]
        if next != self.mode {
            defmt::info!("mode {} -> {} on {}", self.mode, next, event);
        }
        self.mode = next;
    }

    /// Run one iteration of the control loop.
    ///
    /// Blocks while a dialog or the evasion behavior is active. Display
    /// and alarm decisions within one tick always use the same time
    /// sample, read once at the top.
    pub fn tick<D, B, C, R, M, Z, Y>(
        &mut self,
        hw: &mut Robot<D, B, C, R, M, Z, Y>,
    ) -> Result<(), ControlError<D::Error, C::Error>>
    where
        D: CharacterDisplay,
        B: Buttons,
        C: Rtc,
        R: RangeFinder,
        M: Motor,
        Z: Buzzer,
        Y: DelayNs,
    {
        let calendar = hw.rtc.read().map_err(ControlError::Rtc)?;
        let mut now = calendar.time;
        let mut needs_redraw = false;

        if hw.buttons.any_pressed() {
            self.apply(Event::MenuRequested);
            // Consume the press that opened the menu
            hw.buttons.wait_for_edge();

            let picked = select_dialog(&mut hw.display, &mut hw.buttons, &MENU_OPTIONS)
                .map_err(ControlError::Display)?;
            match MenuChoice::from_index(picked) {
                MenuChoice::SetTime => {
                    self.apply(Event::ChoseSetTime);
                    let edited =
                        time_dialog(&mut hw.display, &mut hw.buttons, now, "Set time: ", (0, 0))
                            .map_err(ControlError::Display)?;
                    // Date and weekday fields pass through unchanged
                    hw.rtc
                        .write(&calendar.with_time(edited))
                        .map_err(ControlError::Rtc)?;
                    now = edited;
                    self.apply(Event::EditFinished);
                }
                MenuChoice::SetAlarm => {
                    self.apply(Event::ChoseSetAlarm);
                    // Seed with the previous alarm time when armed,
                    // otherwise with the current clock time
                    let seed = if self.alarm.enabled {
                        self.alarm.time
                    } else {
                        now
                    };
                    let edited =
                        time_dialog(&mut hw.display, &mut hw.buttons, seed, "Set alarm: ", (0, 0))
                            .map_err(ControlError::Display)?;
                    self.alarm.arm(edited);
                    self.apply(Event::EditFinished);
                }
                MenuChoice::DisableAlarm => {
                    self.alarm.disarm();
                    self.apply(Event::ChoseDisableAlarm);
                }
                MenuChoice::Exit => self.apply(Event::ChoseExit),
            }
            needs_redraw = true;
        }

        if self.last_drawn != Some(now) {
            self.last_drawn = Some(now);
            needs_redraw = true;
        }

        if needs_redraw {
            self.redraw(&mut hw.display, now)
                .map_err(ControlError::Display)?;
        }

        if self.alarm.matches(now) {
            self.apply(Event::AlarmMatched);
            // One-shot: disarm on entry so the same second cannot re-fire
            self.alarm.disarm();
            self.evade(hw);
            self.apply(Event::AlarmDismissed);
        }

        Ok(())
    }

    fn redraw<D: CharacterDisplay>(
        &self,
        display: &mut D,
        now: WallClockTime,
    ) -> Result<(), D::Error> {
        display.clear()?;
        display.set_cursor(0, 0)?;
        let mut line: String<24> = String::new();
        let _ = write!(line, "Time:  {}", now);
        display.write_text(&line)?;

        if self.alarm.enabled {
            display.set_cursor(0, 1)?;
            line.clear();
            let _ = write!(line, "Alarm: {}", self.alarm.time);
            display.write_text(&line)?;
        }
        Ok(())
    }

    /// Dodge away until a button press dismisses the alarm.
    ///
    /// Drives forward in short bursts, ranging between bursts; when
    /// something comes inside [`PROXIMITY_THRESHOLD_CM`] it buzzes and
    /// turns, alternating the turn direction on each dodge. A lost echo
    /// counts as "nothing in range", never as "close" (see DESIGN.md).
    fn evade<D, B, C, R, M, Z, Y>(&mut self, hw: &mut Robot<D, B, C, R, M, Z, Y>)
    where
        B: Buttons,
        R: RangeFinder,
        M: Motor,
        Z: Buzzer,
        Y: DelayNs,
    {
        debug_assert!(self.mode.motors_allowed());
        let mut turn_right = true;

        while !hw.buttons.any_pressed() {
            hw.left_motor.drive(1.0);
            hw.right_motor.drive(1.0);
            hw.delay.delay_ms(FORWARD_BURST_MS);
            hw.left_motor.stop();
            hw.right_motor.stop();

            if hw.ranger.measure().is_within(PROXIMITY_THRESHOLD_CM) {
                hw.buzzer.on();
                if turn_right {
                    hw.left_motor.drive(1.0);
                    hw.right_motor.drive(-1.0);
                } else {
                    hw.right_motor.drive(1.0);
                    hw.left_motor.drive(-1.0);
                }
                turn_right = !turn_right;
                hw.delay.delay_ms(TURN_BURST_MS);
                hw.buzzer.off();
                hw.left_motor.stop();
                hw.right_motor.stop();
            }
        }

        // Hold here until every button is back up, so the dismissing press
        // cannot immediately reopen the menu
        while hw.buttons.any_pressed() {
            hw.delay.delay_ms(RELEASE_POLL_MS);
        }
    }
}
