//! Button input trait
//!
//! Three momentary buttons with fixed roles. Input is committed on the
//! press→release edge, not on press: acting on release is the debounce
//! strategy, since contact bounce during the press phase then cannot
//! double-trigger.

/// Number of buttons on the pad
pub const BUTTON_COUNT: usize = 3;

/// A completed press-release of one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button 0: confirm / advance to next field
    Select,
    /// Button 1: decrement / previous item
    Down,
    /// Button 2: increment / next item
    Up,
}

impl ButtonEvent {
    /// Map a pad index (0..3) to its event
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ButtonEvent::Select),
            1 => Some(ButtonEvent::Down),
            2 => Some(ButtonEvent::Up),
            _ => None,
        }
    }

    /// The pad index of this event
    pub fn index(self) -> usize {
        match self {
            ButtonEvent::Select => 0,
            ButtonEvent::Down => 1,
            ButtonEvent::Up => 2,
        }
    }
}

/// The three-button pad
pub trait Buttons {
    /// Raw current level of one button (true = held down)
    fn is_pressed(&self, index: usize) -> bool;

    /// True if any button is currently held
    fn any_pressed(&self) -> bool {
        (0..BUTTON_COUNT).any(|i| self.is_pressed(i))
    }

    /// Block until one button completes a press→release edge
    ///
    /// This is the intended "wait for user" point of the control loop and
    /// is deliberately unbounded.
    fn wait_for_edge(&mut self) -> ButtonEvent;
}
