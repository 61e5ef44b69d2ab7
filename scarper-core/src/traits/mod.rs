//! Device abstraction traits
//!
//! These traits define the seams between the application logic (dialogs,
//! controller) and the concrete drivers in `scarper-drivers`. Everything
//! the control loop touches goes through one of them, so the whole loop
//! runs against mocks on the host.

pub mod display;
pub mod input;
pub mod motor;
pub mod ranging;
pub mod rtc;

pub use display::CharacterDisplay;
pub use input::{ButtonEvent, Buttons, BUTTON_COUNT};
pub use motor::{Buzzer, Motor};
pub use ranging::{Distance, RangeFinder};
pub use rtc::Rtc;
