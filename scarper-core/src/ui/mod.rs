//! Cooperative UI procedures
//!
//! The dialogs are blocking: they own the display and the button pad for
//! as long as they run, redraw from scratch on every interaction, and
//! return only when the user commits. They are built on the device traits
//! alone, so they run unmodified against host-side mocks.

pub mod dialogs;

pub use dialogs::{select_dialog, time_dialog};
