//! The option picker and the time editor

use core::fmt::Write as _;

use heapless::String;

use crate::time::{TimeField, WallClockTime};
use crate::traits::{ButtonEvent, Buttons, CharacterDisplay};

/// Marker prefixing the selected option
const MARKER: &str = "->";
/// Prefix for unselected options, same width as the marker
const NO_MARKER: &str = "  ";

/// Let the user pick one of `options` with the three buttons.
///
/// The selection starts at index 0. Up/Down move the selection with
/// wraparound in both directions; Select commits and returns the selected
/// index. Each interaction redraws the whole list, one option per row.
///
/// `options` must be non-empty and must fit the display geometry.
pub fn select_dialog<D, B>(
    display: &mut D,
    buttons: &mut B,
    options: &[&str],
) -> Result<usize, D::Error>
where
    D: CharacterDisplay,
    B: Buttons,
{
    debug_assert!(!options.is_empty());
    debug_assert!(options.len() <= display.dimensions().1 as usize);
    let mut selected = 0;

    loop {
        display.clear()?;
        for (i, option) in options.iter().enumerate() {
            display.set_cursor(0, i as u8)?;
            display.write_text(if i == selected { MARKER } else { NO_MARKER })?;
            display.write_text(option)?;
        }

        match buttons.wait_for_edge() {
            ButtonEvent::Select => return Ok(selected),
            ButtonEvent::Down => selected = (selected + options.len() - 1) % options.len(),
            ButtonEvent::Up => selected = (selected + 1) % options.len(),
        }
    }
}

/// Let the user edit a time of day field by field.
///
/// Draws `label` followed by `HH:MM:SS` at `origin`, with a `^^` caret on
/// the next row under the field being edited (each field is three columns
/// wide including its separator). Up/Down change the active field with
/// wraparound at its modulus; Select advances the field cursor, and
/// advancing past seconds commits and returns the edited time.
pub fn time_dialog<D, B>(
    display: &mut D,
    buttons: &mut B,
    initial: WallClockTime,
    label: &str,
    origin: (u8, u8),
) -> Result<WallClockTime, D::Error>
where
    D: CharacterDisplay,
    B: Buttons,
{
    let (col, row) = origin;
    // The caret line sits one row below the time line
    debug_assert!(row + 1 < display.dimensions().1);
    let mut time = initial;
    let mut cursor = 0;

    loop {
        display.clear()?;
        display.set_cursor(col, row)?;
        let mut line: String<24> = String::new();
        let _ = write!(line, "{}{}", label, time);
        display.write_text(&line)?;

        let caret_col = col + label.len() as u8 + 3 * cursor as u8;
        display.set_cursor(caret_col, row + 1)?;
        display.write_text("^^")?;

        match buttons.wait_for_edge() {
            ButtonEvent::Select => {
                cursor += 1;
                if cursor >= TimeField::EDIT_ORDER.len() {
                    return Ok(time);
                }
            }
            ButtonEvent::Down => time.decrement(TimeField::EDIT_ORDER[cursor]),
            ButtonEvent::Up => time.increment(TimeField::EDIT_ORDER[cursor]),
        }
    }
}
