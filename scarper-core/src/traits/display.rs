//! Character display trait
//!
//! A fixed rows×cols character grid with a movable cursor and no local
//! text buffer: every redraw clears and rewrites the cells it needs.
//! The two LCD transports (I2C expander, direct GPIO) both implement
//! this one interface.

/// A character-cell display
pub trait CharacterDisplay {
    /// Transport error (I2C variants are fallible, GPIO variants are not)
    type Error;

    /// Run the panel initialization sequence and clear
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Clear the display and home the cursor
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the cursor to (column, row), both zero-based
    ///
    /// Coordinates outside [`dimensions`](CharacterDisplay::dimensions)
    /// are the caller's bug; the dialogs stay inside the grid.
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;

    /// Write text at the cursor, advancing it
    ///
    /// Does not wrap or clip at the right edge.
    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Display geometry as (columns, rows)
    fn dimensions(&self) -> (u8, u8);
}
