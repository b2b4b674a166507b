//! Character display model
//!
//! The controller draws into a [`Screen`], a 16x2 character buffer with the
//! addressing rules of an HD44780-style module. Whatever owns the real panel
//! copies the buffer out through [`CharDisplay`].

pub mod format;
pub mod pages;
pub mod screen;

pub use format::decimal;
pub use screen::{Screen, COLS, ROWS};

/// Errors from a display sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The panel did not accept the write
    Bus,
    /// Panel not initialized
    NotReady,
}

/// Trait for a two-line character display
pub trait CharDisplay {
    /// Blank every cell
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write text starting at a position
    ///
    /// - `col`: Column (0-15)
    /// - `row`: Row (0-1)
    ///
    /// Text running past column 15 continues at column 0 of the other row.
    /// A start position outside the panel writes nothing.
    fn show_str(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError>;
}
