//! Screen buffer

use super::{CharDisplay, DisplayError};

/// Characters per row
pub const COLS: usize = 16;
/// Rows on the panel
pub const ROWS: usize = 2;

/// A 16x2 character buffer
///
/// Only printable ASCII is stored; anything else is written as `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    cells: [[u8; COLS]; ROWS],
    dirty: bool,
}

impl Screen {
    /// Create a blank screen
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            dirty: true,
        }
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.cells = [[b' '; COLS]; ROWS];
        self.dirty = true;
    }

    /// Write text starting at `(col, row)`
    ///
    /// Out-of-range start positions are ignored. Text past the last column
    /// continues at column 0 of the other row.
    pub fn show_str(&mut self, col: u8, row: u8, text: &str) {
        let (mut col, mut row) = (usize::from(col), usize::from(row));
        if col >= COLS || row >= ROWS {
            return;
        }

        for byte in text.bytes() {
            if col >= COLS {
                col = 0;
                row ^= 1;
            }
            self.cells[row][col] = if byte.is_ascii_graphic() || byte == b' ' {
                byte
            } else {
                b'?'
            };
            col += 1;
        }
        self.dirty = true;
    }

    /// Text of one row, `""` past the last row
    pub fn line(&self, row: usize) -> &str {
        match self.cells.get(row) {
            Some(cells) => core::str::from_utf8(cells).unwrap_or(""),
            None => "",
        }
    }

    /// Character at a position
    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        self.cells.get(row)?.get(col).map(|&b| char::from(b))
    }

    /// Check if the buffer changed since the last [`Screen::take_dirty`]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return and clear the changed flag
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    /// Copy the whole buffer to a display
    pub fn render_to<D: CharDisplay>(&self, display: &mut D) -> Result<(), DisplayError> {
        display.clear()?;
        for row in 0..ROWS {
            display.show_str(0, row as u8, self.line(row))?;
        }
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl CharDisplay for Screen {
    fn clear(&mut self) -> Result<(), DisplayError> {
        Screen::clear(self);
        Ok(())
    }

    fn show_str(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        Screen::show_str(self, col, row, text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_str_in_place() {
        let mut screen = Screen::new();
        screen.show_str(5, 1, "Waiting...");
        assert_eq!(screen.line(1), "     Waiting... ");
        assert_eq!(screen.line(0), "                ");
    }

    #[test]
    fn test_overflow_wraps_to_other_row() {
        let mut screen = Screen::new();
        screen.show_str(13, 0, "ABCDE");
        assert_eq!(screen.line(0), "             ABC");
        assert_eq!(screen.line(1), "DE              ");

        let mut screen = Screen::new();
        screen.show_str(14, 1, "xyz");
        assert_eq!(screen.line(1), "              xy");
        assert_eq!(screen.line(0), "z               ");
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut screen = Screen::new();
        screen.take_dirty();
        screen.show_str(16, 0, "x");
        screen.show_str(0, 2, "x");
        assert_eq!(screen, {
            let mut blank = Screen::new();
            blank.take_dirty();
            blank
        });
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_non_ascii_replaced() {
        let mut screen = Screen::new();
        screen.show_str(0, 0, "a\tb");
        assert_eq!(&screen.line(0)[..3], "a?b");
    }

    #[test]
    fn test_dirty_flag() {
        let mut screen = Screen::new();
        assert!(screen.take_dirty());
        assert!(!screen.take_dirty());
        screen.show_str(0, 0, "s");
        assert!(screen.is_dirty());
        screen.take_dirty();
        screen.clear();
        assert!(screen.take_dirty());
    }

    #[test]
    fn test_render_to_copies_rows() {
        let mut source = Screen::new();
        source.show_str(2, 0, "Select Mode:");
        source.show_str(2, 1, "HI/MED/LOW");

        let mut target = Screen::new();
        target.show_str(0, 0, "stale contents!!");
        source.render_to(&mut target).unwrap();

        assert_eq!(target.line(0), source.line(0));
        assert_eq!(target.line(1), source.line(1));
    }

    #[test]
    fn test_char_at() {
        let mut screen = Screen::new();
        screen.show_str(5, 0, "Over");
        assert_eq!(screen.char_at(5, 0), Some('O'));
        assert_eq!(screen.char_at(16, 0), None);
        assert_eq!(screen.char_at(0, 2), None);
    }
}
