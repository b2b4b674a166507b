//! RTT display sink

use defmt::*;

use spinwash_core::display::{CharDisplay, DisplayError, Screen};

/// Display that mirrors a 16x2 panel and logs each row written
pub struct RttDisplay {
    mirror: Screen,
}

impl RttDisplay {
    pub const fn new() -> Self {
        Self {
            mirror: Screen::new(),
        }
    }
}

impl Default for RttDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl CharDisplay for RttDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.mirror.clear();
        Ok(())
    }

    fn show_str(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        self.mirror.show_str(col, row, text);
        info!("LCD{}: |{}|", row, self.mirror.line(usize::from(row)));
        Ok(())
    }
}
