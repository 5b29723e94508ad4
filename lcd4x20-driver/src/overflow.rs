//! Overflow handling
//!
//! Runs before each printed character. A pending end-of-line moves the
//! cursor to the next row; a full display scrolls according to the
//! configured [`ScrollMode`]. Both scroll kinds rewrite the buffer first and
//! then re-render it from home, since the controller has no notion of the
//! row order used here.

use embedded_hal::delay::DelayNs;
use lcd4x20_core::{CursorState, ScrollMode, CELL_COUNT, COLS, ROWS};
use lcd4x20_hal::Lines;

use crate::lcd::Lcd;

impl<L: Lines, D: DelayNs> Lcd<L, D> {
    /// Make room for the next character
    ///
    /// `remaining` is the number of characters still to be printed,
    /// including the next one.
    pub(crate) fn handle_cursor_event(&mut self, remaining: usize) {
        match self.cursor.state() {
            CursorState::Normal => {}
            CursorState::EndOfLine => {
                let row = self.cursor.row(&self.table);
                self.move_cursor((row + 1).min(ROWS - 1), 0);
            }
            CursorState::EndOfDisplay => {
                match self.config.scroll_mode {
                    ScrollMode::ShiftLeft => self.scroll_left(remaining),
                    ScrollMode::ShiftUp => self.scroll_up(remaining),
                }
                self.cursor.set_state(CursorState::Normal);
            }
        }
    }

    /// Move the cursor to the start of the next row
    ///
    /// On the last row the display scrolls up one row and the cursor goes
    /// to the start of the now blank last row.
    pub fn line_feed(&mut self) {
        let row = self.cursor.row(&self.table);
        if row < ROWS - 1 {
            self.move_cursor(row + 1, 0);
        } else {
            self.scroll_up(1);
        }
    }

    /// Shift the whole buffer `amount` cells towards home
    ///
    /// The cursor ends up just past the shifted content, so the next
    /// `amount` characters fill the tail. Amounts outside `1..80` leave the
    /// buffer alone.
    pub(crate) fn scroll_left(&mut self, amount: usize) {
        if !self.buffer.shift_left(amount) {
            // Controller auto-incremented past the last cell; point it back
            self.sync_cursor();
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("lcd: scroll left {}", amount);

        self.render(CELL_COUNT - amount);
    }

    /// Shift rows up, enough to fit `remaining` characters
    ///
    /// Drops between one and four rows off the top and leaves the cursor at
    /// the start of the first blank row.
    pub(crate) fn scroll_up(&mut self, remaining: usize) {
        let lines = remaining.div_ceil(COLS).clamp(1, ROWS);

        #[cfg(feature = "defmt")]
        defmt::debug!("lcd: scroll up {} rows", lines);

        for _ in 0..lines {
            self.buffer.shift_up();
        }

        self.render(CELL_COUNT);
        self.move_cursor(ROWS - lines, 0);
    }

    /// Rewrite the first `len` cells from the buffer, starting at home
    ///
    /// Leaves the cursor after the last cell written.
    pub(crate) fn render(&mut self, len: usize) {
        self.move_cursor(0, 0);
        for index in 0..len.min(CELL_COUNT) {
            let c = self.buffer.as_bytes()[index];
            self.put(c);
        }
    }
}
