//! Buffered 4x20 display driver
//!
//! Every character goes into the shadow buffer and, unless rendering is
//! deferred, to the controller at the same time. The controller's own
//! address counter handles the move to the next column; row changes and
//! scrolling go through the row offset table because the controller's rows
//! are not contiguous.
//!
//! Rows are numbered 1..=4 at this API, matching the labels printed on most
//! modules. Columns are 0-based.

use core::fmt;

use embedded_hal::delay::DelayNs;
use lcd4x20_core::buffer::BLANK;
use lcd4x20_core::command::{self, init, timing};
use lcd4x20_core::{
    Advance, ConfigError, Cursor, CursorState, DisplayBuffer, LcdConfig, PinMap, RowOffsetTable,
    ScrollMode, COLS, ROWS,
};
use lcd4x20_hal::Lines;

use crate::transport::Bus;

/// Line feed; pads the rest of the row with spaces
pub const LINE_FEED: u8 = b'\n';

/// 4x20 character display on a 4-bit parallel bus
pub struct Lcd<L, D> {
    pub(crate) bus: Bus<L, D>,
    pub(crate) config: LcdConfig,
    pub(crate) table: RowOffsetTable,
    pub(crate) buffer: DisplayBuffer,
    pub(crate) cursor: Cursor,
    /// Buffer holds content the controller has not been sent
    pub(crate) dirty: bool,
}

impl<L: Lines, D: DelayNs> Lcd<L, D> {
    /// Create a driver for a display wired as `pins`
    ///
    /// Nothing is sent to the controller until [`Lcd::init`].
    pub fn new(lines: L, delay: D, pins: PinMap, config: LcdConfig) -> Result<Self, ConfigError> {
        pins.validate()?;

        let table = RowOffsetTable::HD44780_4X20;
        Ok(Self {
            bus: Bus::new(lines, delay, pins),
            config,
            table,
            buffer: DisplayBuffer::new(),
            cursor: Cursor::home(&table),
            dirty: false,
        })
    }

    /// Use a different row offset table, for controller variants
    ///
    /// The cursor moves home. Buffer content is kept but is not redrawn
    /// at the new addresses until [`Lcd::flush`].
    pub fn set_row_offsets(&mut self, table: RowOffsetTable) -> Result<(), ConfigError> {
        table.validate()?;
        self.table = table;
        self.move_cursor(0, 0);
        Ok(())
    }

    /// Run the 4-bit bring-up sequence
    ///
    /// Leaves the display cleared, on, auto-incrementing, and the cursor
    /// home. The shadow buffer is blanked to match.
    pub fn init(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("lcd: init, font {}", self.config.font);

        self.bus.configure_outputs();
        self.bus.delay().delay_ms(timing::POWER_ON_MS);

        // Reset to a known state whatever mode the controller is in
        self.bus.write_nibble(init::RESET_NIBBLE, true);
        self.bus.delay().delay_ms(timing::RESET_FIRST_MS);
        self.bus.write_nibble(init::RESET_NIBBLE, true);
        self.bus.delay().delay_us(timing::RESET_SECOND_US);
        self.bus.write_nibble(init::RESET_NIBBLE, true);
        self.bus.delay().delay_ms(timing::RESET_THIRD_MS);

        // The second nibble is the high half of the function set below
        self.bus.write_nibble(init::FOUR_BIT_NIBBLE, true);
        self.bus.write_nibble(init::FOUR_BIT_NIBBLE, true);

        let function_set = command::function_set(ROWS as u8, self.config.font.dot_format());
        self.bus.write_nibble(function_set, true);
        self.bus.delay().delay_us(timing::COMMAND_US);

        self.bus.write_byte(self.config.display_control(), true);
        self.bus.delay().delay_us(timing::COMMAND_US);

        self.bus.write_byte(command::CLEAR, true);
        self.bus.delay().delay_ms(timing::CLEAR_MS);

        self.bus.write_byte(command::entry_mode(true, false), true);
        self.bus.delay().delay_ms(timing::ENTRY_MODE_MS);

        self.buffer.clear();
        self.cursor = Cursor::home(&self.table);
        self.dirty = false;
    }

    /// Choose how the display scrolls once full
    pub fn set_scroll_mode(&mut self, mode: ScrollMode) {
        self.config.scroll_mode = mode;
    }

    /// Active scroll mode
    pub fn scroll_mode(&self) -> ScrollMode {
        self.config.scroll_mode
    }

    /// Print one character
    pub fn print_char(&mut self, c: u8) {
        self.handle_cursor_event(1);
        self.print_internal(c);
    }

    /// Print a string, byte by byte
    ///
    /// Only single-byte characters are meaningful to the controller;
    /// multi-byte UTF-8 sequences arrive as their raw bytes.
    pub fn print(&mut self, text: &str) {
        self.print_all(text.as_bytes());
    }

    /// Print `length` bytes of `bytes` starting at `offset`
    ///
    /// The range is clamped to the slice.
    pub fn print_bytes(&mut self, bytes: &[u8], offset: usize, length: usize) {
        let start = offset.min(bytes.len());
        let end = start.saturating_add(length).min(bytes.len());
        self.print_all(&bytes[start..end]);
    }

    /// Print a string, then end the line so the next print starts on the
    /// next row
    pub fn println(&mut self, text: &str) {
        self.print(text);
        self.end();
    }

    /// [`Lcd::print_bytes`] followed by [`Lcd::end`]
    pub fn println_bytes(&mut self, bytes: &[u8], offset: usize, length: usize) {
        self.print_bytes(bytes, offset, length);
        self.end();
    }

    /// Print a string from column 0 of a 1-based row
    pub fn print_at(&mut self, row: usize, text: &str) {
        self.set_cursor(row, 0);
        self.print(text);
    }

    fn print_all(&mut self, bytes: &[u8]) {
        let len = bytes.len();
        for (i, &c) in bytes.iter().enumerate() {
            // Make room for what is left before writing the next byte
            self.handle_cursor_event(len - i);
            self.print_internal(c);
        }
    }

    /// Write a character at the cursor, or pad the row on line feed
    ///
    /// Callers run [`Lcd::handle_cursor_event`] first; this never scrolls.
    pub(crate) fn print_internal(&mut self, c: u8) {
        if c == LINE_FEED {
            let (_, col) = self.cursor.position(&self.table);
            for _ in col..COLS {
                self.put(BLANK);
            }
        } else {
            self.put(c);
        }
    }

    pub(crate) fn put(&mut self, c: u8) {
        let index = self.cursor.index(&self.table);
        self.buffer.set(index, c);

        if self.config.auto_flush {
            self.bus.write_byte(c, false);
        } else {
            self.dirty = true;
        }

        self.increment_cursor();
    }

    fn increment_cursor(&mut self) {
        if self.cursor.advance(&self.table) == Advance::NextRow {
            self.sync_cursor();
        }
    }

    /// Point the controller's address counter at the cursor
    ///
    /// HOME goes first: some modules misplace the next write if the
    /// address is set straight from the end of a row.
    pub(crate) fn sync_cursor(&mut self) {
        if !self.config.auto_flush {
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("lcd: cursor -> {=u8:#x}", self.cursor.address());

        self.bus.write_byte(command::HOME, true);
        self.bus
            .write_byte(command::set_ddram_address(self.cursor.address()), true);
    }

    /// Move to a 0-based position and clear any pending overflow
    pub(crate) fn move_cursor(&mut self, row: usize, col: usize) {
        self.cursor.move_to(&self.table, row, col);
        self.sync_cursor();
    }

    /// Blank the display and the buffer and home the cursor
    pub fn clear(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("lcd: clear");

        self.buffer.clear();

        if self.config.auto_flush {
            self.bus.write_byte(command::CLEAR, true);
            self.bus.delay().delay_ms(timing::CLEAR_MS);
        } else {
            self.dirty = true;
        }

        self.move_cursor(0, 0);
    }

    /// Move the cursor to column `col` of 1-based `row`
    ///
    /// Rows outside 1..=4 are clamped into range and columns past 19 are
    /// clamped to 19. Any pending end-of-line or end-of-display is dropped.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.clamp(1, ROWS);
        self.move_cursor(row - 1, col);
    }

    /// Finish the current row
    ///
    /// The next print starts at column 0 of the next row, or scrolls if
    /// this is the last row. Does nothing if the row is already finished.
    pub fn end(&mut self) {
        if self.cursor.state() != CursorState::Normal {
            return;
        }

        let row = self.cursor.row(&self.table);
        self.move_cursor(row, COLS - 1);

        let state = if row == ROWS - 1 {
            CursorState::EndOfDisplay
        } else {
            CursorState::EndOfLine
        };
        self.cursor.set_state(state);
    }

    /// Blank a 1-based row in the buffer only
    ///
    /// Rows outside 1..=4 mean row 1. The display is not redrawn; call
    /// [`Lcd::flush`] or print over the row to show the change.
    pub fn clear_line(&mut self, row: usize) {
        let row = if (1..=ROWS).contains(&row) { row } else { 1 };
        self.buffer.clear_row(row - 1);
        self.dirty = true;
    }

    /// 1-based row of the cursor
    pub fn current_row(&self) -> usize {
        self.cursor.row(&self.table) + 1
    }

    /// Buffer index of the cursor
    pub fn cursor_index(&self) -> usize {
        self.cursor.index(&self.table)
    }

    /// Cursor position and overflow state
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Shadow buffer
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Active configuration
    pub fn config(&self) -> &LcdConfig {
        &self.config
    }

    /// Row offset table in use
    pub fn row_offsets(&self) -> &RowOffsetTable {
        &self.table
    }

    /// Change cursor visibility and blinking
    pub fn set_display_control(&mut self, cursor_visible: bool, cursor_blink: bool) {
        self.config.cursor_visible = cursor_visible;
        self.config.cursor_blink = cursor_blink;
        self.bus.write_byte(self.config.display_control(), true);
        self.bus.delay().delay_us(timing::COMMAND_US);
    }

    /// Send a raw instruction byte
    pub fn write_command(&mut self, value: u8) {
        self.bus.write_byte(value, true);
    }

    /// Send a raw instruction nibble
    pub fn write_command_nibble(&mut self, nibble: u8) {
        self.bus.write_nibble(nibble, true);
    }

    /// Check if the buffer holds changes the display has not been sent
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Turn immediate rendering on or off
    ///
    /// Turning it back on flushes pending changes and points the
    /// controller at the cursor.
    pub fn set_auto_flush(&mut self, auto_flush: bool) {
        let was_deferred = !self.config.auto_flush;
        self.config.auto_flush = auto_flush;
        if !auto_flush {
            return;
        }

        if self.dirty {
            self.flush();
        } else if was_deferred {
            // Cursor may have moved while nothing was sent
            self.sync_cursor();
        }
    }

    /// Redraw the whole display from the buffer
    ///
    /// Restores the cursor, including any pending end-of-line or
    /// end-of-display, afterwards.
    pub fn flush(&mut self) {
        let saved = self.cursor;
        let auto_flush = self.config.auto_flush;

        self.config.auto_flush = true;
        self.render(self.buffer.len());
        self.cursor = saved;
        self.sync_cursor();
        self.config.auto_flush = auto_flush;

        self.dirty = false;
    }

    /// Bus to the controller
    pub fn bus(&self) -> &Bus<L, D> {
        &self.bus
    }

    /// Give back the line capability and delay provider
    pub fn release(self) -> (L, D) {
        self.bus.release()
    }
}

impl<L: Lines, D: DelayNs> fmt::Write for Lcd<L, D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }
}
