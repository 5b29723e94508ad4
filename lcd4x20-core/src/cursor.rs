//! Cursor state machine
//!
//! The cursor lives in DDRAM address space. Advancing it is pure logic; the
//! driver performs whatever device traffic the returned [`Advance`] asks
//! for.

use crate::address::RowOffsetTable;
use crate::buffer::{COLS, ROWS};

/// Overflow state of the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorState {
    /// Next character goes at the cursor
    #[default]
    Normal,
    /// Next character goes at column 0 of the next row
    ///
    /// Only entered through an explicit end-of-line request, never by
    /// wrapping.
    EndOfLine,
    /// The last cell has been written; the display must scroll before the
    /// next character
    EndOfDisplay,
}

/// Result of advancing the cursor past a written character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advance {
    /// Moved one column right; the controller auto-increments with us
    Column,
    /// Wrapped to column 0 of the next row; the controller address must be
    /// set explicitly
    NextRow,
    /// Parked on the last cell of the display
    EndOfDisplay,
}

/// Cursor position and overflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// DDRAM address; always inside one of the table's rows
    address: u8,
    state: CursorState,
}

impl Cursor {
    /// Cursor at row 0, column 0
    pub const fn home(table: &RowOffsetTable) -> Self {
        Self::at(table, 0, 0)
    }

    /// Cursor at a 0-based (row, column), clamped to the display
    pub const fn at(table: &RowOffsetTable, row: usize, col: usize) -> Self {
        Self {
            address: table.to_physical(row, col),
            state: CursorState::Normal,
        }
    }

    /// Move to a 0-based (row, column) and clear the overflow state
    pub fn move_to(&mut self, table: &RowOffsetTable, row: usize, col: usize) {
        *self = Self::at(table, row, col);
    }

    /// DDRAM address
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Overflow state
    pub const fn state(&self) -> CursorState {
        self.state
    }

    /// Replace the overflow state
    pub fn set_state(&mut self, state: CursorState) {
        self.state = state;
    }

    /// 0-based (row, column)
    pub fn position(&self, table: &RowOffsetTable) -> (usize, usize) {
        // The address only ever comes from `to_physical`
        table.position(self.address).unwrap_or((0, 0))
    }

    /// 0-based row
    pub fn row(&self, table: &RowOffsetTable) -> usize {
        self.position(table).0
    }

    /// Buffer index under the cursor
    pub fn index(&self, table: &RowOffsetTable) -> usize {
        let (row, col) = self.position(table);
        row * COLS + col
    }

    /// Step past the character just written
    pub fn advance(&mut self, table: &RowOffsetTable) -> Advance {
        let (row, col) = self.position(table);

        if col < COLS - 1 {
            self.address = self.address.wrapping_add(1);
            Advance::Column
        } else if row < ROWS - 1 {
            // Not address + 1: the next row is elsewhere in DDRAM
            self.address = table.to_physical(row + 1, 0);
            Advance::NextRow
        } else {
            self.state = CursorState::EndOfDisplay;
            Advance::EndOfDisplay
        }
    }
}
