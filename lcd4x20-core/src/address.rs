//! DDRAM address translation
//!
//! The 4x20 controller is a 2-line controller folded in half: DDRAM line 1
//! holds display rows 0 and 2, DDRAM line 2 holds rows 1 and 3. Going
//! through the address space the rows appear in the order 0-2-1-3, and the
//! addresses 0x28..=0x3F belong to no row at all.
//!
//! ```text
//! row 0: 0x00..0x14   buffer  0..20
//! row 1: 0x40..0x54   buffer 20..40
//! row 2: 0x14..0x28   buffer 40..60
//! row 3: 0x54..0x68   buffer 60..80
//! ```

use crate::buffer::{COLS, ROWS};
use crate::config::ConfigError;

/// Highest DDRAM address
pub const DDRAM_MAX: u8 = 0x7F;

/// DDRAM base address of each row on a 4x20 HD44780
pub const HD44780_4X20_OFFSETS: [u8; ROWS] = [0x00, 0x40, 0x14, 0x54];

/// Row to DDRAM base address lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowOffsetTable {
    offsets: [u8; ROWS],
}

impl Default for RowOffsetTable {
    fn default() -> Self {
        Self::HD44780_4X20
    }
}

impl RowOffsetTable {
    /// Standard 4x20 layout
    pub const HD44780_4X20: Self = Self::new(HD44780_4X20_OFFSETS);

    /// Create a table for a controller variant with other row offsets
    ///
    /// The offsets are not checked; use [`RowOffsetTable::try_new`] for
    /// offsets that come from configuration.
    pub const fn new(offsets: [u8; ROWS]) -> Self {
        Self { offsets }
    }

    /// Create a table, rejecting rows that run past DDRAM or overlap
    pub fn try_new(offsets: [u8; ROWS]) -> Result<Self, ConfigError> {
        let table = Self::new(offsets);
        table.validate()?;
        Ok(table)
    }

    /// Check that every row fits in DDRAM and no two rows share an address
    pub fn validate(&self) -> Result<(), ConfigError> {
        let last_col = (COLS - 1) as u8;

        for (row, &base) in self.offsets.iter().enumerate() {
            if base > DDRAM_MAX - last_col {
                return Err(ConfigError::RowOffset(base));
            }
            let overlaps = self.offsets[row + 1..]
                .iter()
                .any(|&other| base.abs_diff(other) < COLS as u8);
            if overlaps {
                return Err(ConfigError::RowOffset(base));
            }
        }
        Ok(())
    }

    /// DDRAM address of column 0 of a row
    ///
    /// Rows past the last row are clamped to the last row.
    pub const fn base(&self, row: usize) -> u8 {
        let row = if row >= ROWS { ROWS - 1 } else { row };
        self.offsets[row]
    }

    /// DDRAM address of a (row, column) position
    ///
    /// Columns past the last column are clamped to the last column.
    pub const fn to_physical(&self, row: usize, col: usize) -> u8 {
        let col = if col >= COLS { COLS - 1 } else { col };
        self.base(row).wrapping_add(col as u8)
    }

    /// Row and column of a DDRAM address
    ///
    /// Returns `None` for addresses that belong to no row.
    pub fn position(&self, address: u8) -> Option<(usize, usize)> {
        self.offsets.iter().enumerate().find_map(|(row, &base)| {
            let col = address.checked_sub(base)? as usize;
            (col < COLS).then_some((row, col))
        })
    }

    /// Buffer index of a DDRAM address
    ///
    /// Returns `None` for addresses that belong to no row, such as the
    /// 0x28..=0x3F gap.
    pub fn to_logical(&self, address: u8) -> Option<usize> {
        self.position(address).map(|(row, col)| row * COLS + col)
    }

    /// DDRAM address of a buffer index
    pub const fn index_to_physical(&self, index: usize) -> u8 {
        self.to_physical(index / COLS, index % COLS)
    }
}
