//! Shadow buffer types
//!
//! Holds a copy of every character on the display, row-major, so content
//! can be shifted and re-rendered without reading it back from the device.

/// Number of character rows on the display
pub const ROWS: usize = 4;

/// Number of character columns on the display
pub const COLS: usize = 20;

/// Number of character cells
pub const CELL_COUNT: usize = ROWS * COLS;

/// Character used for empty cells
pub const BLANK: u8 = b' ';

/// Shadow copy of the visible characters
///
/// Cell `i` is row `i / COLS`, column `i % COLS`. Always exactly
/// [`CELL_COUNT`] cells.
#[derive(Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    cells: [u8; CELL_COUNT],
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Create a buffer filled with spaces
    pub const fn new() -> Self {
        Self {
            cells: [BLANK; CELL_COUNT],
        }
    }

    /// Reset every cell to space
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        CELL_COUNT
    }

    /// Always false; the buffer never shrinks
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Character at a buffer index
    pub fn get(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    /// Store a character; indexes past the end are ignored
    pub fn set(&mut self, index: usize, value: u8) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value;
        }
    }

    /// All cells in buffer order
    pub fn as_bytes(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Cells of a 0-based row
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row < ROWS {
            Some(&self.cells[row * COLS..(row + 1) * COLS])
        } else {
            None
        }
    }

    /// Row content as text, `None` for a bad row or non-UTF-8 content
    pub fn row_str(&self, row: usize) -> Option<&str> {
        self.row(row).and_then(|r| core::str::from_utf8(r).ok())
    }

    /// Fill a 0-based row with spaces
    pub fn clear_row(&mut self, row: usize) {
        if row < ROWS {
            self.cells[row * COLS..(row + 1) * COLS].fill(BLANK);
        }
    }

    /// Move every cell `amount` positions towards index 0
    ///
    /// Cell `i` takes the old content of cell `i + amount` for
    /// `i < CELL_COUNT - amount`. The tail keeps its old content.
    /// Returns false and leaves the buffer alone unless `amount` is in
    /// `1..CELL_COUNT`.
    pub fn shift_left(&mut self, amount: usize) -> bool {
        if amount == 0 || amount >= CELL_COUNT {
            return false;
        }
        self.cells.copy_within(amount.., 0);
        true
    }

    /// Move rows 1..3 up to rows 0..2 and blank the last row
    pub fn shift_up(&mut self) {
        self.cells.copy_within(COLS.., 0);
        self.clear_row(ROWS - 1);
    }
}

impl core::fmt::Debug for DisplayBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut list = f.debug_list();
        for row in 0..ROWS {
            match self.row_str(row) {
                Some(text) => list.entry(&text),
                None => list.entry(&self.row(row)),
            };
        }
        list.finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "DisplayBuffer[");
        for row in 0..ROWS {
            if row > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{=[u8]:a}", &self.cells[row * COLS..(row + 1) * COLS]);
        }
        defmt::write!(f, "]");
    }
}
