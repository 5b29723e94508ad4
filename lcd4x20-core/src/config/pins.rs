//! Display wiring
//!
//! Which line drives which controller input. The R/W input is normally
//! tied to ground: the driver only ever writes, and leaving it out saves a
//! pin.

use heapless::FnvIndexSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line identifier, matches `lcd4x20_hal::LineId`
pub type LineId = u8;

/// Highest GPIO number accepted by [`parse_pin`]
pub const MAX_GPIO: u8 = 63;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The same line is assigned to two inputs
    DuplicatePin(LineId),
    /// A row offset runs past DDRAM or overlaps another row
    RowOffset(u8),
}

/// Controller input to line assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinMap {
    /// Register select: low = command, high = data
    pub rs: LineId,
    /// Enable (strobe)
    pub enable: LineId,
    /// D4..D7, in that order
    pub data: [LineId; 4],
    /// Read/write select, `None` when tied to ground
    #[cfg_attr(feature = "serde", serde(default))]
    pub rw: Option<LineId>,
}

impl PinMap {
    /// Write-only wiring
    pub const fn new(rs: LineId, enable: LineId, data: [LineId; 4]) -> Self {
        Self {
            rs,
            enable,
            data,
            rw: None,
        }
    }

    /// Also drive the R/W input
    pub const fn with_rw(mut self, rw: LineId) -> Self {
        self.rw = Some(rw);
        self
    }

    /// Every line in use: RS, E, D4..D7, then R/W if present
    pub fn lines(&self) -> impl Iterator<Item = LineId> + '_ {
        [self.rs, self.enable]
            .into_iter()
            .chain(self.data)
            .chain(self.rw)
    }

    /// Check that no line is assigned twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: FnvIndexSet<LineId, 8> = FnvIndexSet::new();
        for line in self.lines() {
            // At most 7 lines, capacity is never exceeded
            if !seen.insert(line).unwrap_or(true) {
                return Err(ConfigError::DuplicatePin(line));
            }
        }
        Ok(())
    }
}

/// Parse a pin string from config
///
/// Supports "gpio7", "GPIO7" and a bare "7".
pub fn parse_pin(s: &str) -> Option<LineId> {
    let s = s.trim();

    let num_str = s
        .strip_prefix("gpio")
        .or_else(|| s.strip_prefix("GPIO"))
        .unwrap_or(s);

    let pin: u8 = num_str.parse().ok()?;

    if pin > MAX_GPIO {
        return None;
    }

    Some(pin)
}
