//! `Lines` over embedded-hal output pins
//!
//! Chip HALs hand out pins that are already configured as push-pull
//! outputs, so `set_mode` has nothing left to do here. The bank remembers
//! the last level it drove on each line and reports it from `read_level`.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::gpio::{Level, LineId, Lines, PinMode};

/// A fixed set of output pins addressed by index
///
/// Line `n` is `pins[n]`. Writes to an index outside the bank are ignored.
pub struct OutputBank<P, const N: usize> {
    pins: [P; N],
    levels: [Level; N],
}

impl<P, const N: usize> OutputBank<P, N>
where
    P: OutputPin<Error = Infallible>,
{
    /// Create a bank from pins that are already outputs
    pub fn new(pins: [P; N]) -> Self {
        Self {
            pins,
            levels: [Level::Low; N],
        }
    }

    /// Number of lines in the bank
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the bank has no lines
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Give the pins back
    pub fn into_pins(self) -> [P; N] {
        self.pins
    }
}

impl<P, const N: usize> Lines for OutputBank<P, N>
where
    P: OutputPin<Error = Infallible>,
{
    fn set_mode(&mut self, _line: LineId, _mode: PinMode) {}

    fn set_level(&mut self, line: LineId, level: Level) {
        let idx = line as usize;
        let Some(pin) = self.pins.get_mut(idx) else {
            return;
        };
        // Infallible
        let _ = match level {
            Level::High => pin.set_high(),
            Level::Low => pin.set_low(),
        };
        self.levels[idx] = level;
    }

    fn read_level(&mut self, line: LineId) -> Level {
        self.levels.get(line as usize).copied().unwrap_or_default()
    }
}
