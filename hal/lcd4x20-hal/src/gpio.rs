//! Digital line abstractions
//!
//! Lines are addressed by a small numeric identifier instead of by owned
//! pin objects, so a single capability can drive every control and data
//! line of the display.

/// Identifier of a digital line (a GPIO number on most boards)
pub type LineId = u8;

/// Logic level of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    /// Level of bit `bit` in `value`
    pub const fn of_bit(value: u8, bit: u8) -> Self {
        if (value >> bit) & 0x01 != 0 {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Check if this is logic 1
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Direction of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Input,
    Output,
}

/// Digital line capability
///
/// Implementations handle the register manipulation for the specific chip.
/// Writes cannot fail: the display bus has no way to report a fault, so
/// neither does this trait.
pub trait Lines {
    /// Configure the direction of a line
    fn set_mode(&mut self, line: LineId, mode: PinMode);

    /// Drive a line to a logic level
    fn set_level(&mut self, line: LineId, level: Level);

    /// Read the level of a line
    fn read_level(&mut self, line: LineId) -> Level;

    /// Drive a line high (logic 1)
    fn set_high(&mut self, line: LineId) {
        self.set_level(line, Level::High);
    }

    /// Drive a line low (logic 0)
    fn set_low(&mut self, line: LineId) {
        self.set_level(line, Level::Low);
    }
}

impl<T: Lines + ?Sized> Lines for &mut T {
    fn set_mode(&mut self, line: LineId, mode: PinMode) {
        (**self).set_mode(line, mode);
    }

    fn set_level(&mut self, line: LineId, level: Level) {
        (**self).set_level(line, level);
    }

    fn read_level(&mut self, line: LineId) -> Level {
        (**self).read_level(line)
    }
}
