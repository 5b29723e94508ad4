//! HD44780 command encodings and timings
//!
//! Constants are grouped by the protocol phase that uses them. Timings are
//! the minimum waits the driver passes to its delay provider after the
//! corresponding write.

/// Clear display, address counter to 0
pub const CLEAR: u8 = 0x01;

/// Return home, address counter to 0
pub const HOME: u8 = 0x02;

/// Set DDRAM address; OR with the 7-bit address
pub const SET_DDRAM_ADDRESS: u8 = 0x80;

/// 4-bit bring-up nibbles
pub mod init {
    /// "Function set, 8-bit" high nibble, sent three times to reach a known
    /// state whatever mode the controller powered up in
    pub const RESET_NIBBLE: u8 = 0x03;

    /// "Function set, 4-bit" high nibble
    pub const FOUR_BIT_NIBBLE: u8 = 0x02;
}

/// Function set
pub mod function_set {
    /// 5x7 dot characters
    pub const DOTS_5X7: u8 = 0x00;

    /// 5x10 dot characters
    pub const DOTS_5X10: u8 = 0x04;
}

/// Display on/off control
pub mod display_control {
    pub const BASE: u8 = 0x08;
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;
}

/// Entry mode set
pub mod entry_mode {
    pub const BASE: u8 = 0x04;
    /// Address counter increments after each write
    pub const INCREMENT: u8 = 0x02;
    /// Display shifts with each write
    pub const DISPLAY_SHIFT: u8 = 0x01;
}

/// Waits required by the controller
pub mod timing {
    /// Power-on settle before the first write (ms)
    pub const POWER_ON_MS: u32 = 50;
    /// After the first reset nibble (ms)
    pub const RESET_FIRST_MS: u32 = 5;
    /// After the second reset nibble (us)
    pub const RESET_SECOND_US: u32 = 100;
    /// After the third reset nibble (ms)
    pub const RESET_THIRD_MS: u32 = 5;
    /// After function set and display control (us)
    pub const COMMAND_US: u32 = 60;
    /// After clear (ms)
    pub const CLEAR_MS: u32 = 3;
    /// After entry mode set (ms)
    pub const ENTRY_MODE_MS: u32 = 1;
    /// Enable low/high phase of the strobe pulse (us)
    pub const STROBE_EDGE_US: u32 = 1;
    /// After the strobe falls, while the controller latches (ms)
    pub const STROBE_LATCH_MS: u32 = 1;
}

/// Set DDRAM address command for a physical address
pub const fn set_ddram_address(address: u8) -> u8 {
    SET_DDRAM_ADDRESS | (address & 0x7F)
}

/// Function set pattern for `num_lines` display lines
///
/// `(num_lines - 1) << 3 | dot_format`
pub const fn function_set(num_lines: u8, dot_format: u8) -> u8 {
    (num_lines.saturating_sub(1) << 3) | dot_format
}

/// Display control command
pub const fn display_control(display_on: bool, cursor_on: bool, blink_on: bool) -> u8 {
    let mut value = display_control::BASE;
    if display_on {
        value |= display_control::DISPLAY_ON;
    }
    if cursor_on {
        value |= display_control::CURSOR_ON;
    }
    if blink_on {
        value |= display_control::BLINK_ON;
    }
    value
}

/// Entry mode set command
pub const fn entry_mode(increment: bool, display_shift: bool) -> u8 {
    let mut value = entry_mode::BASE;
    if increment {
        value |= entry_mode::INCREMENT;
    }
    if display_shift {
        value |= entry_mode::DISPLAY_SHIFT;
    }
    value
}
