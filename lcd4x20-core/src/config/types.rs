//! Display configuration type definitions

use crate::command;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the display makes room once every cell is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScrollMode {
    /// Drop whole rows off the top, like a terminal
    ShiftUp,
    /// Drop characters off the start, like a ticker
    #[default]
    ShiftLeft,
}

/// Character font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Font {
    #[default]
    Dots5x7,
    Dots5x10,
}

impl Font {
    /// Function set dot-format bits
    pub const fn dot_format(self) -> u8 {
        match self {
            Font::Dots5x7 => command::function_set::DOTS_5X7,
            Font::Dots5x10 => command::function_set::DOTS_5X10,
        }
    }
}

/// Driver behaviour configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LcdConfig {
    /// Scroll behaviour when the display is full
    pub scroll_mode: ScrollMode,
    /// Character font
    pub font: Font,
    /// Show the underline cursor
    pub cursor_visible: bool,
    /// Blink the character under the cursor
    pub cursor_blink: bool,
    /// Send every change to the display immediately
    ///
    /// When false, changes stay in the shadow buffer until `flush()`.
    pub auto_flush: bool,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LcdConfig {
    /// Default configuration: shift left, 5x7, hidden cursor, auto flush
    pub const fn new() -> Self {
        Self {
            scroll_mode: ScrollMode::ShiftLeft,
            font: Font::Dots5x7,
            cursor_visible: false,
            cursor_blink: false,
            auto_flush: true,
        }
    }

    pub const fn with_scroll_mode(mut self, mode: ScrollMode) -> Self {
        self.scroll_mode = mode;
        self
    }

    pub const fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub const fn with_cursor(mut self, visible: bool, blink: bool) -> Self {
        self.cursor_visible = visible;
        self.cursor_blink = blink;
        self
    }

    pub const fn with_auto_flush(mut self, auto_flush: bool) -> Self {
        self.auto_flush = auto_flush;
        self
    }

    /// Display control command for this configuration, display on
    pub const fn display_control(&self) -> u8 {
        command::display_control(true, self.cursor_visible, self.cursor_blink)
    }
}
