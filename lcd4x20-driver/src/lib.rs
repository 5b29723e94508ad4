//! 4-bit parallel driver for 4x20 HD44780 character displays
//!
//! This crate drives the display through the line capability defined in
//! lcd4x20-hal and keeps the shadow buffer from lcd4x20-core in sync with
//! it:
//!
//! - Nibble/byte transport with enable strobing
//! - Controller bring-up sequence
//! - Printing with line wrap and line-feed padding
//! - Scrolling (shift up or shift left) once the display is full
//! - Optional deferred rendering with explicit flush
//!
//! # Usage
//!
//! ```ignore
//! let pins = PinMap::new(12, 11, [5, 4, 3, 2]);
//! let mut lcd = Lcd::new(lines, delay, pins, LcdConfig::default())?;
//! lcd.init();
//! lcd.println("Hello");
//! lcd.print("world");
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod lcd;
pub mod overflow;
pub mod transport;

#[cfg(test)]
mod sim;

pub use lcd::Lcd;
pub use lcd4x20_core::{ConfigError, Font, LcdConfig, PinMap, ScrollMode};
pub use transport::Bus;
