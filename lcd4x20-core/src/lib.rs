//! Board-agnostic core logic for 4x20 character displays
//!
//! This crate contains everything about the display that does not touch a
//! pin:
//!
//! - Shadow buffer of the 80 visible characters
//! - Translation between buffer positions and DDRAM addresses
//! - Cursor state machine (wrap, end of line, end of display)
//! - Command byte encodings and bring-up timings
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod address;
pub mod buffer;
pub mod command;
pub mod config;
pub mod cursor;

pub use address::RowOffsetTable;
pub use buffer::{DisplayBuffer, CELL_COUNT, COLS, ROWS};
pub use config::{ConfigError, Font, LcdConfig, PinMap, ScrollMode};
pub use cursor::{Advance, Cursor, CursorState};
