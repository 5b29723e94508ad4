//! LCD4x20 Hardware Abstraction Layer
//!
//! This crate defines the digital line capability the display driver is
//! written against. Chip-specific code provides an implementation of
//! [`Lines`]; blocking waits use [`embedded_hal::delay::DelayNs`] directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lcd4x20-driver (buffer, scroll, bus)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lcd4x20-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  OutputBank   │       │  board code   │
//! │ (embedded-hal)│       │ (own `Lines`) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::Lines`] - Named digital lines (mode, level, read-back)

#![no_std]
#![deny(unsafe_code)]

pub mod bank;
pub mod gpio;

// Re-export key types at crate root for convenience
pub use bank::OutputBank;
pub use embedded_hal::delay::DelayNs;
pub use gpio::{Level, LineId, Lines, PinMode};
