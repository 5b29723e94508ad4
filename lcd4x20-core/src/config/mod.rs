//! Configuration types
//!
//! Board-agnostic configuration structures. With the `serde` feature they
//! deserialize from the same TOML tables a board config uses.

pub mod pins;
pub mod types;

pub use pins::*;
pub use types::*;
