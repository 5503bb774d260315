//! LS-8 architectural state beyond the register file.
//!
//! The general-purpose registers live in [`crate::common::reg`]; this module
//! holds the comparison flag register.

/// Comparison flag register (`FL`).
pub mod flags;

pub use flags::Flags;
