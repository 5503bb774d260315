//! Memory subsystem.
//!
//! The LS-8 has a single flat RAM with no paging, caching, or memory-mapped devices.

/// Flat byte-addressable RAM.
pub mod ram;

pub use ram::Ram;
