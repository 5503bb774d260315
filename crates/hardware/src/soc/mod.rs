//! Machine peripherals.
//!
//! This module organizes everything the CPU talks to besides its own registers:
//! main memory, the output collaborator traits, and the console devices
//! implementing them.

/// Output devices (consoles).
pub mod devices;

/// Main memory.
pub mod memory;

/// Output and trace sink traits.
pub mod traits;

pub use memory::Ram;
pub use traits::{NullSink, OutputSink, TraceSink};
