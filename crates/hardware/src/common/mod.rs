//! Common utilities and types used throughout the LS-8 emulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Fixed ISA parameters (RAM size, register count, SP slot).
//! 2. **Error Handling:** Load and machine error taxonomies.
//! 3. **Register Management:** The eight-slot register file.

/// Fixed parameters of the LS-8 ISA.
pub mod constants;

/// Error types for loading and execution.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{NUM_REGISTERS, RAM_SIZE, SP, SP_INIT};
pub use error::{ConfigError, LoadError, MachineError};
pub use reg::RegisterFile;
