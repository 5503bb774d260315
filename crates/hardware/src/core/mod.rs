//! Core processor implementation.
//!
//! This module contains the CPU (state, dispatch, handlers, execution step),
//! its architectural flag register, and the ALU.

/// Architectural state (flag register).
pub mod arch;

/// CPU core implementation and execution.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, CpuState};
