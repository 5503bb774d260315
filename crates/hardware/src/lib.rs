//! LS-8 emulator library.
//!
//! This crate implements the LS-8, a minimal 8-bit register machine, with the following:
//! 1. **Core:** Register file, flag register, ALU, and a table-driven fetch-decode-execute loop.
//! 2. **Memory:** A flat 256-byte RAM holding program and stack.
//! 3. **ISA:** Opcode table, decoding, and a disassembler.
//! 4. **Peripherals:** Output and trace sink traits with console implementations.
//! 5. **Simulation:** Listing loader, run loop, configuration, and statistics.

/// Common types and constants (registers, errors, ISA parameters).
pub mod common;
/// Run-time configuration (tracing, step bound).
pub mod config;
/// CPU core (state, dispatch, handlers, ALU, flags).
pub mod core;
/// Instruction set (opcodes, decode, disassembler).
pub mod isa;
/// Program loader and simulator.
pub mod sim;
/// Memory and output devices.
pub mod soc;
/// Retired-instruction statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, RAM, PC, and flags.
pub use crate::core::{Cpu, CpuState};
/// Run loop; construct with `Simulator::new`.
pub use crate::sim::{RunOutcome, Simulator};
