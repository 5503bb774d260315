//! Execution units.
//!
//! The LS-8 has a single functional unit, the ALU. Loads, stores, and stack
//! operations go straight to RAM from the instruction handlers.

/// Arithmetic Logic Unit.
pub mod alu;
