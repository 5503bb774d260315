//! LS-8 Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight 8-bit registers
//! `R0`-`R7`. It provides:
//! 1. **Storage:** Eight byte-wide slots that wrap on arithmetic overflow.
//! 2. **Invariant Enforcement:** Bounds-checked access by register index.
//! 3. **Stack Pointer:** `R7` is reserved as SP and starts at [`SP_INIT`].

use super::constants::{NUM_REGISTERS, SP, SP_INIT};
use super::error::MachineError;

/// General-purpose register file.
///
/// Register `R7` doubles as the stack pointer; it is an ordinary slot and
/// PUSH/POP/CALL/RET all address the stack through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with every register zero except SP.
    pub fn new() -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP] = SP_INIT;
        Self { regs }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Errors
    ///
    /// [`MachineError::RegisterOutOfBounds`] if `idx` is 8 or greater.
    pub fn read(&self, idx: usize) -> Result<u8, MachineError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(MachineError::RegisterOutOfBounds { index: idx })
    }

    /// Writes a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The byte to store.
    ///
    /// # Errors
    ///
    /// [`MachineError::RegisterOutOfBounds`] if `idx` is 8 or greater.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), MachineError> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(MachineError::RegisterOutOfBounds { index: idx })?;
        *slot = val;
        Ok(())
    }

    /// Current stack pointer value.
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Overwrites the stack pointer.
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP] = val;
    }

    /// All register values in index order.
    pub const fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
