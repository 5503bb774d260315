//! Hardware stack.
//!
//! A full-descending stack addressed through SP (`R7`): push pre-decrements,
//! pop post-increments. `CALL`/`RET` use the same path as `PUSH`/`POP`. SP
//! arithmetic wraps like any other register.

use super::Cpu;
use crate::common::error::MachineError;

impl Cpu {
    /// Pushes `value`: `SP -= 1; ram[SP] = value`.
    ///
    /// # Errors
    ///
    /// [`MachineError::MemoryOutOfBounds`] if the new top lies outside RAM.
    pub fn push(&mut self, value: u8) -> Result<(), MachineError> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.ram.write(sp as usize, value)?;
        self.regs.set_sp(sp);
        Ok(())
    }

    /// Pops the top of the stack: `value = ram[SP]; SP += 1`.
    ///
    /// # Errors
    ///
    /// [`MachineError::MemoryOutOfBounds`] if SP lies outside RAM.
    pub fn pop(&mut self) -> Result<u8, MachineError> {
        let sp = self.regs.sp();
        let value = self.ram.read(sp as usize)?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(value)
    }
}
