//! Main Execution Step.
//!
//! This module implements the fetch-decode-execute cycle. Each step performs:
//! 1. **Fetch:** Reads the opcode at PC.
//! 2. **Decode:** Looks up the handler and reads the operand bytes the opcode declares.
//! 3. **Execute:** Runs the handler against the CPU.
//! 4. **Advance:** Moves PC past the instruction, jumps, or halts.
//!
//! Any error stops the machine: the CPU enters [`CpuState::Faulted`] and the
//! error is returned to the caller.

use super::handlers::Flow;
use super::{Cpu, CpuState};
use crate::common::error::MachineError;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::soc::traits::OutputSink;

impl Cpu {
    /// Executes one instruction.
    ///
    /// A halted CPU does nothing and reports [`CpuState::Halted`]; a faulted
    /// CPU reports its fault again.
    ///
    /// # Errors
    ///
    /// The [`MachineError`] that stopped execution.
    pub fn step(&mut self, out: &mut dyn OutputSink) -> Result<CpuState, MachineError> {
        match self.state {
            CpuState::Running => {}
            CpuState::Halted => return Ok(CpuState::Halted),
            CpuState::Faulted(e) => return Err(e),
        }

        match self.execute_one(out) {
            Ok(()) => Ok(self.state),
            Err(e) => {
                tracing::warn!(pc = self.pc, "machine fault: {e}");
                self.state = CpuState::Faulted(e);
                Err(e)
            }
        }
    }

    fn execute_one(&mut self, out: &mut dyn OutputSink) -> Result<(), MachineError> {
        let pc = self.pc;
        let opcode = self.ram.read(pc)?;
        let handler = self
            .dispatch
            .lookup(opcode)
            .ok_or(MachineError::Decode { opcode, pc })?;
        let inst = decode(&self.ram, pc)?;

        tracing::trace!(pc, "{}", disassemble(&inst));

        let flow = handler(self, &inst, out)?;
        self.stats.record(opcode, flow);

        match flow {
            Flow::Next => self.pc = pc + inst.len(),
            Flow::Jump(target) => self.pc = target,
            Flow::Halt => {
                self.state = CpuState::Halted;
                tracing::debug!(
                    pc,
                    retired = self.stats.instructions_retired,
                    "halted"
                );
            }
        }
        Ok(())
    }
}
