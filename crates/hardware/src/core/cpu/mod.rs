//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire machine
//! state. It coordinates the following:
//! 1. **State Management:** Registers, RAM, program counter, and flags.
//! 2. **Dispatch:** An immutable opcode-to-handler table built at construction.
//! 3. **Execution:** The fetch-decode-execute step (see [`execution`]).
//! 4. **Observability:** Trace snapshots and retired-instruction statistics.

/// Opcode-to-handler lookup table.
pub mod dispatch;

/// Fetch-decode-execute step.
pub mod execution;

/// Per-opcode instruction handlers.
pub mod handlers;

/// Hardware stack operations through SP.
pub mod stack;

/// Trace snapshots of machine state.
pub mod trace;

use crate::common::error::{LoadError, MachineError};
use crate::common::reg::RegisterFile;
use crate::core::arch::flags::Flags;
use crate::soc::memory::Ram;
use crate::stats::SimStats;

use self::dispatch::DispatchTable;

/// Run state of the CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuState {
    /// Fetching and executing instructions.
    Running,
    /// `HLT` was executed.
    Halted,
    /// Execution stopped on a fatal error.
    Faulted(MachineError),
}

/// The LS-8 machine: register file, RAM, PC, flags, and the dispatch table.
///
/// Handlers receive the `Cpu` by exclusive reference, so independent instances
/// never share state.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers; `R7` is SP.
    pub regs: RegisterFile,
    /// Main memory.
    pub ram: Ram,
    /// Program Counter.
    pub pc: usize,
    /// Comparison flags (`FL`).
    pub flags: Flags,
    /// Retired instruction statistics.
    pub stats: SimStats,
    state: CpuState,
    dispatch: DispatchTable,
}

impl Cpu {
    /// Creates a CPU in its power-on state.
    ///
    /// RAM and registers are zero except SP, which holds `0xF4`. PC and flags
    /// are zero.
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            ram: Ram::new(),
            pc: 0,
            flags: Flags::new(),
            stats: SimStats::default(),
            state: CpuState::Running,
            dispatch: DispatchTable::new(),
        }
    }

    /// Restores the power-on state, clearing RAM.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new();
        self.ram = Ram::new();
        self.pc = 0;
        self.flags = Flags::new();
        self.stats = SimStats::default();
        self.state = CpuState::Running;
    }

    /// Copies a program image into RAM at address 0.
    ///
    /// Only RAM changes; call [`Cpu::reset`] first to start a new program on
    /// a CPU that has already run.
    ///
    /// # Errors
    ///
    /// [`LoadError::ProgramTooLarge`] if the image does not fit in RAM.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.ram.load(image)?;
        tracing::debug!(bytes = image.len(), "program loaded");
        Ok(())
    }

    /// Current run state.
    #[inline]
    pub const fn state(&self) -> CpuState {
        self.state
    }

    /// Whether the CPU will execute another instruction.
    #[inline]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, CpuState::Running)
    }

    /// Whether `opcode` has a registered handler.
    pub fn is_defined(&self, opcode: u8) -> bool {
        self.dispatch.lookup(opcode).is_some()
    }

    /// Renders PC, flags, and every register as a multi-line report.
    pub fn state_summary(&self) -> String {
        let regs: Vec<String> = self
            .regs
            .as_array()
            .iter()
            .enumerate()
            .map(|(i, value)| format!("R{i}={value:#04x}"))
            .collect();
        let rows: String = regs.chunks(4).map(|row| row.join(" ") + "\n").collect();
        format!("PC = {:#04x}  FL = {}\n{rows}", self.pc, self.flags)
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
