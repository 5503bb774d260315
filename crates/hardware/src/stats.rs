//! Simulation statistics collection and reporting.
//!
//! This module tracks what the LS-8 executed. It provides:
//! 1. **Throughput:** Retired instructions and host-side instructions per second.
//! 2. **Instruction mix:** Counts by class (ALU, load/store, stack, branch, I/O, system).
//! 3. **Control flow:** How many branch-class instructions actually moved the PC.

use std::fmt;
use std::time::Instant;

use crate::core::cpu::handlers::Flow;
use crate::isa::instruction::OpcodeBits;
use crate::isa::opcodes as op;

/// Broad category of an instruction, for the instruction mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// Executed by the ALU (including `CMP`).
    Alu,
    /// `LDI`, `LD`, `ST`.
    LoadStore,
    /// `PUSH`, `POP`.
    Stack,
    /// Jumps, `CALL`, `RET`.
    Branch,
    /// `PRN`, `PRA`.
    Io,
    /// `NOP`, `HLT`.
    System,
}

impl InstructionClass {
    /// Classifies a defined opcode.
    pub fn of(opcode: u8) -> Self {
        match opcode {
            _ if opcode.is_alu() => Self::Alu,
            _ if opcode.sets_pc() => Self::Branch,
            op::LDI | op::LD | op::ST => Self::LoadStore,
            op::PUSH | op::POP => Self::Stack,
            op::PRN | op::PRA => Self::Io,
            _ => Self::System,
        }
    }
}

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,
    /// ALU instructions retired.
    pub inst_alu: u64,
    /// Load/store instructions retired.
    pub inst_load_store: u64,
    /// Stack instructions retired.
    pub inst_stack: u64,
    /// Branch-class instructions retired.
    pub inst_branch: u64,
    /// Output instructions retired.
    pub inst_io: u64,
    /// `NOP`/`HLT` retired.
    pub inst_system: u64,
    /// Branch-class instructions that set the PC.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load_store: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_system: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    pub fn record(&mut self, opcode: u8, flow: Flow) {
        self.instructions_retired += 1;
        let class = InstructionClass::of(opcode);
        let counter = match class {
            InstructionClass::Alu => &mut self.inst_alu,
            InstructionClass::LoadStore => &mut self.inst_load_store,
            InstructionClass::Stack => &mut self.inst_stack,
            InstructionClass::Branch => &mut self.inst_branch,
            InstructionClass::Io => &mut self.inst_io,
            InstructionClass::System => &mut self.inst_system,
        };
        *counter += 1;
        if class == InstructionClass::Branch && matches!(flow, Flow::Jump(_)) {
            self.branches_taken += 1;
        }
    }

    /// Count for one instruction class.
    pub const fn count(&self, class: InstructionClass) -> u64 {
        match class {
            InstructionClass::Alu => self.inst_alu,
            InstructionClass::LoadStore => self.inst_load_store,
            InstructionClass::Stack => self.inst_stack,
            InstructionClass::Branch => self.inst_branch,
            InstructionClass::Io => self.inst_io,
            InstructionClass::System => self.inst_system,
        }
    }

    /// Renders the statistics report.
    pub fn report(&self) -> String {
        self.to_string()
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elapsed = self.start_time.elapsed().as_secs_f64().max(1e-9);
        let retired = self.instructions_retired;
        let pct = |n: u64| {
            if retired == 0 {
                0.0
            } else {
                100.0 * n as f64 / retired as f64
            }
        };

        writeln!(f, "==================== LS-8 statistics ====================")?;
        writeln!(f, "  instructions retired : {retired}")?;
        writeln!(f, "  host time            : {elapsed:.6} s")?;
        writeln!(
            f,
            "  throughput           : {:.3} MIPS",
            retired as f64 / elapsed / 1e6
        )?;
        writeln!(f, "  ---- instruction mix ----")?;
        for (name, n) in [
            ("alu", self.inst_alu),
            ("load/store", self.inst_load_store),
            ("stack", self.inst_stack),
            ("branch", self.inst_branch),
            ("io", self.inst_io),
            ("system", self.inst_system),
        ] {
            writeln!(f, "  {name:<20} : {n:>8} ({:5.1}%)", pct(n))?;
        }
        writeln!(
            f,
            "  branches taken       : {} of {}",
            self.branches_taken, self.inst_branch
        )?;
        write!(f, "=========================================================")
    }
}
