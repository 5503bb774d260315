//! Opcode dispatch table.
//!
//! Maps every opcode byte to its handler. The table is built once when the CPU
//! is constructed and never modified; adding an instruction means registering
//! one more entry here.

use std::fmt;

use super::Cpu;
use super::handlers::{self, Flow};
use crate::common::error::MachineError;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes as op;
use crate::soc::traits::OutputSink;

/// Instruction handler: a state transition over the CPU.
pub type Handler =
    fn(&mut Cpu, &Instruction, &mut dyn OutputSink) -> Result<Flow, MachineError>;

/// Opcodes executed by the ALU handler.
const ALU_OPCODES: [u8; 14] = [
    op::ADD,
    op::SUB,
    op::MUL,
    op::DIV,
    op::MOD,
    op::INC,
    op::DEC,
    op::AND,
    op::OR,
    op::XOR,
    op::NOT,
    op::SHL,
    op::SHR,
    op::CMP,
];

/// Immutable opcode-to-handler mapping.
#[derive(Clone)]
pub struct DispatchTable {
    handlers: [Option<Handler>; 256],
}

impl DispatchTable {
    /// Builds the table for the full LS-8 instruction set.
    pub fn new() -> Self {
        let mut table = Self {
            handlers: [None; 256],
        };

        table.register(op::NOP, handlers::nop);
        table.register(op::HLT, handlers::hlt);
        table.register(op::LDI, handlers::ldi);
        table.register(op::LD, handlers::ld);
        table.register(op::ST, handlers::st);
        table.register(op::PRN, handlers::prn);
        table.register(op::PRA, handlers::pra);
        table.register(op::PUSH, handlers::push);
        table.register(op::POP, handlers::pop);
        table.register(op::CALL, handlers::call);
        table.register(op::RET, handlers::ret);
        table.register(op::JMP, handlers::jmp);
        table.register(op::JEQ, handlers::jeq);
        table.register(op::JNE, handlers::jne);
        table.register(op::JGT, handlers::jgt);
        table.register(op::JLT, handlers::jlt);
        table.register(op::JLE, handlers::jle);
        table.register(op::JGE, handlers::jge);

        for opcode in ALU_OPCODES {
            table.register(opcode, handlers::alu);
        }

        table
    }

    fn register(&mut self, opcode: u8, handler: Handler) {
        self.handlers[opcode as usize] = Some(handler);
    }

    /// Returns the handler for `opcode`, if one is registered.
    #[inline]
    pub fn lookup(&self, opcode: u8) -> Option<Handler> {
        self.handlers[opcode as usize]
    }

    /// Number of defined opcodes.
    pub fn len(&self) -> usize {
        self.handlers.iter().filter(|h| h.is_some()).count()
    }

    /// Whether no opcode is defined.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("defined", &self.len())
            .finish()
    }
}
