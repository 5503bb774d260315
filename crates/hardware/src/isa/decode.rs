//! Instruction decoding.
//!
//! Reads an opcode and the operand bytes it declares from RAM. Operand bytes are
//! only fetched when the opcode's `AA` field asks for them, so a one-byte
//! instruction in the last RAM cell decodes cleanly.

use crate::common::error::MachineError;
use crate::isa::instruction::{Instruction, OpcodeBits};
use crate::soc::memory::Ram;

/// Decodes the instruction at `pc`.
///
/// # Errors
///
/// [`MachineError::MemoryOutOfBounds`] if the opcode or a declared operand lies
/// outside RAM.
pub fn decode(ram: &Ram, pc: usize) -> Result<Instruction, MachineError> {
    let opcode = ram.read(pc)?;
    let count = opcode.operand_count();
    let operand_a = if count >= 1 { ram.read(pc + 1)? } else { 0 };
    let operand_b = if count >= 2 { ram.read(pc + 2)? } else { 0 };
    Ok(Instruction {
        address: pc,
        opcode,
        operand_a,
        operand_b,
    })
}

/// Decodes from a raw byte slice, treating bytes past the end as zero.
///
/// Used by the disassembler, which must not fail on a truncated image.
pub fn decode_bytes(bytes: &[u8], address: usize) -> Instruction {
    let at = |i: usize| bytes.get(i).copied().unwrap_or(0);
    let opcode = at(address);
    let count = opcode.operand_count();
    Instruction {
        address,
        opcode,
        operand_a: if count >= 1 { at(address + 1) } else { 0 },
        operand_b: if count >= 2 { at(address + 2) } else { 0 },
    }
}
