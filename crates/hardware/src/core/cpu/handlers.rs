//! Instruction handlers.
//!
//! One function per opcode. Each reads its operands from the decoded
//! [`Instruction`], mutates the CPU, and tells the dispatcher how to move the
//! PC. Handlers read everything they need before writing anything, so a
//! failing handler leaves the machine as it was.

use super::Cpu;
use crate::common::error::MachineError;
use crate::core::arch::flags::Flags;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::instruction::Instruction;
use crate::soc::traits::OutputSink;

/// Control-flow outcome of a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Advance PC past the instruction.
    Next,
    /// Set PC to the given address.
    Jump(usize),
    /// Stop the fetch-decode-execute loop.
    Halt,
}

/// `NOP`
pub fn nop(_: &mut Cpu, _: &Instruction, _: &mut dyn OutputSink) -> Result<Flow, MachineError> {
    Ok(Flow::Next)
}

/// `HLT`
pub fn hlt(_: &mut Cpu, _: &Instruction, _: &mut dyn OutputSink) -> Result<Flow, MachineError> {
    Ok(Flow::Halt)
}

/// `LDI reg, imm`: `reg = imm`.
pub fn ldi(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    cpu.regs.write(inst.reg_a(), inst.operand_b)?;
    Ok(Flow::Next)
}

/// `LD regA, regB`: `regA = ram[regB]`.
pub fn ld(cpu: &mut Cpu, inst: &Instruction, _: &mut dyn OutputSink) -> Result<Flow, MachineError> {
    let address = cpu.regs.read(inst.reg_b())?;
    let value = cpu.ram.read(address as usize)?;
    cpu.regs.write(inst.reg_a(), value)?;
    Ok(Flow::Next)
}

/// `ST regA, regB`: `ram[regA] = regB`.
pub fn st(cpu: &mut Cpu, inst: &Instruction, _: &mut dyn OutputSink) -> Result<Flow, MachineError> {
    let address = cpu.regs.read(inst.reg_a())?;
    let value = cpu.regs.read(inst.reg_b())?;
    cpu.ram.write(address as usize, value)?;
    Ok(Flow::Next)
}

/// `PRN reg`: print the register as a decimal number.
pub fn prn(
    cpu: &mut Cpu,
    inst: &Instruction,
    out: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    out.print_number(cpu.regs.read(inst.reg_a())?);
    Ok(Flow::Next)
}

/// `PRA reg`: print the register as an ASCII character.
pub fn pra(
    cpu: &mut Cpu,
    inst: &Instruction,
    out: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    out.print_char(cpu.regs.read(inst.reg_a())?);
    Ok(Flow::Next)
}

/// `PUSH reg`
pub fn push(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    let value = cpu.regs.read(inst.reg_a())?;
    cpu.push(value)?;
    Ok(Flow::Next)
}

/// `POP reg`
pub fn pop(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    // Validate the destination before SP moves.
    let _ = cpu.regs.read(inst.reg_a())?;
    let value = cpu.pop()?;
    cpu.regs.write(inst.reg_a(), value)?;
    Ok(Flow::Next)
}

/// `CALL reg`: push the address of the next instruction, jump to `reg`.
pub fn call(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    let target = cpu.regs.read(inst.reg_a())?;
    let return_to = inst.address + inst.len();
    let return_byte = u8::try_from(return_to)
        .map_err(|_| MachineError::MemoryOutOfBounds { address: return_to })?;
    cpu.push(return_byte)?;
    Ok(Flow::Jump(target as usize))
}

/// `RET`: pop the return address into PC.
pub fn ret(cpu: &mut Cpu, _: &Instruction, _: &mut dyn OutputSink) -> Result<Flow, MachineError> {
    Ok(Flow::Jump(cpu.pop()? as usize))
}

/// `JMP reg`
pub fn jmp(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    jump_if(cpu, inst, |_| true)
}

/// `JEQ reg`: jump if `E` is set.
pub fn jeq(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    jump_if(cpu, inst, Flags::equal)
}

/// `JNE reg`: jump if `E` is clear.
pub fn jne(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    jump_if(cpu, inst, |fl| !fl.equal())
}

/// `JGT reg`: jump if `G` is set.
pub fn jgt(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    jump_if(cpu, inst, Flags::greater)
}

/// `JLT reg`: jump if `L` is set.
pub fn jlt(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    jump_if(cpu, inst, Flags::less)
}

/// `JLE reg`: jump if `L` or `E` is set.
pub fn jle(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    jump_if(cpu, inst, |fl| fl.less() || fl.equal())
}

/// `JGE reg`: jump if `G` or `E` is set.
pub fn jge(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    jump_if(cpu, inst, |fl| fl.greater() || fl.equal())
}

/// Every ALU opcode: selects the operation from the opcode and runs it on
/// registers `a` and `b`.
pub fn alu(
    cpu: &mut Cpu,
    inst: &Instruction,
    _: &mut dyn OutputSink,
) -> Result<Flow, MachineError> {
    let op = AluOp::from_opcode(inst.opcode)?;
    Alu::execute(op, &mut cpu.regs, &mut cpu.flags, inst.reg_a(), inst.reg_b())?;
    Ok(Flow::Next)
}

fn jump_if(
    cpu: &Cpu,
    inst: &Instruction,
    taken: impl FnOnce(Flags) -> bool,
) -> Result<Flow, MachineError> {
    let target = cpu.regs.read(inst.reg_a())?;
    if taken(cpu.flags) {
        Ok(Flow::Jump(target as usize))
    } else {
        Ok(Flow::Next)
    }
}
