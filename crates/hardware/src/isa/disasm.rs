//! Instruction Disassembler for the LS-8.
//!
//! Converts decoded instructions into human-readable text for debug tracing,
//! logging, and the `ls8 disasm` command.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! use ls8_core::isa::instruction::Instruction;
//!
//! let inst = Instruction { address: 0, opcode: 0b1000_0010, operand_a: 0, operand_b: 8 };
//! assert_eq!(disassemble(&inst), "LDI R0,8");
//! ```

use std::fmt;

use crate::isa::decode::decode_bytes;
use crate::isa::instruction::{Instruction, OpcodeBits};
use crate::isa::opcodes as op;

/// Operand shape of an instruction, for formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    None,
    Reg,
    RegReg,
    RegImm,
}

/// Returns the mnemonic and operand form for a defined opcode.
const fn lookup(opcode: u8) -> Option<(&'static str, Form)> {
    let entry = match opcode {
        op::NOP => ("NOP", Form::None),
        op::HLT => ("HLT", Form::None),
        op::RET => ("RET", Form::None),
        op::PUSH => ("PUSH", Form::Reg),
        op::POP => ("POP", Form::Reg),
        op::PRN => ("PRN", Form::Reg),
        op::PRA => ("PRA", Form::Reg),
        op::CALL => ("CALL", Form::Reg),
        op::JMP => ("JMP", Form::Reg),
        op::JEQ => ("JEQ", Form::Reg),
        op::JNE => ("JNE", Form::Reg),
        op::JGT => ("JGT", Form::Reg),
        op::JLT => ("JLT", Form::Reg),
        op::JLE => ("JLE", Form::Reg),
        op::JGE => ("JGE", Form::Reg),
        op::INC => ("INC", Form::Reg),
        op::DEC => ("DEC", Form::Reg),
        op::NOT => ("NOT", Form::Reg),
        op::LDI => ("LDI", Form::RegImm),
        op::LD => ("LD", Form::RegReg),
        op::ST => ("ST", Form::RegReg),
        op::ADD => ("ADD", Form::RegReg),
        op::SUB => ("SUB", Form::RegReg),
        op::MUL => ("MUL", Form::RegReg),
        op::DIV => ("DIV", Form::RegReg),
        op::MOD => ("MOD", Form::RegReg),
        op::CMP => ("CMP", Form::RegReg),
        op::AND => ("AND", Form::RegReg),
        op::OR => ("OR", Form::RegReg),
        op::XOR => ("XOR", Form::RegReg),
        op::SHL => ("SHL", Form::RegReg),
        op::SHR => ("SHR", Form::RegReg),
        _ => return None,
    };
    Some(entry)
}

/// Returns the mnemonic for `opcode`, or `None` if it is undefined.
pub const fn mnemonic(opcode: u8) -> Option<&'static str> {
    match lookup(opcode) {
        Some((name, _)) => Some(name),
        None => None,
    }
}

/// Disassembles one instruction.
///
/// Undefined opcodes render as a raw data byte, e.g. `DB 0b11111111`.
pub fn disassemble(inst: &Instruction) -> String {
    match lookup(inst.opcode) {
        Some((name, Form::None)) => name.to_string(),
        Some((name, Form::Reg)) => format!("{name} R{}", inst.operand_a),
        Some((name, Form::RegReg)) => format!("{name} R{},R{}", inst.operand_a, inst.operand_b),
        Some((name, Form::RegImm)) => format!("{name} R{},{}", inst.operand_a, inst.operand_b),
        None => format!("DB {:#010b}", inst.opcode),
    }
}

/// One line of a program listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLine {
    /// Address of the instruction.
    pub address: usize,
    /// Encoded bytes present in the image.
    pub bytes: Vec<u8>,
    /// Disassembled text.
    pub text: String,
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex: Vec<String> = self.bytes.iter().map(|b| format!("{b:02X}")).collect();
        write!(f, "{:02X}: {:<9} {}", self.address, hex.join(" "), self.text)
    }
}

/// Disassembles a whole program image, walking instruction by instruction.
///
/// Undefined opcodes are treated as one-byte data so the walk always makes
/// progress.
pub fn disassemble_image(image: &[u8]) -> Vec<ListingLine> {
    let mut lines = Vec::new();
    let mut address = 0;
    while address < image.len() {
        let inst = decode_bytes(image, address);
        let len = if lookup(inst.opcode).is_some() {
            inst.opcode.instruction_len()
        } else {
            1
        };
        let end = (address + len).min(image.len());
        lines.push(ListingLine {
            address,
            bytes: image[address..end].to_vec(),
            text: disassemble(&inst),
        });
        address += len;
    }
    lines
}
