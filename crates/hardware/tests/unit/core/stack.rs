//! Stack Tests.
//!
//! PUSH/POP through SP (`R7`): pre-decrement push, post-increment pop, LIFO
//! order, and SP restoration.

use ls8_core::common::{SP, SP_INIT};
use ls8_core::Cpu;
use proptest::prelude::*;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn push_predecrements_then_stores() {
    let mut cpu = Cpu::new();
    cpu.push(0xAB).unwrap();
    assert_eq!(cpu.regs.sp(), 0xF3);
    assert_eq!(cpu.ram.read(0xF3).unwrap(), 0xAB);
}

#[test]
fn pop_reads_then_postincrements() {
    let mut cpu = Cpu::new();
    cpu.push(1).unwrap();
    cpu.push(2).unwrap();
    assert_eq!(cpu.pop().unwrap(), 2);
    assert_eq!(cpu.pop().unwrap(), 1);
    assert_eq!(cpu.regs.sp(), SP_INIT);
}

#[test]
fn push_pop_program_swaps_registers() {
    let image = ProgramBuilder::new()
        .ldi(0, 1)
        .ldi(1, 2)
        .push(0)
        .push(1)
        .pop(0)
        .pop(1)
        .prn(0)
        .prn(1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);

    let _ = ctx.run_to_halt();

    assert_eq!(ctx.printed(), &[2, 1]);
    assert_eq!(ctx.sp(), SP_INIT);
}

#[test]
fn pop_into_sp_overwrites_it() {
    let image = ProgramBuilder::new()
        .ldi(0, 0x40)
        .push(0)
        .pop(SP as u8)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run_to_halt();
    // The popped value lands in R7 after the increment.
    assert_eq!(ctx.sp(), 0x40);
}

#[test]
fn pop_to_bad_register_leaves_sp() {
    let image = ProgramBuilder::new().ldi(0, 9).push(0).pop(8).build();
    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run().unwrap_err();
    assert_eq!(ctx.sp(), 0xF3);
}

proptest! {
    #[test]
    fn stack_is_lifo(values in proptest::collection::vec(any::<u8>(), 1..32)) {
        let mut cpu = Cpu::new();
        for &v in &values {
            cpu.push(v).unwrap();
        }
        for &v in values.iter().rev() {
            prop_assert_eq!(cpu.pop().unwrap(), v);
        }
        prop_assert_eq!(cpu.regs.sp(), SP_INIT);
    }
}
