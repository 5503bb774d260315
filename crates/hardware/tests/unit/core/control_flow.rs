//! Control Flow Tests.
//!
//! CALL/RET through the stack and every conditional jump against each flag
//! state.

use std::cmp::Ordering;

use ls8_core::common::{MachineError, RAM_SIZE, SP_INIT};
use ls8_core::core::arch::Flags;
use ls8_core::isa::opcodes as op;
use ls8_core::CpuState;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn call_pushes_return_address_and_jumps() {
    // 00: LDI R1,6   03: CALL R1   05: HLT   06: HLT
    let image = ProgramBuilder::new().ldi(1, 6).call(1).hlt().hlt().build();
    let mut ctx = TestContext::new().load_program(&image);

    let _ = ctx.step().unwrap();
    let _ = ctx.step().unwrap();

    assert_eq!(ctx.cpu().pc, 6);
    assert_eq!(ctx.sp(), SP_INIT - 1);
    assert_eq!(ctx.cpu().ram.read(0xF3).unwrap(), 5);
}

#[test]
fn call_and_ret_round_trip() {
    // Subroutine at 0x10 doubles R0.
    let main = ProgramBuilder::new()
        .ldi(0, 21)
        .ldi(1, 0x10)
        .call(1)
        .prn(0)
        .hlt()
        .build();
    let mut image = main;
    image.resize(0x10, 0);
    image.extend(ProgramBuilder::new().add(0, 0).ret().build());

    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.printed(), &[42]);
    assert_eq!(ctx.sp(), SP_INIT);
}

#[test]
fn call_in_last_two_cells_faults_without_pushing() {
    // CALL R0 at 0xFE: the return address 0x100 does not fit in a byte.
    let mut image = vec![0; RAM_SIZE - 2];
    image.extend([op::CALL, 0]);
    let mut ctx = TestContext::new().load_program(&image);

    let err = ctx.run().unwrap_err();

    assert_eq!(err, MachineError::MemoryOutOfBounds { address: RAM_SIZE });
    assert_eq!(ctx.cpu().pc, RAM_SIZE - 2);
    assert_eq!(ctx.sp(), SP_INIT);
    assert_eq!(ctx.state(), CpuState::Faulted(err));
}

#[test]
fn nested_calls_unwind_in_order() {
    // main -> a (0x20) -> b (0x30); each prints a marker after returning.
    let mut image = ProgramBuilder::new()
        .ldi(1, 0x20)
        .call(1)
        .ldi(0, 3)
        .prn(0)
        .hlt()
        .build();
    image.resize(0x20, 0);
    image.extend(
        ProgramBuilder::new()
            .ldi(2, 0x30)
            .call(2)
            .ldi(0, 2)
            .prn(0)
            .ret()
            .build(),
    );
    image.resize(0x30, 0);
    image.extend(ProgramBuilder::new().ldi(0, 1).prn(0).ret().build());

    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.printed(), &[1, 2, 3]);
    assert_eq!(ctx.sp(), SP_INIT);
}

#[test]
fn jmp_is_unconditional() {
    // 00: LDI R0,8  03: JMP R0  05: HLT  06..: padding  08: LDI R1,1  0B: HLT
    let mut image = ProgramBuilder::new().ldi(0, 8).jmp(0).hlt().build();
    image.resize(8, 0);
    image.extend(ProgramBuilder::new().ldi(1, 1).hlt().build());

    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(1), 1);
}

/// Compares `a` with `b`, then runs `jump` to a block that sets `R3 = 1`.
fn branch_taken(jump: u8, a: u8, b: u8) -> bool {
    let head = ProgramBuilder::new()
        .ldi(0, a)
        .ldi(1, b)
        .ldi(2, 0x20)
        .cmp(0, 1)
        .unary(jump, 2)
        .hlt();
    let mut image = head.build();
    image.resize(0x20, 0);
    image.extend(ProgramBuilder::new().ldi(3, 1).hlt().build());

    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run_to_halt();
    ctx.get_reg(3) == 1
}

#[rstest]
#[case::jeq_equal(op::JEQ, 5, 5, true)]
#[case::jeq_less(op::JEQ, 4, 5, false)]
#[case::jne_equal(op::JNE, 5, 5, false)]
#[case::jne_greater(op::JNE, 6, 5, true)]
#[case::jgt_greater(op::JGT, 6, 5, true)]
#[case::jgt_equal(op::JGT, 5, 5, false)]
#[case::jlt_less(op::JLT, 4, 5, true)]
#[case::jlt_greater(op::JLT, 6, 5, false)]
#[case::jle_equal(op::JLE, 5, 5, true)]
#[case::jle_less(op::JLE, 4, 5, true)]
#[case::jle_greater(op::JLE, 6, 5, false)]
#[case::jge_equal(op::JGE, 5, 5, true)]
#[case::jge_greater(op::JGE, 6, 5, true)]
#[case::jge_less(op::JGE, 4, 5, false)]
fn conditional_jumps(#[case] jump: u8, #[case] a: u8, #[case] b: u8, #[case] taken: bool) {
    assert_eq!(branch_taken(jump, a, b), taken);
}

#[test]
fn jeq_without_prior_cmp_falls_through() {
    let image = ProgramBuilder::new().ldi(0, 0x20).jeq(0).hlt().build();
    let mut ctx = TestContext::new().load_program(&image);
    assert_eq!(ctx.run_to_halt(), 3);
    assert_eq!(ctx.cpu().pc, 5);
}

#[test]
fn untaken_jump_advances_two_bytes() {
    let image = ProgramBuilder::new().ldi(0, 0x20).jne(0).build();
    let mut ctx = TestContext::new().load_program(&image);
    // Clear flags would take JNE; force E first.
    ctx.cpu_mut().flags = Flags::from_ordering(Ordering::Equal);
    let _ = ctx.step().unwrap();
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.cpu().pc, 5);
}
