//! Simulator Tests.
//!
//! Run outcomes, step bounds, resumption after yielding, and fault reporting.

use ls8_core::common::{LoadError, MachineError, RAM_SIZE};
use ls8_core::config::Config;
use ls8_core::isa::opcodes as op;
use ls8_core::sim::{RunOutcome, Simulator};
use ls8_core::soc::devices::BufferedConsole;
use ls8_core::CpuState;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

/// `R0` counts up forever, printing each value.
fn counter_loop() -> Vec<u8> {
    // 00: LDI R1,3   03: INC R0   05: PRN R0   07: JMP R1
    ProgramBuilder::new()
        .ldi(1, 3)
        .unary(op::INC, 0)
        .prn(0)
        .jmp(1)
        .build()
}

#[test]
fn run_reports_halt_and_step_count() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().nop().nop().hlt().build());
    assert_eq!(ctx.run(), Ok(RunOutcome::Halted { steps: 3 }));
}

#[test]
fn run_for_yields_and_resumes() {
    let mut ctx = TestContext::new().load_program(&counter_loop());

    assert_eq!(ctx.sim.run_for(4), Ok(RunOutcome::StepLimit { steps: 4 }));
    assert_eq!(ctx.printed(), &[1]);
    assert_eq!(ctx.state(), CpuState::Running);

    let outcome = ctx.sim.run_for(6).unwrap();
    assert_eq!(outcome.steps(), 6);
    assert_eq!(ctx.printed(), &[1, 2, 3]);
}

#[test]
fn config_step_bound_applies_to_run() {
    let mut config = Config::default();
    config.general.max_steps = Some(10);
    let mut sim = Simulator::new(config, BufferedConsole::new());
    sim.load(&counter_loop()).unwrap();

    assert_eq!(sim.run(), Ok(RunOutcome::StepLimit { steps: 10 }));
}

#[test]
fn zero_step_bound_executes_nothing() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().hlt().build());
    assert_eq!(ctx.sim.run_for(0), Ok(RunOutcome::StepLimit { steps: 0 }));
    assert_eq!(ctx.cpu().stats.instructions_retired, 0);
}

#[test]
fn running_a_halted_machine_reports_zero_steps() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().hlt().build());
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.run(), Ok(RunOutcome::Halted { steps: 0 }));
}

#[test]
fn fault_is_returned_and_output_kept() {
    let image = ProgramBuilder::new()
        .ldi(0, 7)
        .prn(0)
        .binary(op::DIV, 0, 1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);

    assert_eq!(ctx.run(), Err(MachineError::DivideByZero { register: 1 }));
    assert_eq!(ctx.printed(), &[7]);
    assert_eq!(ctx.cpu().pc, 5);
    assert!(matches!(ctx.state(), CpuState::Faulted(_)));
}

#[test]
fn oversized_image_is_rejected() {
    let mut sim = Simulator::new(Config::default(), BufferedConsole::new());
    let err = sim.load(&vec![0; RAM_SIZE + 1]).unwrap_err();
    assert!(matches!(
        err,
        LoadError::ProgramTooLarge {
            len: 257,
            capacity: 256
        }
    ));
}

#[test]
fn independent_simulators_do_not_share_state() {
    let mut a = TestContext::new().load_program(&ProgramBuilder::new().ldi(0, 1).prn(0).hlt().build());
    let mut b = TestContext::new().load_program(&ProgramBuilder::new().ldi(0, 2).prn(0).hlt().build());

    let _ = a.run_to_halt();
    let _ = b.run_to_halt();

    assert_eq!(a.printed(), &[1]);
    assert_eq!(b.printed(), &[2]);
}

#[test]
fn into_parts_returns_captured_output() {
    let mut sim = Simulator::new(Config::default(), BufferedConsole::new());
    sim.load(&ProgramBuilder::new().ldi(2, 42).prn(2).hlt().build())
        .unwrap();
    let _ = sim.run().unwrap();

    let (cpu, out, _trace) = sim.into_parts();
    assert_eq!(cpu.state(), CpuState::Halted);
    assert_eq!(out.lines(), vec!["42"]);
}

#[test]
fn reloading_runs_the_new_program_from_power_on() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().ldi(3, 9).hlt().build());
    let _ = ctx.run_to_halt();

    ctx.sim
        .load(&ProgramBuilder::new().ldi(0, 8).prn(0).hlt().build())
        .unwrap();

    assert_eq!(ctx.cpu().pc, 0);
    assert_eq!(ctx.get_reg(3), 0);
    assert_eq!(ctx.state(), CpuState::Running);
    assert_eq!(ctx.run(), Ok(RunOutcome::Halted { steps: 3 }));
    assert_eq!(ctx.printed(), &[8]);
    assert_eq!(ctx.cpu().stats.instructions_retired, 3);
}

#[test]
fn reloading_clears_a_fault() {
    let mut ctx = TestContext::new().load_program(&[0b1111_1111]);
    let _ = ctx.run().unwrap_err();

    ctx.sim.load(&ProgramBuilder::new().hlt().build()).unwrap();

    assert_eq!(ctx.run(), Ok(RunOutcome::Halted { steps: 1 }));
}

#[test]
fn reloading_a_shorter_image_clears_old_bytes() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().nop().nop().ldi(0, 1).hlt().build());
    let _ = ctx.run_to_halt();

    ctx.sim.load(&ProgramBuilder::new().hlt().build()).unwrap();

    assert!(ctx.cpu().ram.as_slice()[1..].iter().all(|&b| b == 0));
}
