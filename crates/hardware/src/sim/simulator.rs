//! Simulator: owns the CPU together with its output and trace sinks.
//!
//! The simulator is the host-facing entry point. It loads a program, runs the
//! CPU until `HLT`, a fault, or a step bound, and hands back a terminal outcome
//! instead of exiting the process.

use crate::common::error::{LoadError, MachineError};
use crate::config::Config;
use crate::core::cpu::{Cpu, CpuState};
use crate::soc::traits::{NullSink, OutputSink, TraceSink};

/// How a run ended without a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The CPU executed `HLT`.
    Halted {
        /// Instructions executed during this run, `HLT` included.
        steps: u64,
    },
    /// The step bound was reached with the CPU still running.
    StepLimit {
        /// Instructions executed during this run.
        steps: u64,
    },
}

impl RunOutcome {
    /// Instructions executed during the run.
    pub const fn steps(self) -> u64 {
        match self {
            Self::Halted { steps } | Self::StepLimit { steps } => steps,
        }
    }
}

/// Top-level simulator: CPU plus output collaborators.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
/// use ls8_core::sim::{RunOutcome, Simulator};
/// use ls8_core::soc::devices::BufferedConsole;
///
/// let mut sim = Simulator::new(Config::default(), BufferedConsole::new());
/// sim.load(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]).unwrap();
/// assert_eq!(sim.run().unwrap(), RunOutcome::Halted { steps: 3 });
/// assert_eq!(sim.output().numbers, vec![8]);
/// ```
#[derive(Debug)]
pub struct Simulator<O, T = NullSink> {
    /// CPU architectural state.
    pub cpu: Cpu,
    config: Config,
    output: O,
    trace: T,
}

impl<O: OutputSink> Simulator<O> {
    /// Creates a simulator with a fresh CPU and no trace sink.
    pub fn new(config: Config, output: O) -> Self {
        Self {
            cpu: Cpu::new(),
            config,
            output,
            trace: NullSink,
        }
    }
}

impl<O: OutputSink, T: TraceSink> Simulator<O, T> {
    /// Replaces the trace sink. Snapshots are only recorded when
    /// `trace_instructions` is enabled in the configuration.
    pub fn with_trace<U: TraceSink>(self, trace: U) -> Simulator<O, U> {
        Simulator {
            cpu: self.cpu,
            config: self.config,
            output: self.output,
            trace,
        }
    }

    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the configuration.
    pub const fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// The output sink.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// The trace sink.
    pub const fn trace(&self) -> &T {
        &self.trace
    }

    /// Consumes the simulator, returning the CPU and both sinks.
    pub fn into_parts(self) -> (Cpu, O, T) {
        (self.cpu, self.output, self.trace)
    }

    /// Resets the CPU to its power-on state and copies a program image into
    /// RAM at address 0.
    ///
    /// Registers, flags, PC, statistics, and any halt or fault from a
    /// previous run are cleared, so one simulator can run several programs
    /// in turn. Captured output in the sinks is kept.
    ///
    /// # Errors
    ///
    /// [`LoadError::ProgramTooLarge`] if the image does not fit. The CPU is
    /// still reset.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.cpu.reset();
        self.cpu.load_program(image)
    }

    /// Executes a single instruction, recording a trace snapshot first if
    /// tracing is enabled.
    ///
    /// # Errors
    ///
    /// The [`MachineError`] that stopped the CPU.
    pub fn step(&mut self) -> Result<CpuState, MachineError> {
        if self.config.general.trace_instructions && self.cpu.is_running() {
            self.trace.record(&self.cpu.trace_snapshot());
        }
        self.cpu.step(&mut self.output)
    }

    /// Runs until `HLT`, or until `max_steps` instructions if the
    /// configuration sets a bound.
    ///
    /// # Errors
    ///
    /// The [`MachineError`] that stopped the CPU.
    pub fn run(&mut self) -> Result<RunOutcome, MachineError> {
        self.run_bounded(self.config.general.max_steps)
    }

    /// Runs at most `max_steps` instructions, then yields.
    ///
    /// The CPU state is untouched by yielding; a later `run_for` or `run`
    /// continues where this one stopped.
    ///
    /// # Errors
    ///
    /// The [`MachineError`] that stopped the CPU.
    pub fn run_for(&mut self, max_steps: u64) -> Result<RunOutcome, MachineError> {
        self.run_bounded(Some(max_steps))
    }

    fn run_bounded(&mut self, limit: Option<u64>) -> Result<RunOutcome, MachineError> {
        let mut steps = 0;
        loop {
            if self.cpu.state() == CpuState::Halted {
                tracing::debug!(steps, "run finished: halted");
                return Ok(RunOutcome::Halted { steps });
            }
            if limit.is_some_and(|max| steps >= max) {
                tracing::debug!(steps, "run finished: step limit");
                return Ok(RunOutcome::StepLimit { steps });
            }
            let _ = self.step()?;
            steps += 1;
        }
    }
}
