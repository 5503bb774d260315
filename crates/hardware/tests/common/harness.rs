use ls8_core::common::MachineError;
use ls8_core::config::Config;
use ls8_core::soc::devices::BufferedConsole;
use ls8_core::{Cpu, CpuState, RunOutcome, Simulator};

/// Upper bound on instructions for any test run, so a broken jump cannot hang
/// the suite.
pub const TEST_STEP_LIMIT: u64 = 10_000;

#[derive(Debug)]
pub struct TestContext {
    pub sim: Simulator<BufferedConsole, BufferedConsole>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("ls8_core=trace")
            .try_init();

        let sim = Simulator::new(Config::default(), BufferedConsole::new())
            .with_trace(BufferedConsole::new());
        Self { sim }
    }

    /// Enables trace snapshots for subsequent steps.
    pub fn with_trace(mut self) -> Self {
        self.sim.config_mut().general.trace_instructions = true;
        self
    }

    /// Load a program image at address 0.
    pub fn load_program(mut self, image: &[u8]) -> Self {
        self.sim.load(image).unwrap();
        self
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    pub fn set_reg(&mut self, reg: usize, val: u8) {
        self.sim.cpu.regs.write(reg, val).unwrap();
    }

    pub fn get_reg(&self, reg: usize) -> u8 {
        self.sim.cpu.regs.read(reg).unwrap()
    }

    pub fn sp(&self) -> u8 {
        self.sim.cpu.regs.sp()
    }

    pub fn state(&self) -> CpuState {
        self.sim.cpu.state()
    }

    /// Values printed by `PRN`, in order.
    pub fn printed(&self) -> &[u8] {
        &self.sim.output().numbers
    }

    /// Everything written to the console, decoded as UTF-8.
    pub fn text(&self) -> String {
        self.sim.output().text().into_owned()
    }

    /// Rendered trace lines.
    pub fn trace_lines(&self) -> &[String] {
        &self.sim.trace().trace
    }

    /// Execute one instruction.
    pub fn step(&mut self) -> Result<CpuState, MachineError> {
        self.sim.step()
    }

    /// Run until HLT, a fault, or [`TEST_STEP_LIMIT`].
    pub fn run(&mut self) -> Result<RunOutcome, MachineError> {
        self.sim.run_for(TEST_STEP_LIMIT)
    }

    /// Run and require the program to halt cleanly.
    pub fn run_to_halt(&mut self) -> u64 {
        match self.run() {
            Ok(RunOutcome::Halted { steps }) => steps,
            other => panic!("expected HLT, got {other:?}"),
        }
    }
}
