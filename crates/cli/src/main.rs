//! LS-8 emulator CLI.
//!
//! This binary wraps the `ls8-core` library. It performs:
//! 1. **Run:** Load an `.ls8` listing, execute it, and print its output.
//! 2. **Disassemble:** Print an address/bytes/mnemonic listing of a program.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::isa::disasm::disassemble_image;
use ls8_core::sim::loader;
use ls8_core::sim::{RunOutcome, Simulator};
use ls8_core::soc::devices::{StderrTrace, StdoutConsole};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit register machine emulator",
    long_about = "Run or disassemble LS-8 programs.\n\nPrograms are text listings with one binary byte per line; '#' starts a comment.\n\nExamples:\n  ls8 run programs/print8.ls8\n  ls8 run programs/call.ls8 --trace\n  ls8 disasm programs/stack.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program and run it until HLT.
    Run {
        /// Program listing (.ls8) to execute.
        program: PathBuf,

        /// Print a trace line to stderr before every instruction.
        #[arg(short, long)]
        trace: bool,

        /// Stop after this many instructions.
        #[arg(long)]
        max_steps: Option<u64>,

        /// JSON run configuration; command-line flags override it.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print execution statistics after the run.
        #[arg(long)]
        stats: bool,
    },

    /// Print a disassembly of a program.
    Disasm {
        /// Program listing (.ls8) to disassemble.
        program: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            trace,
            max_steps,
            config,
            stats,
        } => cmd_run(&program, trace, max_steps, config.as_deref(), stats),
        Commands::Disasm { program } => cmd_disasm(&program),
    }
}

/// Loads the program, runs it to completion, and exits with status 1 on a
/// load or machine error.
fn cmd_run(
    program: &Path,
    trace: bool,
    max_steps: Option<u64>,
    config_path: Option<&Path>,
    stats: bool,
) {
    let mut config = match config_path {
        Some(path) => Config::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    if trace {
        config.general.trace_instructions = true;
    }
    if max_steps.is_some() {
        config.general.max_steps = max_steps;
    }

    let image = loader::load_program_file(program).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    let mut sim = Simulator::new(config, StdoutConsole::new()).with_trace(StderrTrace::new());
    if let Err(e) = sim.load(&image) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    match sim.run() {
        Ok(RunOutcome::Halted { steps }) => {
            tracing::info!(steps, "program halted");
        }
        Ok(RunOutcome::StepLimit { steps }) => {
            eprintln!("stopped after {steps} instructions without reaching HLT");
        }
        Err(e) => {
            eprintln!("\nfatal: {e}");
            eprint!("{}", sim.cpu.state_summary());
            if stats {
                sim.cpu.stats.print();
            }
            process::exit(1);
        }
    }

    if stats {
        sim.cpu.stats.print();
    }
}

/// Prints one line per instruction: address, encoded bytes, mnemonic.
fn cmd_disasm(program: &Path) {
    let image = loader::load_program_file(program).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });
    for line in disassemble_image(&image) {
        println!("{line}");
    }
}
