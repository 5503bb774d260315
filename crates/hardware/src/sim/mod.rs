//! Simulation driver and program loading.
//!
//! Provides the loader that turns listings into program images and the
//! `Simulator` that runs a CPU against its output sinks.

/// Listing parser and file loader.
pub mod loader;

/// Run loop owning the CPU, sinks, and configuration.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator};
