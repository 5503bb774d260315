
/// Run loop, step bounds, and outcomes.
pub mod simulator;
