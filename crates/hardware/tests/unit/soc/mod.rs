/// Console sinks.
pub mod console;
