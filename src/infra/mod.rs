//! Infrastructure layer: production port implementations and system paths.

pub mod command_runner;
pub mod paths;
