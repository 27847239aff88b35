//! Domain layer: pure types and typed errors. No process, filesystem, or
//! tokio imports.

pub mod error;
pub mod settings;
pub mod snap;
