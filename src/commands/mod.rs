//! CLI command handlers — thin wrappers over application services.

pub mod configure;
pub mod env_config;
pub mod install;
pub mod remove;
pub mod service;
pub mod status;
