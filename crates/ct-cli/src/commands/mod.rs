//! Command implementations for the comptour CLI

pub mod run;

// Re-export command functions
pub use run::run_command;
