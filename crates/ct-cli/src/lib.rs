//! comptour CLI library.
//!
//! This crate provides the command-line interface for comptour, a tour of
//! compile-time evaluation, lazy range pipelines, and type-conditional
//! formatting built on `ct-core`.

pub mod cli;
pub mod commands;

// Re-export core types for convenience
pub use ct_core::*;

// CLI-specific error handling
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Core error: {0}")]
        Core(#[from] ct_core::Error),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
