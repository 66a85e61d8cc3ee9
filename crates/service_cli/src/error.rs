//! CLI error types

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration could not be loaded or deserialised
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration loaded but violates solver preconditions
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(#[from] solver_core::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Root finding did not converge
    #[error("Solver error: {0}")]
    Solver(#[from] solver_core::SolverError),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Standard input closed before a valid guess was read
    #[error("Input closed before a valid initial guess was entered")]
    InputClosed,
}
