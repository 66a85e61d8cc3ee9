//! Error types shared across the workspace.
//!
//! # Re-exports
//!
//! [`SolverError`] and [`ConfigError`] are re-exported at this module level.

pub mod error;

pub use error::{ConfigError, SolverError};
