//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Failed root-finding outcomes as error values
//! - `ConfigError`: Malformed solver configuration

use thiserror::Error;

/// Root-finding solver errors.
///
/// The engine itself never returns these; they are produced by
/// `RootOutcome::into_result` for callers that prefer `?` propagation.
///
/// # Variants
/// - `MaxIterationsExceeded`: Iteration budget exhausted before convergence
/// - `DerivativeNearZero`: Derivative magnitude fell below the safety threshold
///
/// # Examples
/// ```
/// use solver_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within the iteration budget.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of update steps performed
        iterations: usize,
    },

    /// Derivative near zero; the Newton step is undefined or unstable.
    #[error("Derivative was zero at x = {x} (after {iterations} iterations)")]
    DerivativeNearZero {
        /// The estimate where the derivative vanished
        x: f64,
        /// Number of update steps performed before stopping
        iterations: usize,
    },
}

/// Solver configuration errors.
///
/// Raised at the boundary, before the engine is invoked.
///
/// # Examples
/// ```
/// use solver_core::types::ConfigError;
///
/// let err = ConfigError::NonPositiveTolerance { tolerance: 0.0 };
/// assert_eq!(format!("{}", err), "tolerance must be positive, got 0");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// Tolerance is zero or negative.
    #[error("tolerance must be positive, got {tolerance}")]
    NonPositiveTolerance {
        /// The rejected tolerance
        tolerance: f64,
    },

    /// Tolerance is NaN or infinite.
    #[error("tolerance must be finite, got {tolerance}")]
    NonFiniteTolerance {
        /// The rejected tolerance
        tolerance: f64,
    },
}
