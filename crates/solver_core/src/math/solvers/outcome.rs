//! Tagged result of a root-finding run.

use crate::types::SolverError;
use num_traits::Float;

/// Result of a single Newton-Raphson run.
///
/// Exactly one variant is produced per invocation. `iterations` counts the
/// update steps actually performed and never exceeds the configured budget.
///
/// # Example
///
/// ```
/// use solver_core::math::solvers::{find_root, RootOutcome};
///
/// let outcome = find_root(|x: f64| x - 3.0, |_: f64| 1.0, 3.0, 1e-9, 10);
/// assert_eq!(outcome, RootOutcome::Converged { root: 3.0, iterations: 0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootOutcome<T> {
    /// `|f(root)| < tolerance` was reached.
    Converged {
        /// The accepted estimate
        root: T,
        /// Update steps performed before acceptance
        iterations: usize,
    },

    /// `|f'(at)|` fell below the fixed safety threshold.
    ZeroDerivative {
        /// The estimate where the derivative vanished
        at: T,
        /// Update steps performed before stopping
        iterations: usize,
    },

    /// The iteration budget ran out.
    NotConverged {
        /// Always equal to the configured budget
        iterations: usize,
    },
}

impl<T: Float> RootOutcome<T> {
    /// Number of update steps performed.
    pub fn iterations(&self) -> usize {
        match *self {
            RootOutcome::Converged { iterations, .. }
            | RootOutcome::ZeroDerivative { iterations, .. }
            | RootOutcome::NotConverged { iterations } => iterations,
        }
    }

    /// The root, if the run converged.
    pub fn root(&self) -> Option<T> {
        match *self {
            RootOutcome::Converged { root, .. } => Some(root),
            _ => None,
        }
    }

    /// Returns `true` for [`RootOutcome::Converged`].
    pub fn is_converged(&self) -> bool {
        matches!(self, RootOutcome::Converged { .. })
    }

    /// Convert into a `Result`, mapping the failure variants to [`SolverError`].
    ///
    /// # Example
    ///
    /// ```
    /// use solver_core::math::solvers::RootOutcome;
    /// use solver_core::types::SolverError;
    ///
    /// let outcome: RootOutcome<f64> = RootOutcome::NotConverged { iterations: 5 };
    /// assert_eq!(
    ///     outcome.into_result(),
    ///     Err(SolverError::MaxIterationsExceeded { iterations: 5 })
    /// );
    /// ```
    pub fn into_result(self) -> Result<T, SolverError> {
        match self {
            RootOutcome::Converged { root, .. } => Ok(root),
            RootOutcome::ZeroDerivative { at, iterations } => {
                Err(SolverError::DerivativeNearZero {
                    x: at.to_f64().unwrap_or(f64::NAN),
                    iterations,
                })
            }
            RootOutcome::NotConverged { iterations } => {
                Err(SolverError::MaxIterationsExceeded { iterations })
            }
        }
    }
}
