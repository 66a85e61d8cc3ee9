//! Solver configuration.

use crate::types::ConfigError;
use num_traits::Float;

/// Configuration for the Newton-Raphson solver.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use solver_core::math::solvers::SolverConfig;
///
/// // Default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 100);
///
/// // Validated configuration
/// let custom = SolverConfig::try_new(1e-12, 200).unwrap();
/// assert_eq!(custom.max_iterations, 200);
///
/// // Non-positive tolerance is rejected before any solve happens
/// assert!(SolverConfig::try_new(0.0, 100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance.
    ///
    /// The solver stops when `|f(x)| < tolerance`. Must be finite and
    /// strictly positive.
    pub tolerance: T,

    /// Maximum number of update steps.
    ///
    /// Zero is allowed and means no convergence check is performed at all:
    /// every solve returns `RootOutcome::NotConverged { iterations: 0 }`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-7
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-7).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// Intended for literal constants. Use [`SolverConfig::try_new`] for
    /// values coming from user input or configuration files.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is not finite or not strictly positive.
    ///
    /// # Example
    ///
    /// ```
    /// use solver_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(
            tolerance.is_finite() && tolerance > T::zero(),
            "tolerance must be positive and finite"
        );
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Create a new configuration, rejecting malformed values.
    ///
    /// # Errors
    ///
    /// * `ConfigError::NonFiniteTolerance` - tolerance is NaN or infinite
    /// * `ConfigError::NonPositiveTolerance` - tolerance is zero or negative
    pub fn try_new(tolerance: T, max_iterations: usize) -> Result<Self, ConfigError> {
        let config = Self {
            tolerance,
            max_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration satisfies the solver's preconditions.
    ///
    /// Useful for configurations built with struct literal syntax.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.tolerance.to_f64().unwrap_or(f64::NAN);
        if !self.tolerance.is_finite() {
            return Err(ConfigError::NonFiniteTolerance { tolerance });
        }
        if self.tolerance <= T::zero() {
            return Err(ConfigError::NonPositiveTolerance { tolerance });
        }
        Ok(())
    }
}
