//! Newton-Raphson root-finding solver.

use super::{RootOutcome, SolverConfig};
use crate::traits::DifferentiableFunction;
use num_traits::Float;

/// Absolute threshold below which `|f'(x)|` counts as zero.
///
/// Not configurable. A smaller derivative makes the Newton step undefined
/// or numerically meaningless.
pub const DERIVATIVE_THRESHOLD: f64 = 1e-12;

/// Find a root of `f` by Newton-Raphson iteration from `initial_guess`.
///
/// For each iteration index `i` in `0..max_iterations`:
/// 1. `fx = f(x)`; if `|fx| < tolerance` the run converges with `iterations = i`
/// 2. `dfx = df(x)`; if `|dfx| <` [`DERIVATIVE_THRESHOLD`] the run stops with
///    [`RootOutcome::ZeroDerivative`]
/// 3. `x = x - fx / dfx`
///
/// Convergence is judged on `|f(x)|`, not on the step size. With
/// `max_iterations = 0` no check is performed and the result is
/// `NotConverged { iterations: 0 }`.
///
/// The function never panics. Non-finite values from `f` or `df` fail every
/// comparison and lead to a non-converged outcome.
///
/// # Arguments
///
/// * `f` - Function to find root of
/// * `df` - Analytic derivative of `f`
/// * `initial_guess` - Starting estimate
/// * `tolerance` - Threshold on `|f(x)|`, expected to be strictly positive
/// * `max_iterations` - Maximum number of update steps
///
/// # Example
///
/// ```
/// use solver_core::math::solvers::{find_root, RootOutcome};
///
/// // Solve x³ - x - 1 = 0
/// let f = |x: f64| x * x * x - x - 1.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
///
/// let outcome = find_root(f, df, 1.5, 1e-7, 100);
/// let root = outcome.root().unwrap();
/// assert!((root - 1.3247179572).abs() < 1e-7);
///
/// // Horizontal tangent at the starting point
/// let flat = find_root(f, df, 1.0 / 3.0_f64.sqrt(), 1e-7, 100);
/// assert!(matches!(flat, RootOutcome::ZeroDerivative { iterations: 0, .. }));
/// ```
pub fn find_root<T, F, G>(
    f: F,
    df: G,
    initial_guess: T,
    tolerance: T,
    max_iterations: usize,
) -> RootOutcome<T>
where
    T: Float,
    F: Fn(T) -> T,
    G: Fn(T) -> T,
{
    let threshold = T::from(DERIVATIVE_THRESHOLD).unwrap_or_else(T::epsilon);
    let mut x = initial_guess;

    for iteration in 0..max_iterations {
        let f_val = f(x);

        if f_val.abs() < tolerance {
            return RootOutcome::Converged {
                root: x,
                iterations: iteration,
            };
        }

        let f_prime_val = df(x);

        if f_prime_val.abs() < threshold {
            return RootOutcome::ZeroDerivative {
                at: x,
                iterations: iteration,
            };
        }

        // Newton update
        #[allow(clippy::assign_op_pattern)]
        {
            x = x - f_val / f_prime_val;
        }
    }

    RootOutcome::NotConverged {
        iterations: max_iterations,
    }
}

/// Newton-Raphson root finder bound to a [`SolverConfig`].
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a simple root, meaning the
/// number of correct digits approximately doubles each iteration. It may
/// fail if:
/// - The derivative is near zero at some estimate
/// - The initial guess lies outside the root's basin of attraction
/// - The iterates cycle or diverge
///
/// # Example
///
/// ```
/// use solver_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100));
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).into_result().unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// See [`find_root`] for the iteration and termination rules.
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> RootOutcome<T>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        find_root(
            f,
            f_prime,
            x0,
            self.config.tolerance,
            self.config.max_iterations,
        )
    }

    /// Find a root of a [`DifferentiableFunction`].
    ///
    /// # Example
    ///
    /// ```
    /// use solver_core::math::solvers::NewtonRaphsonSolver;
    /// use solver_core::problems::Cubic;
    ///
    /// let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();
    /// assert!(solver.solve(&Cubic, 2.0).is_converged());
    /// ```
    pub fn solve<P>(&self, problem: &P, x0: T) -> RootOutcome<T>
    where
        P: DifferentiableFunction<T> + ?Sized,
    {
        self.find_root(|x| problem.value(x), |x| problem.derivative(x), x0)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
