//! Root-finding solvers for scalar functions.
//!
//! ## Available Solvers
//!
//! - [`find_root`]: Newton-Raphson iteration from a single starting point
//! - [`NewtonRaphsonSolver`]: The same iteration bound to a [`SolverConfig`]
//!
//! ## Configuration
//!
//! [`SolverConfig`] holds:
//! - `tolerance`: Convergence threshold on `|f(x)|` (default: 1e-7)
//! - `max_iterations`: Maximum number of update steps (default: 100)
//!
//! ## Outcomes
//!
//! Every call produces exactly one [`RootOutcome`]. Failure to converge is
//! data, not a panic: the caller decides whether to retry from another
//! starting point or surface the failure through [`RootOutcome::into_result`].
//!
//! ## Examples
//!
//! ```
//! use solver_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let config = SolverConfig::new(1e-12, 50);
//! let solver = NewtonRaphsonSolver::new(config);
//!
//! let outcome = solver.find_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0);
//! let root = outcome.root().unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

pub mod config;
mod newton_raphson;
mod outcome;

pub use config::SolverConfig;
pub use newton_raphson::{find_root, NewtonRaphsonSolver, DERIVATIVE_THRESHOLD};
pub use outcome::RootOutcome;
