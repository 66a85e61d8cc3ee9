//! # solver_core: Newton-Raphson Root Finding
//!
//! ## Foundation Layer Role
//!
//! solver_core is the bottom layer of the workspace, providing:
//! - The Newton-Raphson root-finding engine (`math::solvers`)
//! - The tagged result of a solve, `RootOutcome` (`math::solvers`)
//! - Solver configuration with boundary validation (`math::solvers::config`)
//! - A trait for differentiable scalar functions (`traits`)
//! - Error types: `SolverError`, `ConfigError` (`types::error`)
//! - The example cubic `x^3 - x - 1` (`problems`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic floating-point computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! The engine performs no I/O and no logging. Rendering a result is the
//! caller's job.
//!
//! ## Usage Examples
//!
//! ```rust
//! use solver_core::math::solvers::{find_root, RootOutcome};
//!
//! let f = |x: f64| x * x * x - x - 1.0;
//! let df = |x: f64| 3.0 * x * x - 1.0;
//!
//! match find_root(f, df, 1.5, 1e-7, 100) {
//!     RootOutcome::Converged { root, iterations } => {
//!         assert!(f(root).abs() < 1e-7);
//!         assert!(iterations < 100);
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `RootOutcome`, `SolverError` and `ConfigError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod problems;
pub mod traits;
pub mod types;

pub use math::solvers::{find_root, NewtonRaphsonSolver, RootOutcome, SolverConfig};
pub use traits::{DifferentiableFunction, FnPair};
pub use types::{ConfigError, SolverError};
