//! Traits for functions the solvers operate on.
//!
//! - [`DifferentiableFunction`]: a scalar function paired with its analytic derivative
//! - [`FnPair`]: adapter turning two closures into a [`DifferentiableFunction`]

pub mod function;

pub use function::{DifferentiableFunction, FnPair};

/// Re-export of the floating-point trait used throughout the crate.
pub use num_traits::Float;
