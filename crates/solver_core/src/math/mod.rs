//! Numerical routines.
//!
//! - `solvers`: Newton-Raphson root finding and its configuration

pub mod solvers;
