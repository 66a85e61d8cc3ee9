//! Example problems with known roots.

use crate::traits::DifferentiableFunction;

/// The cubic `f(x) = x^3 - x - 1`.
///
/// Its single real root is the plastic number, approximately
/// [`Cubic::ROOT`]. The derivative `3x^2 - 1` vanishes at `±1/√3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubic;

impl Cubic {
    /// Human-readable form of the equation.
    pub const EQUATION: &'static str = "f(x) = x^3 - x - 1";

    /// The real root, to double precision.
    pub const ROOT: f64 = 1.324_717_957_244_746;
}

impl DifferentiableFunction<f64> for Cubic {
    fn value(&self, x: f64) -> f64 {
        x * x * x - x - 1.0
    }

    fn derivative(&self, x: f64) -> f64 {
        3.0 * x * x - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cubic_vanishes_at_root() {
        assert_abs_diff_eq!(Cubic.value(Cubic::ROOT), 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_cubic_derivative() {
        assert_eq!(Cubic.derivative(0.0), -1.0);
        assert_eq!(Cubic.derivative(1.0), 2.0);
        assert_abs_diff_eq!(Cubic.derivative(1.0 / 3.0_f64.sqrt()), 0.0, epsilon = 1e-12);
    }
}
