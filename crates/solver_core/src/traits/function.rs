//! Differentiable scalar functions.

use num_traits::Float;

/// A real-valued function of one variable together with its derivative.
///
/// Both methods must be pure: the solver may call them any number of
/// times at the same point and expects the same answer.
///
/// # Example
///
/// ```
/// use solver_core::traits::DifferentiableFunction;
///
/// struct Parabola;
///
/// impl DifferentiableFunction<f64> for Parabola {
///     fn value(&self, x: f64) -> f64 {
///         x * x - 4.0
///     }
///
///     fn derivative(&self, x: f64) -> f64 {
///         2.0 * x
///     }
/// }
///
/// assert_eq!(Parabola.value(2.0), 0.0);
/// assert_eq!(Parabola.derivative(2.0), 4.0);
/// ```
pub trait DifferentiableFunction<T: Float> {
    /// Evaluate `f(x)`.
    fn value(&self, x: T) -> T;

    /// Evaluate `f'(x)`.
    fn derivative(&self, x: T) -> T;
}

/// A [`DifferentiableFunction`] built from two closures.
///
/// # Example
///
/// ```
/// use solver_core::traits::{DifferentiableFunction, FnPair};
///
/// let square = FnPair::new(|x: f64| x * x, |x: f64| 2.0 * x);
/// assert_eq!(square.value(3.0), 9.0);
/// assert_eq!(square.derivative(3.0), 6.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnPair<F, G> {
    f: F,
    df: G,
}

impl<F, G> FnPair<F, G> {
    /// Pair a function with its derivative.
    pub fn new(f: F, df: G) -> Self {
        Self { f, df }
    }
}

impl<T, F, G> DifferentiableFunction<T> for FnPair<F, G>
where
    T: Float,
    F: Fn(T) -> T,
    G: Fn(T) -> T,
{
    fn value(&self, x: T) -> T {
        (self.f)(x)
    }

    fn derivative(&self, x: T) -> T {
        (self.df)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_pair_delegates() {
        let pair = FnPair::new(|x: f64| x.sin(), |x: f64| x.cos());
        assert_eq!(pair.value(0.0), 0.0);
        assert_eq!(pair.derivative(0.0), 1.0);
    }

    #[test]
    fn test_fn_pair_with_f32() {
        let pair = FnPair::new(|x: f32| 3.0 * x, |_: f32| 3.0);
        assert_eq!(pair.value(2.0_f32), 6.0);
        assert_eq!(pair.derivative(2.0_f32), 3.0);
    }

    #[test]
    fn test_boxed_trait_object() {
        let boxed: Box<dyn DifferentiableFunction<f64>> =
            Box::new(FnPair::new(|x: f64| x - 1.0, |_: f64| 1.0));
        assert_eq!(boxed.value(1.0), 0.0);
        assert_eq!(boxed.derivative(7.0), 1.0);
    }
}
