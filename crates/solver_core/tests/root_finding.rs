//! Integration tests for the Newton-Raphson engine on the example cubic.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use solver_core::math::solvers::{find_root, NewtonRaphsonSolver, RootOutcome, SolverConfig};
use solver_core::problems::Cubic;
use solver_core::traits::DifferentiableFunction;
use solver_core::types::SolverError;

const TOLERANCE: f64 = 1e-7;
const MAX_ITERATIONS: usize = 100;

fn solve_cubic(x0: f64, max_iterations: usize) -> RootOutcome<f64> {
    find_root(
        |x: f64| Cubic.value(x),
        |x: f64| Cubic.derivative(x),
        x0,
        TOLERANCE,
        max_iterations,
    )
}

#[test]
fn test_converges_from_one_and_a_half() {
    let outcome = solve_cubic(1.5, MAX_ITERATIONS);

    let RootOutcome::Converged { root, iterations } = outcome else {
        panic!("expected convergence, got {:?}", outcome);
    };
    assert_abs_diff_eq!(root, 1.324_717_957_2, epsilon = 1e-7);
    assert!(Cubic.value(root).abs() < TOLERANCE);
    assert!(iterations < 10, "took {} iterations", iterations);
}

#[test]
fn test_converges_from_two_to_same_root() {
    let from_two = solve_cubic(2.0, MAX_ITERATIONS).root().unwrap();
    let from_one_and_a_half = solve_cubic(1.5, MAX_ITERATIONS).root().unwrap();

    assert_abs_diff_eq!(from_two, Cubic::ROOT, epsilon = 1e-7);
    assert_abs_diff_eq!(from_two, from_one_and_a_half, epsilon = 1e-7);
}

#[test]
fn test_converges_from_far_guesses() {
    for x0 in [0.0, 1.0, -2.0, 100.0] {
        let outcome = solve_cubic(x0, MAX_ITERATIONS);
        let root = outcome
            .root()
            .unwrap_or_else(|| panic!("x0 = {} gave {:?}", x0, outcome));
        assert_abs_diff_eq!(root, Cubic::ROOT, epsilon = 1e-7);
    }
}

#[test]
fn test_zero_derivative_at_stationary_points() {
    let stationary = 1.0 / 3.0_f64.sqrt();

    for x0 in [stationary, -stationary] {
        let outcome = solve_cubic(x0, MAX_ITERATIONS);
        assert_eq!(
            outcome,
            RootOutcome::ZeroDerivative {
                at: x0,
                iterations: 0
            }
        );
    }
}

#[test]
fn test_zero_budget_is_not_converged() {
    // Even the exact root is not accepted without a single check
    for x0 in [1.5, Cubic::ROOT, 1.0 / 3.0_f64.sqrt()] {
        assert_eq!(
            solve_cubic(x0, 0),
            RootOutcome::NotConverged { iterations: 0 }
        );
    }
}

#[test]
fn test_tight_budget_is_not_converged() {
    // From 2.0 the cubic needs more than two steps
    assert_eq!(
        solve_cubic(2.0, 2),
        RootOutcome::NotConverged { iterations: 2 }
    );
}

#[test]
fn test_solver_struct_matches_free_function() {
    let solver = NewtonRaphsonSolver::new(SolverConfig::new(TOLERANCE, MAX_ITERATIONS));
    assert_eq!(solver.solve(&Cubic, 1.5), solve_cubic(1.5, MAX_ITERATIONS));
}

#[test]
fn test_into_result_propagates_failures() {
    fn root_or_error(x0: f64) -> Result<f64, SolverError> {
        let root = solve_cubic(x0, MAX_ITERATIONS).into_result()?;
        Ok(root)
    }

    assert!(root_or_error(1.5).is_ok());
    assert!(matches!(
        root_or_error(1.0 / 3.0_f64.sqrt()),
        Err(SolverError::DerivativeNearZero { iterations: 0, .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_identical_inputs_give_identical_outcomes(
        x0 in -1e3_f64..1e3,
        max_iterations in 0_usize..200,
    ) {
        let first = solve_cubic(x0, max_iterations);
        let second = solve_cubic(x0, max_iterations);

        prop_assert_eq!(first.iterations(), second.iterations());
        match (first, second) {
            (
                RootOutcome::Converged { root: a, .. },
                RootOutcome::Converged { root: b, .. },
            ) => prop_assert_eq!(a.to_bits(), b.to_bits()),
            (
                RootOutcome::ZeroDerivative { at: a, .. },
                RootOutcome::ZeroDerivative { at: b, .. },
            ) => prop_assert_eq!(a.to_bits(), b.to_bits()),
            (RootOutcome::NotConverged { .. }, RootOutcome::NotConverged { .. }) => {}
            (a, b) => prop_assert!(false, "outcomes differ: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn prop_iterations_never_exceed_budget(
        x0 in -1e6_f64..1e6,
        tolerance in 1e-15_f64..1.0,
        max_iterations in 0_usize..100,
    ) {
        let outcome = find_root(
            |x: f64| x * x * x - x - 1.0,
            |x: f64| 3.0 * x * x - 1.0,
            x0,
            tolerance,
            max_iterations,
        );
        prop_assert!(outcome.iterations() <= max_iterations);
        if let RootOutcome::NotConverged { iterations } = outcome {
            prop_assert_eq!(iterations, max_iterations);
        }
    }

    #[test]
    fn prop_converged_root_meets_tolerance(
        x0 in -50.0_f64..50.0,
        tolerance in 1e-12_f64..1e-3,
    ) {
        let outcome = find_root(
            |x: f64| x * x * x - x - 1.0,
            |x: f64| 3.0 * x * x - 1.0,
            x0,
            tolerance,
            MAX_ITERATIONS,
        );
        if let RootOutcome::Converged { root, .. } = outcome {
            prop_assert!(Cubic.value(root).abs() < tolerance);
        }
    }
}
