//! Solve command implementation
//!
//! Finds a real root of the example cubic from a user-supplied starting point.

use solver_core::problems::Cubic;
use solver_core::{NewtonRaphsonSolver, RootOutcome};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use crate::config::SolverSettings;
use crate::{prompt, report, CliError, Result};

/// Run the solve command against stdin/stdout.
pub fn run(settings: SolverSettings, guess: Option<f64>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = execute(settings, guess, &mut stdin.lock(), &mut stdout.lock())?;
    outcome.into_result()?;
    Ok(())
}

/// Validate settings, obtain a guess, solve and render the report.
///
/// The guess is read from `input` only when `guess` is `None`.
pub fn execute<R: BufRead, W: Write>(
    settings: SolverSettings,
    guess: Option<f64>,
    input: &mut R,
    output: &mut W,
) -> Result<RootOutcome<f64>> {
    let config = settings.to_solver_config()?;

    if let Some(x0) = guess {
        if !x0.is_finite() {
            return Err(CliError::InvalidArgument(format!(
                "Initial guess must be finite, got {}",
                x0
            )));
        }
    }

    report::write_banner(output, Cubic::EQUATION, &config)?;

    let x0 = match guess {
        Some(x0) => x0,
        None => prompt::read_guess(input, output)?,
    };

    writeln!(output)?;
    writeln!(output, "Calculating root starting from x_0 = {}...", x0)?;

    info!(
        x0,
        tolerance = config.tolerance,
        max_iterations = config.max_iterations,
        "Starting Newton-Raphson solve"
    );

    let solver = NewtonRaphsonSolver::new(config);
    let outcome = solver.solve(&Cubic, x0);

    match outcome {
        RootOutcome::Converged { root, iterations } => {
            info!(root, iterations, "Converged");
        }
        RootOutcome::ZeroDerivative { at, iterations } => {
            warn!(at, iterations, "Derivative vanished");
        }
        RootOutcome::NotConverged { iterations } => {
            warn!(iterations, "Iteration budget exhausted");
        }
    }

    report::write_outcome(output, &outcome, &Cubic)?;
    Ok(outcome)
}
