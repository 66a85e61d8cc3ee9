//! Plain-text rendering of solver results

use solver_core::{DifferentiableFunction, RootOutcome, SolverConfig};
use std::io::{self, Write};

const RULE: &str = "-----------------------------------";

/// Write the program banner.
pub fn write_banner<W: Write>(
    out: &mut W,
    equation: &str,
    config: &SolverConfig<f64>,
) -> io::Result<()> {
    writeln!(out, "===================================")?;
    writeln!(out, " Newton-Raphson Root Finder ")?;
    writeln!(out, "===================================")?;
    writeln!(out, "This program finds a real root for the equation: {}", equation)?;
    writeln!(
        out,
        "It will stop when |f(x)| is below {} (at most {} iterations).",
        config.tolerance, config.max_iterations
    )?;
    writeln!(out)
}

/// Write the result block for one outcome.
///
/// `problem` is re-evaluated at the root so the residual is shown.
pub fn write_outcome<W, P>(out: &mut W, outcome: &RootOutcome<f64>, problem: &P) -> io::Result<()>
where
    W: Write,
    P: DifferentiableFunction<f64> + ?Sized,
{
    writeln!(out, "{}", RULE)?;
    match *outcome {
        RootOutcome::Converged { root, iterations } => {
            writeln!(out, "SUCCESS: Root found!")?;
            writeln!(out, "  x = {}", root)?;
            writeln!(out, "  f(x) = {}", problem.value(root))?;
            writeln!(out, "  Found in {} iterations.", iterations)?;
        }
        RootOutcome::ZeroDerivative { at, iterations } => {
            writeln!(out, "FAILURE: Could not find a root from that starting point.")?;
            writeln!(
                out,
                "  Derivative was zero at x = {} after {} iterations.",
                at, iterations
            )?;
        }
        RootOutcome::NotConverged { iterations } => {
            writeln!(out, "FAILURE: Could not find a root from that starting point.")?;
            writeln!(out, "  Failed to converge after {} iterations.", iterations)?;
        }
    }
    writeln!(out, "{}", RULE)
}
