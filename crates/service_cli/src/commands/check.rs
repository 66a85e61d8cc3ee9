//! Check command implementation
//!
//! Prints the effective solver configuration and where it came from.

use solver_core::math::solvers::DERIVATIVE_THRESHOLD;
use solver_core::problems::Cubic;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use crate::config::SolverSettings;
use crate::Result;

/// Run the check command
pub fn run(settings: SolverSettings, config_path: &str) -> Result<()> {
    info!("Checking solver configuration...");
    let stdout = io::stdout();
    write_summary(&mut stdout.lock(), settings, config_path)
}

/// Write the configuration summary, failing if the settings are invalid.
pub fn write_summary<W: Write>(
    out: &mut W,
    settings: SolverSettings,
    config_path: &str,
) -> Result<()> {
    let source = if Path::new(config_path).exists() {
        "file + environment"
    } else {
        "defaults + environment (file not found)"
    };

    writeln!(out, "Newton Solver Check")?;
    writeln!(out, "===================")?;
    writeln!(out)?;
    writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Config file: {}", config_path)?;
    writeln!(out, "Source: {}", source)?;
    writeln!(out)?;
    writeln!(out, "Solver:")?;
    writeln!(out, "  Equation: {}", Cubic::EQUATION)?;
    writeln!(out, "  Tolerance: {}", settings.tolerance)?;
    writeln!(out, "  Max iterations: {}", settings.max_iterations)?;
    writeln!(out, "  Derivative threshold: {:e}", DERIVATIVE_THRESHOLD)?;
    writeln!(out)?;

    match settings.to_solver_config() {
        Ok(_) => {
            writeln!(out, "Status: ✓ Configuration valid")?;
            Ok(())
        }
        Err(err) => {
            writeln!(out, "Status: ✗ {}", err)?;
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_summary_for_defaults() {
        let mut buffer = Vec::new();
        write_summary(&mut buffer, SolverSettings::default(), "missing.toml").unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Config file: missing.toml"));
        assert!(text.contains("file not found"));
        assert!(text.contains("Max iterations: 100"));
        assert!(text.contains("Derivative threshold: 1e-12"));
        assert!(text.contains("Configuration valid"));
    }

    #[test]
    fn test_summary_flags_invalid_settings() {
        let mut buffer = Vec::new();
        let settings = SolverSettings::default().with_overrides(Some(0.0), None);
        let result = write_summary(&mut buffer, settings, "missing.toml");
        let text = String::from_utf8(buffer).unwrap();

        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
        assert!(text.contains("tolerance must be positive"));
    }
}
