//! CLI configuration loading
//!
//! Settings are layered, later sources overriding earlier ones:
//! 1. Built-in defaults
//! 2. TOML file (`--config`, ignored when missing)
//! 3. Environment variables prefixed `NEWTON__` (e.g. `NEWTON__SOLVER__TOLERANCE`)
//! 4. Command-line flags, applied with [`SolverSettings::with_overrides`]

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use solver_core::SolverConfig;
use std::path::Path;

use crate::Result;

/// Default convergence tolerance on `|f(x)|`
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default iteration budget
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// CLI configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Solver settings
    #[serde(default)]
    pub solver: SolverSettings,
}

/// `[solver]` table
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct SolverSettings {
    /// Convergence tolerance on `|f(x)|`
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Maximum number of Newton steps
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl SolverSettings {
    /// Apply command-line overrides.
    pub fn with_overrides(self, tolerance: Option<f64>, max_iterations: Option<usize>) -> Self {
        Self {
            tolerance: tolerance.unwrap_or(self.tolerance),
            max_iterations: max_iterations.unwrap_or(self.max_iterations),
        }
    }

    /// Validate into a solver configuration.
    pub fn to_solver_config(&self) -> Result<SolverConfig<f64>> {
        Ok(SolverConfig::try_new(self.tolerance, self.max_iterations)?)
    }
}

impl CliConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// A missing file is not an error; defaults apply instead.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let builder = Self::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(
                Environment::with_prefix("NEWTON")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::from_builder(builder)
    }

    fn builder() -> ConfigBuilder<DefaultState> {
        Config::builder()
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: CliConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}
