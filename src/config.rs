use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PlacementError;
use crate::logging::TracingConfig;

/// Which selector the CLI should run against a non-dominated front.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorKind {
    Preference,
    Kneeness,
}

impl Default for SelectorKind {
    fn default() -> Self {
        Self::Kneeness
    }
}

/// Top-level TOML configuration for a solve run: the fairness exponent
/// shared by both stages, selector choice, RNG seed, and export paths.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolveConfig {
    /// Fairness exponent `p >= 1` for the local stage's Lp-norm utilization
    /// objective.
    #[serde(default = "default_fairness_exponent")]
    pub fairness_exponent: f64,
    #[serde(default)]
    pub selector: SelectorKind,
    /// Preference in `[0, 1]`, used only when `selector = "preference"`.
    #[serde(default = "default_preference")]
    pub preference: f64,
    #[serde(default = "default_seed")]
    pub rng_seed: u64,
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    #[serde(default)]
    pub tracing: TracingConfig,
}

fn default_fairness_exponent() -> f64 {
    2.0
}

fn default_preference() -> f64 {
    0.5
}

fn default_seed() -> u64 {
    42
}

fn default_population_size() -> usize {
    64
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            fairness_exponent: default_fairness_exponent(),
            selector: SelectorKind::default(),
            preference: default_preference(),
            rng_seed: default_seed(),
            population_size: default_population_size(),
            export_dir: None,
            tracing: TracingConfig::default(),
        }
    }
}

impl SolveConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlacementError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlacementError> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_fairness_exponent() {
        let config = SolveConfig::default();
        assert_eq!(config.fairness_exponent, 2.0);
        assert_eq!(config.selector, SelectorKind::Kneeness);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solve.toml");
        let mut config = SolveConfig::default();
        config.rng_seed = 7;
        config.selector = SelectorKind::Preference;
        config.save(&path).unwrap();

        let loaded = SolveConfig::load(&path).unwrap();
        assert_eq!(loaded.rng_seed, 7);
        assert_eq!(loaded.selector, SelectorKind::Preference);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "rng_seed = 99\n").unwrap();
        let loaded = SolveConfig::load(&path).unwrap();
        assert_eq!(loaded.rng_seed, 99);
        assert_eq!(loaded.fairness_exponent, 2.0);
    }
}
