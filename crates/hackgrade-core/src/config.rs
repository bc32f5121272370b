//! Grading configuration for hackgrade
//!
//! Configuration is optional. It is read from `--config <path>` or the
//! `HACKGRADE_CONFIG` environment variable; built-in defaults apply otherwise.

pub mod types;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GradeError, Result};

pub use types::{
    BaselineConfig, GradingConfig, SynthBankConfig, DEFAULT_CHARGE_OFF_RATE,
    DEFAULT_HEART_ATTACK_RATE, DEFAULT_PREDICTION_WINDOWS_MONTHS,
};

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "HACKGRADE_CONFIG";

impl GradingConfig {
    /// Load configuration from a file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(GradeError::input_missing("config file", path));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| GradeError::io_operation("read config", path.display(), e))?;
        let config: GradingConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GradeError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject window lists and rates the pipelines cannot use
    pub fn validate(&self) -> Result<()> {
        let windows = &self.synthbank.prediction_windows_months;
        if windows.is_empty() {
            bail_invalid!("prediction_windows_months", "[] (at least one window is required)");
        }
        let mut seen = HashSet::new();
        for months in windows {
            if *months == 0 {
                bail_invalid!("prediction window", "0 months");
            }
            if !seen.insert(*months) {
                bail_invalid!("prediction window", format!("{} months is listed twice", months));
            }
        }

        check_rate("heart_attack_rate", self.baseline.heart_attack_rate)?;
        check_rate("charge_off_rate", self.baseline.charge_off_rate)?;
        Ok(())
    }
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&rate) {
        bail_invalid!(name, format!("{} (expected a value between 0 and 1)", rate));
    }
    Ok(())
}
