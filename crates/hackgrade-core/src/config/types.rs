//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Prediction windows used by the SynthBank charge-off task
pub const DEFAULT_PREDICTION_WINDOWS_MONTHS: [u32; 4] = [3, 6, 9, 12];

/// Share of patients the heart-attack baseline guesses positive
pub const DEFAULT_HEART_ATTACK_RATE: f64 = 0.2;

/// Share of agents the charge-off baseline marks positive in every window
pub const DEFAULT_CHARGE_OFF_RATE: f64 = 0.3;

/// Grading configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradingConfig {
    /// SynthBank task settings
    #[serde(default)]
    pub synthbank: SynthBankConfig,

    /// Baseline submission generator settings
    #[serde(default)]
    pub baseline: BaselineConfig,
}

/// Settings for the multi-window charge-off task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthBankConfig {
    /// Prediction windows in months, one target column each
    #[serde(default = "default_prediction_windows")]
    pub prediction_windows_months: Vec<u32>,
}

/// Settings for the random baseline generators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// Bernoulli rate for the heart-attack baseline
    #[serde(default = "default_heart_attack_rate")]
    pub heart_attack_rate: f64,

    /// Fixed positive ratio for the charge-off baseline
    #[serde(default = "default_charge_off_rate")]
    pub charge_off_rate: f64,

    /// RNG seed (optional; OS entropy when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SynthBankConfig {
    fn default() -> Self {
        Self {
            prediction_windows_months: default_prediction_windows(),
        }
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            heart_attack_rate: default_heart_attack_rate(),
            charge_off_rate: default_charge_off_rate(),
            seed: None,
        }
    }
}

fn default_prediction_windows() -> Vec<u32> {
    DEFAULT_PREDICTION_WINDOWS_MONTHS.to_vec()
}

fn default_heart_attack_rate() -> f64 {
    DEFAULT_HEART_ATTACK_RATE
}

fn default_charge_off_rate() -> f64 {
    DEFAULT_CHARGE_OFF_RATE
}
