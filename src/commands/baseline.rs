//! `hackgrade baseline-ha` / `hackgrade baseline-synthcc` - random submissions

use crate::cli::commands::BaselineArgs;
use crate::cli::Cli;
use hackgrade_core::baseline::{baseline_rng, charge_off_baseline, heart_attack_baseline};
use hackgrade_core::config::GradingConfig;
use hackgrade_core::error::{GradeError, Result};

/// Which baseline submission to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineKind {
    HeartAttack,
    ChargeOff,
}

impl BaselineKind {
    fn name(self) -> &'static str {
        match self {
            BaselineKind::HeartAttack => "ha",
            BaselineKind::ChargeOff => "synthcc",
        }
    }
}

/// Execute a baseline command
pub fn execute(
    cli: &Cli,
    config: &GradingConfig,
    args: &BaselineArgs,
    kind: BaselineKind,
) -> Result<()> {
    let seed = args.seed.or(config.baseline.seed);
    let mut rng = baseline_rng(seed);

    let path = match kind {
        BaselineKind::HeartAttack => heart_attack_baseline(
            &args.bth_test_set,
            &args.bth_results,
            config.baseline.heart_attack_rate,
            &mut rng,
        )?,
        BaselineKind::ChargeOff => charge_off_baseline(
            &args.bth_test_set,
            &args.bth_results,
            &config.synthbank.prediction_windows_months,
            config.baseline.charge_off_rate,
            &mut rng,
        )?,
    };

    tracing::info!(baseline = kind.name(), ?seed, path = %path.display(), "baseline written");

    crate::output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::json!({
                    "baseline": kind.name(),
                    "seed": seed,
                    "output_path": path.display().to_string(),
                })
            );
            Ok::<(), GradeError>(())
        },
        human => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
            }
        }
    )
}
