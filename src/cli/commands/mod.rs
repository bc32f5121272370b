//! Main CLI commands enum

use clap::Subcommand;

pub mod data;
pub mod grading;

pub use data::{BaselineArgs, InspectArgs};
pub use grading::GradeArgs;

/// Top-level hackgrade commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grade a heart-attack submission (PatientID, HadHeartAttack)
    GradeHa(GradeArgs),

    /// Grade a SynthBank charge-off submission (agent_id, one column per window)
    GradeSynthbank(GradeArgs),

    /// Write a random heart-attack baseline submission
    BaselineHa(BaselineArgs),

    /// Write a random SynthCC charge-off baseline submission
    BaselineSynthcc(BaselineArgs),

    /// Summarize the SynthCC test-set logs
    Inspect(InspectArgs),
}
