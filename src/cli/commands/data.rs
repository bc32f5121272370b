//! Test-set data command argument structures

use std::path::PathBuf;

use clap::Args;

/// Arguments for the baseline submission generators.
#[derive(Args, Debug)]
pub struct BaselineArgs {
    /// Test-set input directory
    #[arg(long = "bth_test_set")]
    pub bth_test_set: PathBuf,

    /// Directory results.csv is written to
    #[arg(long = "bth_results")]
    pub bth_results: PathBuf,

    /// RNG seed for reproducible guesses (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the inspect command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Test-set input directory holding the SynthCC logs
    #[arg(long = "bth_test_set")]
    pub bth_test_set: PathBuf,

    /// Restrict summaries to a single agent
    #[arg(long = "agent_id")]
    pub agent_id: Option<String>,
}
