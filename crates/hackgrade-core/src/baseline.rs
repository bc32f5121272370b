//! Random baseline submissions
//!
//! These generators ignore the test-set features and guess, producing a
//! `results.csv` that exercises the graders end to end.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::pipeline::RESULTS_FILE;
use crate::table::Table;
use crate::task::{charge_off_column, AGENT_ID, HAD_HEART_ATTACK, PATIENT_ID};

/// Heart-attack test-set input file
pub const HA_INPUTS_FILE: &str = "inputs.csv";

/// SynthCC test-set logs; agents are the union across all three
pub const SYNTHCC_LOG_FILES: [&str; 3] = [
    "account_state_log.csv",
    "payments_log.csv",
    "transactions_log.csv",
];

/// Seeded RNG when a seed is given, OS entropy otherwise
pub fn baseline_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Guess each patient in `inputs.csv` positive with probability `rate`.
///
/// Writes `results.csv` with `PatientID,HadHeartAttack` and returns its path.
pub fn heart_attack_baseline<R: Rng + ?Sized>(
    test_set_dir: &Path,
    results_dir: &Path,
    rate: f64,
    rng: &mut R,
) -> Result<PathBuf> {
    let inputs = Table::read_csv(&test_set_dir.join(HA_INPUTS_FILE), "test set input")?;
    let patients = inputs.column(PATIENT_ID)?;

    let rows = patients
        .iter()
        .map(|patient| {
            let guess = rng.gen::<f64>() < rate;
            vec![patient.to_string(), u8::from(guess).to_string()]
        })
        .collect();

    let output = Table::new(
        vec![PATIENT_ID.to_string(), HAD_HEART_ATTACK.to_string()],
        rows,
    );
    write_results(&output, results_dir)
}

/// Mark a fixed share of agents positive in each prediction window.
///
/// Agents are the sorted union of `agent_id` across the three SynthCC logs.
/// Each window gets its own shuffle of `floor(rate·n)` ones and
/// `floor((1-rate)·n)` zeros, zero-padded to `n`.
pub fn charge_off_baseline<R: Rng + ?Sized>(
    test_set_dir: &Path,
    results_dir: &Path,
    prediction_windows_months: &[u32],
    rate: f64,
    rng: &mut R,
) -> Result<PathBuf> {
    let mut agents = BTreeSet::new();
    for file in SYNTHCC_LOG_FILES {
        let log = Table::read_csv(&test_set_dir.join(file), "test set input")?;
        agents.extend(log.column(AGENT_ID)?.into_iter().map(str::to_string));
    }
    let agents: Vec<String> = agents.into_iter().collect();

    let windows: Vec<Vec<u8>> = prediction_windows_months
        .iter()
        .map(|_| fixed_ratio_guesses(agents.len(), rate, &mut *rng))
        .collect();

    let mut headers = vec![AGENT_ID.to_string()];
    headers.extend(prediction_windows_months.iter().map(|&m| charge_off_column(m)));

    let rows = agents
        .iter()
        .enumerate()
        .map(|(i, agent)| {
            let mut row = vec![agent.clone()];
            row.extend(windows.iter().map(|guesses| guesses[i].to_string()));
            row
        })
        .collect();

    write_results(&Table::new(headers, rows), results_dir)
}

/// A shuffled 0/1 vector of length `n` with `floor(rate·n)` ones
pub fn fixed_ratio_guesses<R: Rng + ?Sized>(n: usize, rate: f64, rng: &mut R) -> Vec<u8> {
    let ones = (rate * n as f64) as usize;
    let zeros = ((1.0 - rate) * n as f64) as usize;

    let mut guesses = vec![1u8; ones.min(n)];
    guesses.extend(std::iter::repeat(0u8).take(zeros));
    guesses.resize(n, 0);
    guesses.shuffle(rng);
    guesses
}

fn write_results(table: &Table, results_dir: &Path) -> Result<PathBuf> {
    let path = results_dir.join(RESULTS_FILE);
    table.write_csv(&path)?;
    tracing::debug!(path = %path.display(), rows = table.len(), "write_results");
    Ok(path)
}
