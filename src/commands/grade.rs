//! `hackgrade grade-ha` / `hackgrade grade-synthbank` - score a submission

use serde_json::{json, Map, Value};

use crate::cli::commands::GradeArgs;
use crate::cli::Cli;
use hackgrade_core::error::{GradeError, Result};
use hackgrade_core::pipeline::{grade, GradeOutcome, GradeRequest};
use hackgrade_core::report::format_score;
use hackgrade_core::task::{Task, AVG_COLUMN};

/// Execute a grading command for `task`
pub fn execute(cli: &Cli, args: &GradeArgs, task: &Task) -> Result<()> {
    let request = GradeRequest {
        results_dir: args.results_dir.clone(),
        test_labels_path: args.test_labels_path.clone(),
        grading_output_dir: args.grading_output_dir.clone(),
    };

    let outcome = grade(&request, task)?;

    crate::output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&outcome_json(&outcome))?);
            Ok::<(), GradeError>(())
        },
        human => {
            if !cli.quiet {
                print_human(&outcome);
            }
        }
    )
}

fn print_human(outcome: &GradeOutcome) {
    for row in &outcome.table.rows {
        for (target, value) in outcome.task.targets.iter().zip(&row.values) {
            println!("{} for {}: {}", row.metric, target, format_score(*value));
        }
        if outcome.task.average {
            if let Some(avg) = outcome.table.value(&row.metric, AVG_COLUMN) {
                println!(
                    "Average {} score across prediction windows: {}",
                    row.metric,
                    format_score(avg)
                );
            }
        }
    }
    println!("Wrote {}", outcome.output_path.display());
}

fn outcome_json(outcome: &GradeOutcome) -> Value {
    let mut scores = Map::new();
    for row in &outcome.table.rows {
        let values: Map<String, Value> = outcome
            .table
            .columns
            .iter()
            .zip(&row.values)
            .map(|(column, value)| (column.clone(), json!(value)))
            .collect();
        scores.insert(row.metric.clone(), Value::Object(values));
    }

    json!({
        "task": outcome.task.name,
        "rows": outcome.rows,
        "output_path": outcome.output_path.display().to_string(),
        "columns": outcome.table.columns,
        "scores": scores,
    })
}
