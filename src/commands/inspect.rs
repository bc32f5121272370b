//! `hackgrade inspect` - summarize the SynthCC test-set logs

use std::path::Path;

use serde::Serialize;

use crate::cli::commands::InspectArgs;
use crate::cli::Cli;
use hackgrade_core::bail_usage;
use hackgrade_core::baseline::SYNTHCC_LOG_FILES;
use hackgrade_core::error::{GradeError, Result};
use hackgrade_core::explore::{
    filter_agent, merchant_category_counts, spending_by_merchant_category, status_category_counts,
    table_info, CategorySpending, StatusCategory, TableInfo, ACCOUNT_STATUS, AMOUNT,
    MERCHANT_CATEGORY,
};
use hackgrade_core::table::Table;

/// Summary of one log file
#[derive(Debug, Serialize)]
pub struct LogSummary {
    #[serde(flatten)]
    pub info: TableInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_categories: Option<Vec<(String, usize)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spending: Option<Vec<CategorySpending>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_categories: Option<Vec<(StatusCategory, usize)>>,
}

/// Execute the inspect command
pub fn execute(cli: &Cli, args: &InspectArgs) -> Result<()> {
    if args.agent_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
        bail_usage!("--agent_id must not be empty");
    }
    if !args.bth_test_set.is_dir() {
        return Err(GradeError::input_missing(
            "test set directory",
            &args.bth_test_set,
        ));
    }

    let mut summaries = Vec::new();
    for file in SYNTHCC_LOG_FILES {
        let path = args.bth_test_set.join(file);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "log absent, skipping");
            continue;
        }
        summaries.push(summarize(&path, file, args.agent_id.as_deref())?);
    }

    crate::output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            Ok::<(), GradeError>(())
        },
        human => {
            if !cli.quiet {
                for summary in &summaries {
                    print_human(summary);
                }
            }
        }
    )
}

fn summarize(path: &Path, name: &str, agent_id: Option<&str>) -> Result<LogSummary> {
    let mut table = Table::read_csv(path, "test set log")?;
    if let Some(agent_id) = agent_id {
        table = filter_agent(&table, agent_id)?;
    }

    let merchant_categories = if table.has_column(MERCHANT_CATEGORY) {
        Some(merchant_category_counts(&table)?)
    } else {
        None
    };
    let spending = if table.has_column(MERCHANT_CATEGORY) && table.has_column(AMOUNT) {
        Some(spending_by_merchant_category(&table)?)
    } else {
        None
    };
    let status_categories = if table.has_column(ACCOUNT_STATUS) {
        Some(status_category_counts(&table, ACCOUNT_STATUS)?)
    } else {
        None
    };

    Ok(LogSummary {
        info: table_info(name, &table),
        merchant_categories,
        spending,
        status_categories,
    })
}

fn print_human(summary: &LogSummary) {
    let info = &summary.info;
    println!("{} ({} rows)", info.name, info.rows);
    println!("  columns: {}", info.columns.join(", "));
    for row in &info.head {
        println!("  {}", row.join(","));
    }
    if let Some(counts) = &summary.merchant_categories {
        println!("  merchant categories:");
        for (category, count) in counts {
            println!("    {}: {}", category, count);
        }
    }
    if let Some(spending) = &summary.spending {
        println!("  spending by merchant category:");
        for row in spending {
            println!(
                "    {}: total={} mean={} count={}",
                row.category, row.total, row.mean, row.count
            );
        }
    }
    if let Some(counts) = &summary.status_categories {
        println!("  account status:");
        for (category, count) in counts {
            println!("    {}: {}", category, count);
        }
    }
    println!();
}
