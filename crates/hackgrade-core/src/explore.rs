//! Summaries over the SynthCC transaction logs
//!
//! Quick, text-only views of the test-set logs for participants exploring
//! the data before modelling.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::error::{GradeError, Result, ValueSample};
use crate::table::Table;
use crate::task::AGENT_ID;

/// Column holding a transaction's merchant category
pub const MERCHANT_CATEGORY: &str = "merchant_category";

/// Column holding a transaction's amount
pub const AMOUNT: &str = "amount";

/// Column holding an account's status in the account state log
pub const ACCOUNT_STATUS: &str = "status";

/// Rows shown in [`TableInfo::head`]
const HEAD_ROWS: usize = 5;

/// Schema summary of a loaded table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableInfo {
    pub name: String,
    pub rows: usize,
    pub columns: Vec<String>,
    pub head: Vec<Vec<String>>,
}

pub fn table_info(name: &str, table: &Table) -> TableInfo {
    TableInfo {
        name: name.to_string(),
        rows: table.len(),
        columns: table.headers().to_vec(),
        head: table.rows().iter().take(HEAD_ROWS).cloned().collect(),
    }
}

/// Occurrences of each distinct value, most frequent first, ties by value
pub fn value_counts(values: &[&str]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Transactions per merchant category
pub fn merchant_category_counts(transactions: &Table) -> Result<Vec<(String, usize)>> {
    Ok(value_counts(&transactions.column(MERCHANT_CATEGORY)?))
}

/// Spending in one merchant category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category: String,
    pub total: f64,
    pub mean: f64,
    pub count: usize,
}

/// Total, mean and count of `amount` per merchant category, sorted by category
pub fn spending_by_merchant_category(transactions: &Table) -> Result<Vec<CategorySpending>> {
    let categories = transactions.column(MERCHANT_CATEGORY)?;
    let amounts = transactions.column(AMOUNT)?;

    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for (&category, &amount) in categories.iter().zip(&amounts) {
        let value = amount
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| non_numeric_amount(transactions, &amounts))?;
        let entry = sums.entry(category).or_default();
        entry.0 += value;
        entry.1 += 1;
    }

    Ok(sums
        .into_iter()
        .map(|(category, (total, count))| CategorySpending {
            category: category.to_string(),
            total,
            mean: total / count as f64,
            count,
        })
        .collect())
}

fn non_numeric_amount(transactions: &Table, amounts: &[&str]) -> GradeError {
    let sample = |cells: Vec<&str>| ValueSample(cells.into_iter().map(str::to_string).collect());
    GradeError::NonNumeric {
        column: AMOUNT.to_string(),
        path: transactions.path().to_path_buf(),
        head: sample(amounts.iter().take(HEAD_ROWS).copied().collect()),
        offending: sample(
            amounts
                .iter()
                .filter(|a| !a.parse::<f64>().is_ok_and(f64::is_finite))
                .take(HEAD_ROWS)
                .copied()
                .collect(),
        ),
    }
}

/// Rows belonging to a single agent
pub fn filter_agent(table: &Table, agent_id: &str) -> Result<Table> {
    table.filter_eq(AGENT_ID, agent_id)
}

/// Coarse account standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StatusCategory {
    Good,
    Delinquent,
    ChargeOff,
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCategory::Good => write!(f, "Good"),
            StatusCategory::Delinquent => write!(f, "Delinquent"),
            StatusCategory::ChargeOff => write!(f, "Charge Off"),
        }
    }
}

/// `charge off` and `delinquent` map to their category; anything else is good
pub fn categorize_status(status: &str) -> StatusCategory {
    match status {
        "charge off" => StatusCategory::ChargeOff,
        "delinquent" => StatusCategory::Delinquent,
        _ => StatusCategory::Good,
    }
}

/// Rows per status category of `column`, in category order
pub fn status_category_counts(
    table: &Table,
    column: &str,
) -> Result<Vec<(StatusCategory, usize)>> {
    let mut counts: HashMap<StatusCategory, usize> = HashMap::new();
    for status in table.column(column)? {
        *counts.entry(categorize_status(status)).or_default() += 1;
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort();
    Ok(counts)
}
