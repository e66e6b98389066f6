//! CSV export of the expense list.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

use crate::models::{Expense, DATE_FORMAT};

const HEADER: [&str; 4] = ["Date", "Category", "Amount", "Description"];

/// Every field quoted, embedded quotes doubled. Rows follow list order.
pub(crate) fn to_csv(expenses: &[Expense]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());
    wtr.write_record(HEADER)?;
    for expense in expenses {
        let amount = expense.amount.normalize().to_string();
        wtr.write_record([
            expense.date.as_str(),
            expense.category.as_str(),
            amount.as_str(),
            expense.description.as_str(),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output was not UTF-8")
}

pub(crate) fn file_name(today: NaiveDate) -> String {
    format!("lekha-jokha-expenses-{}.csv", today.format(DATE_FORMAT))
}

/// Write the CSV to `path`, returning the number of data rows.
pub(crate) fn write_file(expenses: &[Expense], path: &Path) -> Result<usize> {
    let body = to_csv(expenses)?;
    std::fs::write(path, body)
        .with_context(|| format!("Failed to write export: {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = expenses.len(), "exported expenses");
    Ok(expenses.len())
}
