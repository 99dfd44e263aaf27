use anyhow::{bail, Result};
use std::io::Write;
use std::str::FromStr;

use crate::application::LedgerView;
use crate::domain::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => bail!("Unknown export format '{}'. Valid formats: csv, json", other),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Write the view in the given format. Returns the number of entries written.
pub fn export_view<W: Write>(view: &LedgerView, format: ExportFormat, writer: W) -> Result<usize> {
    match format {
        ExportFormat::Csv => export_csv(view, writer),
        ExportFormat::Json => export_json(view, writer),
    }
}

/// Export the visible entries as CSV, amounts with two decimals.
pub fn export_csv<W: Write>(view: &LedgerView, writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["id", "description", "amount", "category"])?;

    for expense in &view.entries {
        csv_writer.write_record(&[
            expense.id.to_string(),
            expense.description.clone(),
            format_amount(expense.amount),
            expense.category.clone(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(view.entries.len())
}

/// Export the whole view (filter, entries, balance) as pretty JSON.
pub fn export_json<W: Write>(view: &LedgerView, mut writer: W) -> Result<usize> {
    serde_json::to_writer_pretty(&mut writer, view)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(view.entries.len())
}
