//! Export functionality
//!
//! Writes the full expense set as JSON, YAML, or CSV for backup and for
//! feeding other tools.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{SpendviewError, SpendviewResult};
use crate::models::Expense;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl std::str::FromStr for ExportFormat {
    type Err = SpendviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(SpendviewError::Export(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }
}

/// Wrapper serialized by the JSON and YAML exports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Version of the application that wrote the export
    pub app_version: String,
    /// All expenses
    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    /// Snapshot the given expenses
    pub fn new(expenses: &[Expense]) -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: expenses.to_vec(),
        }
    }
}

/// Export expenses in the requested format
pub fn export_expenses<W: Write>(
    expenses: &[Expense],
    format: ExportFormat,
    writer: &mut W,
) -> SpendviewResult<()> {
    match format {
        ExportFormat::Json => export_json(expenses, writer),
        ExportFormat::Yaml => export_yaml(expenses, writer),
        ExportFormat::Csv => export_csv(expenses, writer),
    }
}

/// Export expenses as pretty-printed JSON
pub fn export_json<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendviewResult<()> {
    let export = ExpenseExport::new(expenses);
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| SpendviewError::Export(e.to_string()))
}

/// Export expenses as YAML with a header comment
pub fn export_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendviewResult<()> {
    writeln!(writer, "# spendview expense export")
        .map_err(|e| SpendviewError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| SpendviewError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendviewError::Export(e.to_string()))?;

    let export = ExpenseExport::new(expenses);
    serde_yaml::to_writer(writer, &export).map_err(|e| SpendviewError::Export(e.to_string()))
}

/// Export expenses as CSV in the same column layout the importer reads
pub fn export_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendviewResult<()> {
    writeln!(writer, "name,amount,date,category,description")
        .map_err(|e| SpendviewError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{:.2},{},{},{}",
            expense.name,
            expense.amount.cents() as f64 / 100.0,
            expense.date,
            expense.category,
            expense.description.as_deref().unwrap_or(""),
        )
        .map_err(|e| SpendviewError::Export(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Vec<Expense> {
        let date = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        vec![
            Expense::new("Lunch", Money::from_cents(1250), date, "Food & Dining")
                .with_description("Team lunch"),
            Expense::new("Bus", Money::from_cents(275), date, "Transportation"),
        ]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("YAML".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let expenses = sample();
        let mut buf = Vec::new();
        export_json(&expenses, &mut buf).unwrap();

        let back: ExpenseExport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back.expenses.len(), 2);
        assert_eq!(back.expenses[0].name, "Lunch");
    }

    #[test]
    fn test_yaml_export_has_header() {
        let expenses = sample();
        let mut buf = Vec::new();
        export_yaml(&expenses, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("# spendview expense export"));
        assert!(text.contains("Lunch"));
    }

    #[test]
    fn test_csv_export() {
        let expenses = sample();
        let mut buf = Vec::new();
        export_csv(&expenses, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("name,amount,date,category,description"));
        assert!(text.contains("Lunch,12.50,2025-06-03,Food & Dining,Team lunch"));
        assert!(text.contains("Bus,2.75,2025-06-03,Transportation,"));
    }
}
