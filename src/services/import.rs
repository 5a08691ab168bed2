//! CSV import service
//!
//! Imports expenses from CSV files with a `name,amount,date,category` header
//! (description optional as a fifth column). Bad rows are collected and
//! reported rather than aborting the whole batch.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::{SpendviewError, SpendviewResult};
use crate::models::Money;
use crate::services::ExpenseService;

/// Outcome of one CSV import run
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Number of expenses successfully imported
    pub imported: usize,
    /// Rows that were skipped, with 1-based line number and reason
    pub skipped: Vec<(usize, String)>,
}

impl ImportSummary {
    /// True when every row imported cleanly
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Import expenses from a CSV file on disk
pub fn import_csv_file(
    service: &mut ExpenseService<'_>,
    path: &Path,
    date_format: &str,
) -> SpendviewResult<ImportSummary> {
    let file = std::fs::File::open(path)
        .map_err(|e| SpendviewError::Import(format!("Failed to open {}: {}", path.display(), e)))?;
    import_csv(service, file, date_format)
}

/// Import expenses from any CSV reader
///
/// Expected columns: `name,amount,date,category[,description]`, with a
/// header row. Amounts accept the same forms as [`Money::parse`]; dates are
/// parsed with `date_format` (strftime).
pub fn import_csv<R: Read>(
    service: &mut ExpenseService<'_>,
    reader: R,
    date_format: &str,
) -> SpendviewResult<ImportSummary> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut summary = ImportSummary::default();

    for (index, record) in csv_reader.records().enumerate() {
        // Header occupies line 1
        let line = index + 2;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                summary.skipped.push((line, format!("Unreadable row: {}", e)));
                continue;
            }
        };

        if record.len() < 4 {
            summary
                .skipped
                .push((line, format!("Expected at least 4 columns, got {}", record.len())));
            continue;
        }

        let name = record[0].trim();
        let amount = match Money::parse(&record[1]) {
            Ok(amount) => amount,
            Err(e) => {
                summary.skipped.push((line, e.to_string()));
                continue;
            }
        };
        let date = match NaiveDate::parse_from_str(record[2].trim(), date_format) {
            Ok(date) => date,
            Err(_) => {
                summary
                    .skipped
                    .push((line, format!("Invalid date: {}", &record[2])));
                continue;
            }
        };
        let category = record[3].trim();
        let description = record
            .get(4)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        match service.add(name, amount, date, category, description) {
            Ok(_) => summary.imported += 1,
            Err(e) => summary.skipped.push((line, e.to_string())),
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ExpenseStore;
    use tempfile::TempDir;

    fn with_service<F: FnOnce(&mut ExpenseService<'_>) -> ImportSummary>(f: F) -> ImportSummary {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::at_path(temp_dir.path().join("expenses.json"));
        let mut service = ExpenseService::new(&mut store);
        f(&mut service)
    }

    #[test]
    fn test_import_clean_file() {
        let csv = "name,amount,date,category,description\n\
                   Lunch,12.50,2025-06-03,Food & Dining,Team lunch\n\
                   Bus,2.75,2025-06-04,Transportation,\n";

        let summary = with_service(|service| {
            let summary = import_csv(service, csv.as_bytes(), "%Y-%m-%d").unwrap();
            assert_eq!(service.list().len(), 2);
            let lunch = service
                .list()
                .into_iter()
                .find(|e| e.name == "Lunch")
                .unwrap();
            assert_eq!(lunch.amount, Money::from_cents(1250));
            assert_eq!(lunch.description.as_deref(), Some("Team lunch"));
            summary
        });

        assert_eq!(summary.imported, 2);
        assert!(summary.is_clean());
    }

    #[test]
    fn test_bad_rows_are_skipped_not_fatal() {
        let csv = "name,amount,date,category\n\
                   Lunch,12.50,2025-06-03,Food\n\
                   Broken,notmoney,2025-06-04,Food\n\
                   Also broken,5.00,junedate,Food\n\
                   Dinner,20.00,2025-06-05,Food\n";

        let summary = with_service(|service| {
            let summary = import_csv(service, csv.as_bytes(), "%Y-%m-%d").unwrap();
            assert_eq!(service.list().len(), 2);
            summary
        });

        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped.len(), 2);
        // Line numbers account for the header
        assert_eq!(summary.skipped[0].0, 3);
        assert_eq!(summary.skipped[1].0, 4);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let csv = "name,amount,date,category\nOnly two,columns\n";

        let summary = with_service(|service| import_csv(service, csv.as_bytes(), "%Y-%m-%d").unwrap());

        assert_eq!(summary.imported, 0);
        assert_eq!(summary.skipped.len(), 1);
    }

    #[test]
    fn test_validation_failures_are_reported_per_row() {
        // Negative amount passes Money::parse but fails expense validation
        let csv = "name,amount,date,category\nRefund,-5.00,2025-06-03,Food\n";

        let summary = with_service(|service| import_csv(service, csv.as_bytes(), "%Y-%m-%d").unwrap());

        assert_eq!(summary.imported, 0);
        assert_eq!(summary.skipped.len(), 1);
        assert!(summary.skipped[0].1.contains("negative"));
    }

    #[test]
    fn test_custom_date_format() {
        let csv = "name,amount,date,category\nLunch,12.50,06/03/2025,Food\n";

        let summary = with_service(|service| import_csv(service, csv.as_bytes(), "%m/%d/%Y").unwrap());

        assert_eq!(summary.imported, 1);
    }
}
