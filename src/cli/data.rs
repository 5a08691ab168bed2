//! CLI commands for data import, export, and demo seeding

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::Datelike;

use crate::config::Settings;
use crate::error::{SpendviewError, SpendviewResult};
use crate::export::{export_expenses, ExportFormat};
use crate::services::{import_csv_file, ExpenseService};
use crate::store::ExpenseStore;

/// Import expenses from a CSV file
pub fn handle_import(
    store: &mut ExpenseStore,
    settings: &Settings,
    file: PathBuf,
) -> SpendviewResult<()> {
    let mut service = ExpenseService::new(store);
    let summary = import_csv_file(&mut service, &file, &settings.date_format)?;
    service.save()?;

    println!("Imported {} expenses from {}", summary.imported, file.display());
    for (line, reason) in &summary.skipped {
        eprintln!("  Skipped line {}: {}", line, reason);
    }

    Ok(())
}

/// Export all expenses in the requested format
pub fn handle_export(
    store: &mut ExpenseStore,
    format: String,
    output: Option<PathBuf>,
) -> SpendviewResult<()> {
    let format: ExportFormat = format.parse()?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                SpendviewError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_expenses(store.all(), format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| SpendviewError::Export(e.to_string()))?;
            println!("Exported {} expenses to {}", store.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export_expenses(store.all(), format, &mut writer)?;
        }
    }

    Ok(())
}

/// Seed the store with a demo month of expenses
pub fn handle_demo(store: &mut ExpenseStore) -> SpendviewResult<()> {
    let today = chrono::Local::now().date_naive();
    let mut service = ExpenseService::new(store);
    let added = service.seed_sample_data(today.year(), today.month())?;
    service.save()?;

    println!("Seeded {} sample expenses for {:04}-{:02}.", added, today.year(), today.month());
    println!("Try `spendview report breakdown` or `spendview report chart`.");
    Ok(())
}
