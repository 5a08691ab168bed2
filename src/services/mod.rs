//! Business logic layer

pub mod expense;
pub mod import;

pub use expense::ExpenseService;
pub use import::{import_csv, import_csv_file, ImportSummary};
