//! CLI command handlers
//!
//! Bridges clap argument parsing with the service and report layers.

pub mod data;
pub mod expense;
pub mod report;

pub use data::{handle_demo, handle_export, handle_import};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ReportCommands};
