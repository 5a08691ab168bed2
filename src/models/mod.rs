//! Core data models for spendview
//!
//! Data structures for the expense-tracking domain: expenses, money amounts,
//! and the date windows reports aggregate over.

pub mod expense;
pub mod ids;
pub mod money;
pub mod window;

pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::Money;
pub use window::ReportWindow;
