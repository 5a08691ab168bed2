//! Expense model
//!
//! A single recorded expense: what was bought, how much it cost, when, and
//! which category it belongs to. Categories are free-form labels; the set is
//! open and grows with whatever the user (or an upstream suggestion service)
//! supplies.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Short name of the expense (e.g. "Weekly groceries")
    pub name: String,

    /// Amount spent (non-negative)
    pub amount: Money,

    /// Date of the expense (day precision)
    pub date: NaiveDate,

    /// Category label, drawn from an open set
    pub category: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            date,
            category: category.into(),
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate the expense fields
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount.cents()));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.name, self.amount, self.category
        )
    }
}

/// Error type for expense validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    EmptyCategory,
    NegativeAmount(i64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
            Self::NegativeAmount(cents) => {
                write!(f, "Expense amount cannot be negative: {} cents", cents)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
