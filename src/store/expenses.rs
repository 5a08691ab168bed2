//! Expense store
//!
//! JSON-file-backed collection of expenses. This is the concrete
//! transaction-fetching collaborator the chart pipeline reads from; the
//! pipeline itself never touches the store.

use std::path::PathBuf;

use crate::config::SpendviewPaths;
use crate::error::{SpendviewError, SpendviewResult};
use crate::models::{Expense, ExpenseId};
use crate::store::file_io::{load_json, save_json_atomic};

/// In-memory expense collection with file persistence
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Open the store, loading expenses from disk if the file exists
    pub fn open(paths: &SpendviewPaths) -> SpendviewResult<Self> {
        let path = paths.expenses_file();
        let expenses = load_json(&path)?;
        Ok(Self { path, expenses })
    }

    /// Create an empty store at an explicit path (useful for testing)
    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
        }
    }

    /// All expenses, in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// True when the store holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Append an expense
    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove an expense by ID
    pub fn remove(&mut self, id: ExpenseId) -> SpendviewResult<Expense> {
        match self.expenses.iter().position(|e| e.id == id) {
            Some(index) => Ok(self.expenses.remove(index)),
            None => Err(SpendviewError::expense_not_found(id.to_string())),
        }
    }

    /// Find an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Persist the current contents to disk atomically
    pub fn save(&self) -> SpendviewResult<()> {
        save_json_atomic(&self.path, &self.expenses)
    }
}
