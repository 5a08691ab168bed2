//! Expense service
//!
//! Business logic for recording and querying expenses: validation on entry,
//! newest-first listing, and window filtering for the reports and the chart.

use chrono::{Datelike, NaiveDate};

use crate::error::{SpendviewError, SpendviewResult};
use crate::models::{Expense, ExpenseId, Money, ReportWindow};
use crate::store::ExpenseStore;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new service over a store
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store }
    }

    /// Record a new expense after validation
    pub fn add(
        &mut self,
        name: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
        description: Option<String>,
    ) -> SpendviewResult<ExpenseId> {
        let mut expense = Expense::new(name, amount, date, category);
        if let Some(description) = description {
            expense = expense.with_description(description);
        }

        expense
            .validate()
            .map_err(|e| SpendviewError::Validation(e.to_string()))?;

        let id = expense.id;
        self.store.add(expense);
        Ok(id)
    }

    /// Remove an expense by ID
    pub fn remove(&mut self, id: ExpenseId) -> SpendviewResult<Expense> {
        self.store.remove(id)
    }

    /// All expenses, newest first (date, then recording order)
    pub fn list(&self) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self.store.all().iter().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        expenses
    }

    /// Expenses falling inside `window`, unsorted
    pub fn in_window(&self, window: &ReportWindow) -> Vec<&Expense> {
        self.store
            .all()
            .iter()
            .filter(|e| window.contains(e.date))
            .collect()
    }

    /// Persist the store
    pub fn save(&self) -> SpendviewResult<()> {
        self.store.save()
    }

    /// Seed a demo data set spread over the given month
    ///
    /// Returns the number of expenses added.
    pub fn seed_sample_data(&mut self, year: i32, month: u32) -> SpendviewResult<usize> {
        let samples: &[(&str, i64, u32, &str)] = &[
            ("Weekly groceries", 8734, 2, "Groceries"),
            ("Coffee with team", 1250, 3, "Food & Dining"),
            ("Monthly rent", 120_000, 1, "Rent"),
            ("Electricity bill", 6420, 5, "Bills & Utilities"),
            ("Movie night", 3200, 7, "Entertainment"),
            ("Bus pass", 4500, 8, "Transportation"),
            ("Pharmacy", 2180, 11, "Healthcare"),
            ("Weekly groceries", 9156, 9, "Groceries"),
            ("Dinner out", 5640, 13, "Food & Dining"),
            ("New headphones", 7999, 15, "Shopping"),
            ("Online course", 4900, 17, "Education"),
            ("Weekend trip fuel", 5300, 20, "Travel"),
            ("Weekly groceries", 8012, 16, "Groceries"),
            ("Streaming subscription", 1499, 21, "Entertainment"),
            ("Lunch", 1675, 23, "Food & Dining"),
        ];

        let end = ReportWindow::monthly(year, month).end_date();
        let mut added = 0;
        for (name, cents, day, category) in samples {
            // Clamp into the month so February demos still work
            let day = (*day).min(end.day());
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(end);
            self.add(*name, Money::from_cents(*cents), date, *category, None)?;
            added += 1;
        }

        Ok(added)
    }
}
