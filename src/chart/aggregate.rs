//! Per-category aggregation of expenses over a date window
//!
//! Pure data transform: a list of expenses in, a category → total mapping
//! out. No side effects, never fails; an empty window is an empty mapping.

use std::collections::HashMap;

use crate::models::{Expense, Money, ReportWindow};

/// Accumulated spend per category label
///
/// Categories with no in-window expenses are simply absent; there are no
/// zero entries. Insertion order is irrelevant; consumers display in
/// descending-amount order via [`CategoryTotals::sorted`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals(HashMap<String, Money>);

impl CategoryTotals {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to a category's running total
    pub fn add(&mut self, category: impl Into<String>, amount: Money) {
        *self.0.entry(category.into()).or_insert_with(Money::zero) += amount;
    }

    /// Total for one category, if present
    pub fn get(&self, category: &str) -> Option<Money> {
        self.0.get(category).copied()
    }

    /// Number of categories present
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no category has any spend
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Grand total across all categories
    pub fn total(&self) -> Money {
        self.0.values().copied().sum()
    }

    /// Categories ordered by descending amount, ties by label ascending
    ///
    /// The ordering is total: equal amounts fall back to the label, so the
    /// result is deterministic for any input and chart layouts are
    /// reproducible across calls.
    pub fn sorted(&self) -> Vec<(&str, Money)> {
        let mut entries: Vec<(&str, Money)> = self
            .0
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl FromIterator<(String, Money)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (String, Money)>>(iter: I) -> Self {
        let mut totals = Self::new();
        for (category, amount) in iter {
            totals.add(category, amount);
        }
        totals
    }
}

/// Aggregate expenses into per-category totals over `window`
///
/// Filters to expenses whose date falls inside the window (both ends
/// inclusive) and sums amounts per category with exact cent addition.
pub fn aggregate(expenses: &[Expense], window: &ReportWindow) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for expense in expenses {
        if window.contains(expense.date) {
            totals.add(expense.category.clone(), expense.amount);
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(name: &str, cents: i64, d: NaiveDate, category: &str) -> Expense {
        Expense::new(name, Money::from_cents(cents), d, category)
    }

    #[test]
    fn test_empty_input_yields_empty_totals() {
        let totals = aggregate(&[], &ReportWindow::monthly(2025, 6));
        assert!(totals.is_empty());
        assert_eq!(totals.total(), Money::zero());
    }

    #[test]
    fn test_sums_per_category() {
        let june = ReportWindow::monthly(2025, 6);
        let expenses = vec![
            expense("Groceries", 10000, date(2025, 6, 2), "Food"),
            expense("Lunch", 5000, date(2025, 6, 10), "Food"),
            expense("Flight", 15000, date(2025, 6, 20), "Travel"),
        ];

        let totals = aggregate(&expenses, &june);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("Food"), Some(Money::from_cents(15000)));
        assert_eq!(totals.get("Travel"), Some(Money::from_cents(15000)));
        assert_eq!(totals.total(), Money::from_cents(30000));
    }

    #[test]
    fn test_window_filter_is_inclusive() {
        let june = ReportWindow::monthly(2025, 6);
        let expenses = vec![
            expense("First day", 100, date(2025, 6, 1), "Food"),
            expense("Last day", 200, date(2025, 6, 30), "Food"),
            expense("Too early", 400, date(2025, 5, 31), "Food"),
            expense("Too late", 800, date(2025, 7, 1), "Food"),
        ];

        let totals = aggregate(&expenses, &june);
        assert_eq!(totals.get("Food"), Some(Money::from_cents(300)));
    }

    #[test]
    fn test_order_independent() {
        let june = ReportWindow::monthly(2025, 6);
        let mut expenses = vec![
            expense("a", 100, date(2025, 6, 1), "Food"),
            expense("b", 250, date(2025, 6, 2), "Travel"),
            expense("c", 75, date(2025, 6, 3), "Food"),
            expense("d", 300, date(2025, 6, 4), "Bills"),
        ];

        let forward = aggregate(&expenses, &june);
        expenses.reverse();
        let backward = aggregate(&expenses, &june);

        assert_eq!(forward, backward);
        assert_eq!(forward.sorted(), backward.sorted());
    }

    #[test]
    fn test_no_zero_entries_for_absent_categories() {
        let june = ReportWindow::monthly(2025, 6);
        let expenses = vec![expense("Out of range", 500, date(2025, 1, 1), "Food")];

        let totals = aggregate(&expenses, &june);
        assert!(totals.is_empty());
        assert_eq!(totals.get("Food"), None);
    }

    #[test]
    fn test_sorted_descending_with_label_tiebreak() {
        let mut totals = CategoryTotals::new();
        totals.add("Travel", Money::from_cents(1500));
        totals.add("Bills", Money::from_cents(2000));
        totals.add("Food", Money::from_cents(1500));

        let sorted = totals.sorted();
        assert_eq!(sorted[0], ("Bills", Money::from_cents(2000)));
        // Equal amounts: label ascending
        assert_eq!(sorted[1], ("Food", Money::from_cents(1500)));
        assert_eq!(sorted[2], ("Travel", Money::from_cents(1500)));
    }
}
