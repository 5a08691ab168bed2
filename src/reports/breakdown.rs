//! Category breakdown report
//!
//! Textual counterpart to the donut chart: per-category spend over a window,
//! sorted by descending amount, with share percentages against the window
//! total and a proportional bar for terminal display.

use std::io::Write;

use crate::chart::aggregate;
use crate::config::Settings;
use crate::display::{format_bar, format_percentage, separator, truncate};
use crate::error::SpendviewResult;
use crate::models::{Expense, Money, ReportWindow};

/// One category row of the breakdown
#[derive(Debug, Clone)]
pub struct BreakdownRow {
    /// Category label
    pub category: String,
    /// Display icon from settings
    pub icon: String,
    /// Accumulated spend in the window
    pub amount: Money,
    /// Share of the window total, one decimal place
    pub percentage: f64,
}

/// Category breakdown over one window
#[derive(Debug, Clone)]
pub struct BreakdownReport {
    /// The aggregation window
    pub window: ReportWindow,
    /// Rows in descending-amount order
    pub rows: Vec<BreakdownRow>,
    /// Window total across all categories
    pub total: Money,
}

impl BreakdownReport {
    /// Build the breakdown for `window`
    pub fn generate(expenses: &[Expense], window: ReportWindow, settings: &Settings) -> Self {
        let totals = aggregate(expenses, &window);
        let total = totals.total();

        let rows = totals
            .sorted()
            .into_iter()
            .map(|(category, amount)| BreakdownRow {
                category: category.to_string(),
                icon: settings.icon_for(category).to_string(),
                amount,
                percentage: amount.percent_of(total),
            })
            .collect();

        Self { window, rows, total }
    }

    /// True when the window had no spend
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!("Category Breakdown for {}\n", self.window));
        output.push_str(&separator(64));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses in this window yet.\n");
            output.push_str("Add expenses to see the breakdown.\n");
            return output;
        }

        let max_cents = self.rows.first().map(|r| r.amount.cents()).unwrap_or(0);

        for row in &self.rows {
            output.push_str(&format!(
                "{} {:<22} {:>12} {:>7}  {}\n",
                row.icon,
                truncate(&row.category, 22),
                row.amount.format_with_symbol(&settings.currency_symbol),
                format_percentage(row.percentage),
                format_bar(row.amount.cents() as f64, max_cents as f64, 16),
            ));
        }

        output.push_str(&separator(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<25} {:>12}\n",
            "TOTAL",
            self.total.format_with_symbol(&settings.currency_symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendviewResult<()> {
        writeln!(writer, "Window,Category,Amount,Percentage")
            .map_err(|e| crate::error::SpendviewError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{:.2},{:.1}",
                self.window,
                row.category,
                row.amount.cents() as f64 / 100.0,
                row.percentage
            )
            .map_err(|e| crate::error::SpendviewError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},TOTAL,{:.2},100.0",
            self.window,
            self.total.cents() as f64 / 100.0
        )
        .map_err(|e| crate::error::SpendviewError::Export(e.to_string()))?;

        Ok(())
    }
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
    fn test_generate_sorted_with_percentages() {
        let expenses = vec![
            expense("Groceries", 10000, date(2025, 6, 2), "Groceries"),
            expense("Lunch", 5000, date(2025, 6, 10), "Food & Dining"),
            expense("Flight", 15000, date(2025, 6, 20), "Travel"),
        ];
        let settings = Settings::default();
        let report =
            BreakdownReport::generate(&expenses, ReportWindow::monthly(2025, 6), &settings);

        assert_eq!(report.total, Money::from_cents(30000));
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].category, "Travel");
        assert_eq!(report.rows[0].percentage, 50.0);
        assert_eq!(report.rows[0].icon, "✈️");
        assert_eq!(report.rows[1].category, "Groceries");
        assert_eq!(report.rows[2].category, "Food & Dining");
    }

    #[test]
    fn test_empty_window() {
        let settings = Settings::default();
        let report = BreakdownReport::generate(&[], ReportWindow::monthly(2025, 6), &settings);

        assert!(report.is_empty());
        assert_eq!(report.total, Money::zero());

        let text = report.format_terminal(&settings);
        assert!(text.contains("No expenses in this window yet."));
    }

    #[test]
    fn test_format_terminal() {
        let expenses = vec![
            expense("Flight", 15000, date(2025, 6, 20), "Travel"),
            expense("Lunch", 15000, date(2025, 6, 10), "Food & Dining"),
        ];
        let settings = Settings::default();
        let report =
            BreakdownReport::generate(&expenses, ReportWindow::monthly(2025, 6), &settings);
        let text = report.format_terminal(&settings);

        assert!(text.contains("Category Breakdown for 2025-06"));
        assert!(text.contains("$150.00"));
        assert!(text.contains("50.0%"));
        assert!(text.contains("TOTAL"));
        assert!(text.contains("$300.00"));
    }

    #[test]
    fn test_export_csv() {
        let expenses = vec![
            expense("Flight", 15000, date(2025, 6, 20), "Travel"),
            expense("Lunch", 5000, date(2025, 6, 10), "Food & Dining"),
        ];
        let settings = Settings::default();
        let report =
            BreakdownReport::generate(&expenses, ReportWindow::monthly(2025, 6), &settings);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("Window,Category,Amount,Percentage"));
        assert!(csv.contains("2025-06,Travel,150.00,75.0"));
        assert!(csv.contains("2025-06,TOTAL,200.00,100.0"));
    }

    #[test]
    fn test_unknown_category_gets_fallback_icon() {
        let expenses = vec![expense("???", 100, date(2025, 6, 1), "Mystery")];
        let settings = Settings::default();
        let report =
            BreakdownReport::generate(&expenses, ReportWindow::monthly(2025, 6), &settings);
        assert_eq!(report.rows[0].icon, "📦");
    }
}
