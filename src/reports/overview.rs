//! Monthly overview report
//!
//! Headline numbers for the dashboard: total spent in the window, expense
//! count, running daily average, top category, and, when a monthly budget
//! is configured, how much of it is used.

use chrono::NaiveDate;

use crate::chart::aggregate;
use crate::config::Settings;
use crate::display::{format_percentage, separator};
use crate::models::{Expense, Money, ReportWindow};

/// How far into the configured budget the window's spend has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    /// Below 70% of budget
    Ok,
    /// Between 70% and 90%
    Warn,
    /// Above 90%
    Critical,
}

impl UsageLevel {
    /// Classify a percent-used value
    pub fn from_percent(percent: f64) -> Self {
        if percent > 90.0 {
            Self::Critical
        } else if percent > 70.0 {
            Self::Warn
        } else {
            Self::Ok
        }
    }
}

/// Budget usage for one window
#[derive(Debug, Clone)]
pub struct BudgetUsage {
    /// The configured monthly budget
    pub budget: Money,
    /// Spend as a percentage of the budget
    pub percent_used: f64,
    /// Remaining budget, floored at zero
    pub remaining: Money,
    /// Threshold classification
    pub level: UsageLevel,
}

/// Headline dashboard numbers for one window
#[derive(Debug, Clone)]
pub struct MonthlyOverview {
    /// The aggregation window
    pub window: ReportWindow,
    /// Total spent in the window
    pub total_spent: Money,
    /// Number of expenses in the window
    pub expense_count: usize,
    /// Average spend per elapsed day
    pub daily_average: Money,
    /// Highest-spend category, if any spend exists
    pub top_category: Option<(String, Money)>,
    /// Budget usage, when a monthly budget is configured
    pub budget: Option<BudgetUsage>,
}

impl MonthlyOverview {
    /// Build the overview for `window` as of `today`
    ///
    /// `today` drives the daily average (spend divided by elapsed days) so
    /// that a half-finished month shows a running rate, not a diluted one.
    pub fn generate(
        expenses: &[Expense],
        window: ReportWindow,
        settings: &Settings,
        today: NaiveDate,
    ) -> Self {
        let totals = aggregate(expenses, &window);
        let total_spent = totals.total();
        let expense_count = expenses.iter().filter(|e| window.contains(e.date)).count();

        let days_elapsed = window.days_elapsed(today).max(1);
        let daily_average = total_spent.per_unit(days_elapsed);

        let top_category = totals
            .sorted()
            .first()
            .map(|(category, amount)| (category.to_string(), *amount));

        let budget = settings.monthly_budget().map(|budget| {
            let percent_used = total_spent.fraction_of(budget) * 100.0;
            let remaining = if budget > total_spent {
                budget - total_spent
            } else {
                Money::zero()
            };
            BudgetUsage {
                budget,
                percent_used,
                remaining,
                level: UsageLevel::from_percent(percent_used),
            }
        });

        Self {
            window,
            total_spent,
            expense_count,
            daily_average,
            top_category,
            budget,
        }
    }

    /// Format the overview for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = &settings.currency_symbol;
        let mut output = String::new();

        output.push_str(&format!("Overview for {}\n", self.window));
        output.push_str(&separator(48));
        output.push('\n');
        output.push_str(&format!(
            "Total spent:    {}\n",
            self.total_spent.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Expenses:       {}\n",
            self.expense_count
        ));
        output.push_str(&format!(
            "Daily average:  {}/day\n",
            self.daily_average.format_with_symbol(symbol)
        ));

        if let Some((category, amount)) = &self.top_category {
            output.push_str(&format!(
                "Top category:   {} {} ({})\n",
                settings.icon_for(category),
                category,
                amount.format_with_symbol(symbol)
            ));
        }

        if let Some(usage) = &self.budget {
            let marker = match usage.level {
                UsageLevel::Ok => "",
                UsageLevel::Warn => " ⚠",
                UsageLevel::Critical => " ‼",
            };
            output.push_str(&format!(
                "Budget:         {} used of {} ({} left){}\n",
                format_percentage(usage.percent_used),
                usage.budget.format_with_symbol(symbol),
                usage.remaining.format_with_symbol(symbol),
                marker,
            ));
        }

        output
    }
}
