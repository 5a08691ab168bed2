//! CLI commands for expense management

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::error::{SpendviewError, SpendviewResult};
use crate::models::{ExpenseId, Money, ReportWindow};
use crate::services::ExpenseService;
use crate::store::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Short name of the expense
        name: String,

        /// Amount, e.g. "12.50" or "$12.50"
        amount: String,

        /// Category label
        #[arg(short, long)]
        category: String,

        /// Expense date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// Restrict to a window ("2025-06" or "2025-06-01..2025-06-15")
        #[arg(short, long)]
        window: Option<String>,

        /// Show at most N expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Remove an expense by ID
    Remove {
        /// Expense ID (full UUID or "exp-" short form from `list`)
        id: String,
    },
}

/// Handle expense commands
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SpendviewResult<()> {
    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
            description,
        } => handle_add(store, settings, name, amount, category, date, description),
        ExpenseCommands::List { window, limit } => handle_list(store, settings, window, limit),
        ExpenseCommands::Remove { id } => handle_remove(store, id),
    }
}

fn handle_add(
    store: &mut ExpenseStore,
    settings: &Settings,
    name: String,
    amount: String,
    category: String,
    date: Option<String>,
    description: Option<String>,
) -> SpendviewResult<()> {
    let amount =
        Money::parse(&amount).map_err(|e| SpendviewError::Validation(e.to_string()))?;

    let date = match date {
        Some(s) => NaiveDate::parse_from_str(&s, &settings.date_format)
            .map_err(|_| SpendviewError::Validation(format!("Invalid date: {}", s)))?,
        None => chrono::Local::now().date_naive(),
    };

    let mut service = ExpenseService::new(store);
    let id = service.add(name, amount, date, category, description)?;
    service.save()?;

    println!("Recorded expense {}", id);
    Ok(())
}

fn handle_list(
    store: &mut ExpenseStore,
    settings: &Settings,
    window: Option<String>,
    limit: Option<usize>,
) -> SpendviewResult<()> {
    let window = parse_window_arg(window)?;
    let service = ExpenseService::new(store);

    let mut expenses = service.list();
    if let Some(window) = &window {
        expenses.retain(|e| window.contains(e.date));
    }
    if let Some(limit) = limit {
        expenses.truncate(limit);
    }

    if expenses.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    for expense in expenses {
        let description = expense
            .description
            .as_deref()
            .map(|d| format!(" - {}", d))
            .unwrap_or_default();
        println!(
            "{}  {}  {} {:<22} {:>12}{}",
            expense.id,
            expense.date,
            settings.icon_for(&expense.category),
            expense.category,
            expense.amount.format_with_symbol(&settings.currency_symbol),
            description,
        );
    }

    Ok(())
}

fn handle_remove(store: &mut ExpenseStore, id: String) -> SpendviewResult<()> {
    let id = resolve_expense_id(store, &id)?;

    let removed = store.remove(id)?;
    store.save()?;

    println!("Removed {} ({})", removed.name, removed.amount);
    Ok(())
}

/// Resolve a full UUID or the "exp-" short form shown by `list`
fn resolve_expense_id(store: &ExpenseStore, arg: &str) -> SpendviewResult<ExpenseId> {
    if let Ok(id) = arg.parse::<ExpenseId>() {
        return Ok(id);
    }

    let matches: Vec<ExpenseId> = store
        .all()
        .iter()
        .filter(|e| e.id.to_string().starts_with(arg))
        .map(|e| e.id)
        .collect();

    match matches.as_slice() {
        [single] => Ok(*single),
        [] => Err(SpendviewError::expense_not_found(arg)),
        _ => Err(SpendviewError::Validation(format!(
            "Ambiguous expense ID: {}",
            arg
        ))),
    }
}

/// Parse an optional window argument
pub(crate) fn parse_window_arg(window: Option<String>) -> SpendviewResult<Option<ReportWindow>> {
    window
        .map(|s| {
            ReportWindow::parse(&s).map_err(|e| SpendviewError::Validation(e.to_string()))
        })
        .transpose()
}
