use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use spendview::cli::{
    handle_demo, handle_expense_command, handle_export, handle_import, handle_report_command,
    ExpenseCommands, ReportCommands,
};
use spendview::config::{paths::SpendviewPaths, settings::Settings};
use spendview::store::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendview",
    version,
    about = "Terminal expense dashboard with category breakdown charts",
    long_about = "spendview is a terminal expense tracker. Record expenses, \
                  break them down by category over a month or custom window, \
                  and render the breakdown as a donut chart or textual report."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Reports and charts
    #[command(subcommand)]
    Report(ReportCommands),

    /// Import expenses from a CSV file
    Import {
        /// CSV file with name,amount,date,category[,description] columns
        file: PathBuf,
    },

    /// Export all expenses
    Export {
        /// Output format: json, yaml, or csv
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Seed sample expenses for the current month
    Demo,

    /// Initialize configuration and data directories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = SpendviewPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Expense(cmd) => {
            let mut store = ExpenseStore::open(&paths)?;
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            let mut store = ExpenseStore::open(&paths)?;
            handle_report_command(&mut store, &settings, cmd)?;
        }
        Commands::Import { file } => {
            let mut store = ExpenseStore::open(&paths)?;
            handle_import(&mut store, &settings, file)?;
        }
        Commands::Export { format, output } => {
            let mut store = ExpenseStore::open(&paths)?;
            handle_export(&mut store, format, output)?;
        }
        Commands::Demo => {
            let mut store = ExpenseStore::open(&paths)?;
            handle_demo(&mut store)?;
        }
        Commands::Init => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized spendview in {}", paths.base_dir().display());
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Currency:       {}", settings.currency_symbol);
            println!("Date format:    {}", settings.date_format);
            match settings.monthly_budget() {
                Some(budget) => println!("Monthly budget: {}", budget),
                None => println!("Monthly budget: not set"),
            }
            println!(
                "Palette:        {}",
                settings
                    .palette
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
    }

    Ok(())
}
