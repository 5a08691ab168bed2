//! CLI commands for reports and the donut chart

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::chart::{aggregate, layout, render, SvgSurface};
use crate::cli::expense::parse_window_arg;
use crate::config::Settings;
use crate::display::format_percentage;
use crate::error::{SpendviewError, SpendviewResult};
use crate::models::ReportWindow;
use crate::reports::{BreakdownReport, MonthlyOverview};
use crate::store::ExpenseStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Category breakdown for a window
    Breakdown {
        /// Window ("2025-06" or "2025-06-01..2025-06-15"), defaults to the
        /// current month
        #[arg(short, long)]
        window: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Headline numbers for a window
    Overview {
        /// Window, defaults to the current month
        #[arg(short, long)]
        window: Option<String>,
    },

    /// Render the category donut chart to an SVG file
    Chart {
        /// Output SVG path
        #[arg(short, long, default_value = "breakdown.svg")]
        output: PathBuf,

        /// Window, defaults to the current month
        #[arg(short, long)]
        window: Option<String>,

        /// Chart size in pixels (square)
        #[arg(long, default_value_t = 400)]
        size: u32,

        /// Donut hole as a fraction of the outer radius; 0 draws a pie
        #[arg(long, default_value_t = 0.55)]
        hole: f64,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendviewResult<()> {
    match cmd {
        ReportCommands::Breakdown { window, output } => {
            handle_breakdown(store, settings, window, output)
        }
        ReportCommands::Overview { window } => handle_overview(store, settings, window),
        ReportCommands::Chart {
            output,
            window,
            size,
            hole,
        } => handle_chart(store, settings, window, output, size, hole),
    }
}

fn resolve_window(window: Option<String>) -> SpendviewResult<ReportWindow> {
    Ok(parse_window_arg(window)?.unwrap_or_else(ReportWindow::current_month))
}

fn handle_breakdown(
    store: &mut ExpenseStore,
    settings: &Settings,
    window: Option<String>,
    output: Option<PathBuf>,
) -> SpendviewResult<()> {
    let window = resolve_window(window)?;
    let report = BreakdownReport::generate(store.all(), window, settings);

    if let Some(path) = output {
        let file = File::create(&path)
            .map_err(|e| SpendviewError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Exported breakdown to {}", path.display());
    } else {
        print!("{}", report.format_terminal(settings));
    }

    Ok(())
}

fn handle_overview(
    store: &mut ExpenseStore,
    settings: &Settings,
    window: Option<String>,
) -> SpendviewResult<()> {
    let window = resolve_window(window)?;
    let today = chrono::Local::now().date_naive();
    let overview = MonthlyOverview::generate(store.all(), window, settings, today);
    print!("{}", overview.format_terminal(settings));
    Ok(())
}

fn handle_chart(
    store: &mut ExpenseStore,
    settings: &Settings,
    window: Option<String>,
    output: PathBuf,
    size: u32,
    hole: f64,
) -> SpendviewResult<()> {
    if !(0.0..1.0).contains(&hole) {
        return Err(SpendviewError::Chart(format!(
            "Hole fraction must be in [0, 1): {}",
            hole
        )));
    }

    let window = resolve_window(window)?;
    let palette = settings.palette()?;

    let totals = aggregate(store.all(), &window);
    let slices = layout(&totals, &palette);

    let size = size as f64;
    let outer_radius = size / 2.0 * 0.92;
    let inner_radius = outer_radius * hole;

    let mut surface = SvgSurface::new(size, size);
    let legend = render(&mut surface, &slices, outer_radius, inner_radius);

    let mut file = File::create(&output)
        .map_err(|e| SpendviewError::Export(format!("Failed to create {}: {}", output.display(), e)))?;
    surface
        .write_to(&mut file)
        .map_err(|e| SpendviewError::Export(e.to_string()))?;

    if legend.is_empty() {
        println!("No expenses in {} - wrote an empty chart to {}", window, output.display());
        return Ok(());
    }

    println!("Category breakdown - {}", window);
    for entry in &legend.entries {
        println!(
            "  {} {} {:<22} {:>12}  ({})",
            color_swatch(entry.color),
            settings.icon_for(&entry.category),
            entry.category,
            entry.amount.format_with_symbol(&settings.currency_symbol),
            format_percentage(entry.percentage),
        );
    }
    println!(
        "Total: {}  →  {}",
        legend.total.format_with_symbol(&settings.currency_symbol),
        output.display()
    );

    Ok(())
}

/// Truecolor terminal swatch matching a slice color
fn color_swatch(color: crate::chart::Color) -> String {
    format!("\x1b[38;2;{};{};{}m●\x1b[0m", color.r, color.g, color.b)
}
