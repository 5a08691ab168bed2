//! spendview - Terminal expense dashboard with category breakdown charts
//!
//! This library provides the core functionality for the spendview expense
//! tracker: recording expenses, aggregating them per category over a date
//! window, and rendering the breakdown as a donut chart or textual report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, report windows)
//! - `chart`: The breakdown pipeline (aggregate, layout, render)
//! - `store`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Overview and breakdown reports
//! - `display`: Terminal formatting helpers
//! - `export`: JSON/YAML/CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use spendview::chart::{aggregate, layout, render, Palette, SvgSurface};
//! use spendview::models::{Expense, Money, ReportWindow};
//! use chrono::NaiveDate;
//!
//! let expenses = vec![Expense::new(
//!     "Lunch",
//!     Money::from_cents(1250),
//!     NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
//!     "Food & Dining",
//! )];
//!
//! let totals = aggregate(&expenses, &ReportWindow::monthly(2025, 6));
//! let slices = layout(&totals, &Palette::default());
//!
//! let mut surface = SvgSurface::new(400.0, 400.0);
//! let legend = render(&mut surface, &slices, 180.0, 100.0);
//! assert_eq!(legend.entries.len(), 1);
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod store;

pub use error::{SpendviewError, SpendviewResult};
