//! Report window representation
//!
//! The inclusive date range over which expenses are aggregated. The common
//! case is a calendar month; arbitrary ranges are supported for ad hoc
//! reports.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive date range for aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ReportWindow {
    /// A calendar month (e.g. "2025-06")
    Monthly { year: i32, month: u32 },

    /// Custom date range, both ends inclusive
    Custom { start: NaiveDate, end: NaiveDate },
}

impl ReportWindow {
    /// Create a monthly window
    pub fn monthly(year: i32, month: u32) -> Self {
        Self::Monthly { year, month }
    }

    /// Create a custom window
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Custom { start, end }
    }

    /// The calendar month containing `today`
    pub fn month_of(today: NaiveDate) -> Self {
        Self::Monthly {
            year: today.year(),
            month: today.month(),
        }
    }

    /// The current calendar month, from the local clock
    pub fn current_month() -> Self {
        Self::month_of(chrono::Local::now().date_naive())
    }

    /// First day of the window
    pub fn start_date(&self) -> NaiveDate {
        match self {
            Self::Monthly { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1)
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(*year, 1, 1).unwrap()),
            Self::Custom { start, .. } => *start,
        }
    }

    /// Last day of the window (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        match self {
            Self::Monthly { year, month } => {
                let next_month = if *month == 12 {
                    NaiveDate::from_ymd_opt(*year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(*year, *month + 1, 1)
                };
                next_month.unwrap() - Duration::days(1)
            }
            Self::Custom { end, .. } => *end,
        }
    }

    /// Check if a date falls within this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Number of days in the window
    pub fn days(&self) -> i64 {
        (self.end_date() - self.start_date()).num_days() + 1
    }

    /// Days of the window that have elapsed as of `today`, clamped to `[0, days]`
    ///
    /// Used for running daily averages: a window that has not started yet
    /// counts zero elapsed days; a finished window counts its full length.
    pub fn days_elapsed(&self, today: NaiveDate) -> i64 {
        if today < self.start_date() {
            0
        } else if today >= self.end_date() {
            self.days()
        } else {
            (today - self.start_date()).num_days() + 1
        }
    }

    /// Parse a window string
    ///
    /// Formats:
    /// - Monthly: "2025-06"
    /// - Custom: "2025-06-01..2025-06-15"
    pub fn parse(s: &str) -> Result<Self, WindowParseError> {
        let s = s.trim();

        if let Some((start, end)) = s.split_once("..") {
            let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
                .map_err(|_| WindowParseError::InvalidFormat(s.to_string()))?;
            let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")
                .map_err(|_| WindowParseError::InvalidFormat(s.to_string()))?;
            if end < start {
                return Err(WindowParseError::EndBeforeStart(s.to_string()));
            }
            return Ok(Self::Custom { start, end });
        }

        if let Some((year, month)) = s.split_once('-') {
            let year: i32 = year
                .parse()
                .map_err(|_| WindowParseError::InvalidFormat(s.to_string()))?;
            let month: u32 = month
                .parse()
                .map_err(|_| WindowParseError::InvalidFormat(s.to_string()))?;
            if !(1..=12).contains(&month) {
                return Err(WindowParseError::InvalidMonth(month));
            }
            return Ok(Self::Monthly { year, month });
        }

        Err(WindowParseError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for ReportWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Custom { start, end } => write!(
                f,
                "{}..{}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
        }
    }
}

/// Error type for window parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    EndBeforeStart(String),
}

impl fmt::Display for WindowParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowParseError::InvalidFormat(s) => write!(f, "Invalid window format: {}", s),
            WindowParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            WindowParseError::EndBeforeStart(s) => {
                write!(f, "Window end precedes start: {}", s)
            }
        }
    }
}

impl std::error::Error for WindowParseError {}
