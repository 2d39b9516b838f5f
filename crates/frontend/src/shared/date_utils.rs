/// Utilities for date formatting
///
/// Provides consistent date handling across the calculator
use chrono::{Local, NaiveDate};

/// Today's local calendar date as an ISO `YYYY-MM-DD` string
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Format an ISO date for display
/// Example: "2026-08-07" -> "August 7, 2026"
pub fn format_long_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}
