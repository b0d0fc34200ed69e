//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date for display (like "January 15, 2024")
pub fn format_display_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Format a date for machine-readable contexts
pub fn format_iso_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%d").to_string()
}
