//! Display Helpers
//!
//! Text formatting shared by the views.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Backend timestamps come with or without an offset and fractional seconds
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// "Jan 15, 2024 10:00"; unparseable input is shown as-is, missing as "-"
pub fn format_timestamp(raw: Option<&str>) -> String {
    match raw {
        None => "-".to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%b %-d, %Y %H:%M").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// "Jan 15, 2024"
pub fn format_date(raw: Option<&str>) -> String {
    match raw {
        None => "-".to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.date())
            .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// "10:00"
pub fn format_time(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Five-star bar, e.g. `★★★☆☆`
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn format_average(average: Option<f64>) -> String {
    average.map(|a| format!("{:.1}", a)).unwrap_or_else(|| "—".to_string())
}

pub fn format_percent(percent: Option<u32>) -> String {
    percent.map(|p| format!("{}%", p)).unwrap_or_else(|| "—".to_string())
}

/// `{prefix}-YYYY-MM-DD.{ext}`
pub fn dated_file_name(prefix: &str, date: NaiveDate, ext: &str) -> String {
    format!("{}-{}.{}", prefix, date.format("%Y-%m-%d"), ext)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
