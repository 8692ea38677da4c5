use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.unsigned_abs().to_string();
    let mut result = String::new();
    let len = num_str.len();

    if number < 0 {
        result.push('-');
    }
    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// `↑ 12.3%` / `↓ 4.0%`, or `None` when the delta can't be shown.
pub fn format_delta(delta: f64) -> Option<String> {
    if !delta.is_finite() {
        return None;
    }
    let arrow = if delta > 0.0 { '↑' } else { '↓' };
    Some(format!("{arrow} {:.1}%", delta.abs()))
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Axis-style short numbers: `950`, `1.2k`.
pub fn format_compact(value: i64) -> String {
    if value.abs() >= 1000 {
        format!("{:.1}k", value as f64 / 1000.0)
    } else {
        value.to_string()
    }
}

fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?")
}

fn parse_month_key(key: &str) -> Result<(i32, u32), CoreError> {
    let invalid = || CoreError::InvalidMonth {
        value: key.to_string(),
    };
    let (year, month) = key.split_once('-').ok_or_else(invalid)?;
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

/// `2024-01` -> `January 2024`
pub fn month_label(key: &str) -> String {
    match parse_month_key(key) {
        Ok((year, month)) => format!("{} {year}", month_name(month)),
        Err(_) => key.to_string(),
    }
}

/// `2024-01` -> `Jan 24`
pub fn short_month_label(key: &str) -> String {
    match parse_month_key(key) {
        Ok((year, month)) => format!("{} {:02}", &month_name(month)[..3], year.rem_euclid(100)),
        Err(_) => key.to_string(),
    }
}

/// `2024-01-05` -> `5 Jan`
pub fn day_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), &month_name(date.month())[..3])
}

pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.get(..10).unwrap_or(iso_date).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(1234567, "1,234,567")]
    #[case(-45000, "-45,000")]
    fn groups_thousands(#[case] input: i64, #[case] expected: &str) {
        assert_eq!(format_number(input), expected);
    }

    #[rstest]
    #[case(12.34, Some("↑ 12.3%"))]
    #[case(-4.0, Some("↓ 4.0%"))]
    #[case(0.0, Some("↓ 0.0%"))]
    #[case(f64::NAN, None)]
    #[case(f64::INFINITY, None)]
    fn formats_delta(#[case] delta: f64, #[case] expected: Option<&str>) {
        assert_eq!(format_delta(delta).as_deref(), expected);
    }

    #[rstest]
    #[case(950, "950")]
    #[case(1200, "1.2k")]
    #[case(25000, "25.0k")]
    fn compacts(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(format_compact(value), expected);
    }

    #[test]
    fn month_labels() {
        assert_eq!(month_label("2024-01"), "January 2024");
        assert_eq!(short_month_label("2024-11"), "Nov 24");
        assert_eq!(month_label("2024-13"), "2024-13");
        assert_eq!(month_label("nonsense"), "nonsense");
    }

    #[test]
    fn day_label_is_short() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(day_label(date), "9 Mar");
    }

    #[test]
    fn iso_dates_trimmed_to_day() {
        assert_eq!(format_iso8601_date("2024-03-01T12:00:00Z"), "2024-03-01");
        assert_eq!(format_iso8601_date("2024-03-01 12:00:00"), "2024-03-01");
        assert_eq!(format_percent(12.5, 2), "12.50%");
    }
}
