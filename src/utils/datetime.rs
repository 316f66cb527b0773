//! Date and time utility functions
//!
//! The Remindr API exchanges ISO 8601 datetime strings; this module parses
//! them and produces human-readable schedule descriptions for the list views
//! (e.g. "today at 18:00", "tomorrow at 09:00", "in 5 days").

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone, Utc, Weekday};

/// Date format used for day-level comparisons and display
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an API datetime string. Accepts RFC 3339 and the common ISO 8601
/// variants without an offset (interpreted as local time).
pub fn parse_datetime(datetime_str: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return Some(dt.with_timezone(&Local));
    }

    for format in [&format!("{DATE_FORMAT}T%H:%M:%S"), &format!("{DATE_FORMAT} %H:%M:%S")] {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(datetime_str, format) {
            return Some(
                Local
                    .from_local_datetime(&dt)
                    .single()
                    .unwrap_or_else(|| Local.from_utc_datetime(&dt)),
            );
        }
    }

    None
}

/// Whether an API datetime lies in the past. Unparseable input counts as
/// not past, so a malformed timestamp renders as pending rather than overdue.
pub fn is_past(datetime_str: &str) -> bool {
    match parse_datetime(datetime_str) {
        Some(dt) => dt < Local::now(),
        None => false,
    }
}

/// Whether an API datetime falls on today's local date.
pub fn is_today(datetime_str: &str) -> bool {
    match parse_datetime(datetime_str) {
        Some(dt) => dt.date_naive() == Local::now().date_naive(),
        None => false,
    }
}

/// Whether an API datetime is later than now (upcoming).
pub fn is_upcoming(datetime_str: &str) -> bool {
    match parse_datetime(datetime_str) {
        Some(dt) => dt >= Local::now(),
        None => false,
    }
}

/// Current time as an RFC 3339 string, the format the API expects.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// RFC 3339 string for now plus `hours`.
pub fn hours_from_now_rfc3339(hours: i64) -> String {
    (Utc::now() + Duration::hours(hours)).to_rfc3339()
}

/// RFC 3339 string for the next occurrence of `hour:00` local time,
/// `days_offset` days from today.
pub fn at_hour_rfc3339(days_offset: i64, hour: u32) -> String {
    let date = Local::now().date_naive() + Duration::days(days_offset);
    let naive = date.and_hms_opt(hour, 0, 0).unwrap_or_else(|| {
        date.and_hms_opt(0, 0, 0).expect("midnight is always a valid time")
    });
    let local = Local
        .from_local_datetime(&naive)
        .single()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive));
    local.to_utc().to_rfc3339()
}

/// Format an API datetime in a human-readable way relative to today.
pub fn format_human_datetime(datetime_str: &str) -> String {
    let Some(local_dt) = parse_datetime(datetime_str) else {
        return datetime_str.to_string();
    };

    let time_str = local_dt.format("%H:%M").to_string();
    format!("{} at {}", format_human_date(local_dt.date_naive()), time_str)
}

/// Format a date relative to today ("yesterday", "today", "next Monday",
/// "in 12 days", or the plain date for anything further out).
pub fn format_human_date(date: NaiveDate) -> String {
    let today = Local::now().date_naive();
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
