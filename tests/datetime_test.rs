use chrono::{Duration, Local};
use remindr::utils::datetime;

#[test]
fn test_parse_rfc3339() {
    assert!(datetime::parse_datetime("2026-08-23T10:30:00Z").is_some());
    assert!(datetime::parse_datetime("2026-08-23T10:30:00+02:00").is_some());
}

#[test]
fn test_parse_naive_formats() {
    assert!(datetime::parse_datetime("2026-08-23T10:30:00").is_some());
    assert!(datetime::parse_datetime("2026-08-23 10:30:00").is_some());
}

#[test]
fn test_parse_garbage_returns_none() {
    assert!(datetime::parse_datetime("not a date").is_none());
    assert!(datetime::parse_datetime("").is_none());
}

#[test]
fn test_is_past_and_upcoming() {
    let past = (Local::now() - Duration::hours(1)).to_rfc3339();
    let future = (Local::now() + Duration::hours(1)).to_rfc3339();

    assert!(datetime::is_past(&past));
    assert!(!datetime::is_past(&future));
    assert!(datetime::is_upcoming(&future));
    assert!(!datetime::is_upcoming(&past));

    // Malformed input is neither past nor upcoming
    assert!(!datetime::is_past("garbage"));
    assert!(!datetime::is_upcoming("garbage"));
}

#[test]
fn test_is_today() {
    let now = Local::now().to_rfc3339();
    let tomorrow = (Local::now() + Duration::days(1)).to_rfc3339();
    assert!(datetime::is_today(&now));
    assert!(!datetime::is_today(&tomorrow));
}

#[test]
fn test_format_human_datetime_relative_days() {
    let today = Local::now().to_rfc3339();
    assert!(datetime::format_human_datetime(&today).starts_with("today at "));

    let tomorrow = (Local::now() + Duration::days(1)).to_rfc3339();
    assert!(datetime::format_human_datetime(&tomorrow).starts_with("tomorrow at "));

    // Unparseable input falls through untouched
    assert_eq!(datetime::format_human_datetime("whenever"), "whenever");
}

#[test]
fn test_hours_from_now_is_parseable_and_upcoming() {
    let in_two_hours = datetime::hours_from_now_rfc3339(2);
    assert!(datetime::parse_datetime(&in_two_hours).is_some());
    assert!(datetime::is_upcoming(&in_two_hours));
}

#[test]
fn test_at_hour_lands_on_requested_local_time() {
    let tomorrow_nine = datetime::at_hour_rfc3339(1, 9);
    let parsed = datetime::parse_datetime(&tomorrow_nine).expect("parseable");
    let expected_date = Local::now().date_naive() + Duration::days(1);
    assert_eq!(parsed.date_naive(), expected_date);
    assert_eq!(parsed.format("%H:%M").to_string(), "09:00");
}
