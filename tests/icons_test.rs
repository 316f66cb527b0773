use chrono::{Duration, Local};
use remindr::api::{Channel, ChannelType, Reminder};
use remindr::icons::*;

fn reminder(scheduled_at: String, expires_at: Option<String>, sent: bool) -> Reminder {
    Reminder {
        id: "r-1".to_string(),
        reminder_text: "water the plants".to_string(),
        target_url: None,
        outputs: vec![Channel {
            id: "ch-1".to_string(),
            channel_type: ChannelType::Email,
            identifier: "a@b.co".to_string(),
            confirmed: true,
            primary: true,
        }],
        scheduled_at,
        expires_at,
        sent,
        created_at: Local::now().to_rfc3339(),
    }
}

#[test]
fn test_sent_reminder_icon() {
    let past = (Local::now() - Duration::hours(2)).to_rfc3339();
    let r = reminder(past, None, true);
    assert_eq!(reminder_status_icon(&r), REMINDER_SENT);
}

#[test]
fn test_pending_reminder_icon() {
    let future = (Local::now() + Duration::hours(2)).to_rfc3339();
    let r = reminder(future, None, false);
    assert_eq!(reminder_status_icon(&r), REMINDER_PENDING);
}

#[test]
fn test_overdue_reminder_icon() {
    let past = (Local::now() - Duration::hours(2)).to_rfc3339();
    let r = reminder(past, None, false);
    assert_eq!(reminder_status_icon(&r), REMINDER_OVERDUE);
}

#[test]
fn test_expired_wins_over_overdue() {
    let past = (Local::now() - Duration::hours(2)).to_rfc3339();
    let expired = (Local::now() - Duration::hours(1)).to_rfc3339();
    let r = reminder(past, Some(expired), false);
    assert_eq!(reminder_status_icon(&r), REMINDER_EXPIRED);
}
