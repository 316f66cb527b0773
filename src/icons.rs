//! Icon definitions for visual representation in the TUI.
//!
//! Channel type icons come from the channel registry; this module covers the
//! rest: reminder status, verification state, and general UI glyphs.

/// Reminder delivery status icons
pub const REMINDER_SENT: &str = "✅";
pub const REMINDER_PENDING: &str = "⏳";
pub const REMINDER_OVERDUE: &str = "⏰";
pub const REMINDER_EXPIRED: &str = "🚫";

/// Channel verification state icons
pub const CHANNEL_CONFIRMED: &str = "✔";
pub const CHANNEL_UNCONFIRMED: &str = "…";
pub const CHANNEL_PRIMARY: &str = "★";

/// UI element icons
pub const ICON_ERROR: &str = "❌";
pub const ICON_INFO: &str = "ℹ️";
pub const ICON_LOADING: &str = "⟳";

use crate::api::Reminder;
use crate::utils::datetime;

/// Pick the status icon for a reminder.
pub fn reminder_status_icon(reminder: &Reminder) -> &'static str {
    if reminder.sent {
        return REMINDER_SENT;
    }
    if let Some(expires_at) = &reminder.expires_at {
        if datetime::is_past(expires_at) {
            return REMINDER_EXPIRED;
        }
    }
    if datetime::is_past(&reminder.scheduled_at) {
        REMINDER_OVERDUE
    } else {
        REMINDER_PENDING
    }
}
