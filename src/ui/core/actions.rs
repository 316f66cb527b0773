use uuid::Uuid;

use crate::api::{Channel, Reminder, ReminderCreateRequest};
use crate::verification::{FlowCommand, VerificationResult};

/// Represents the currently selected view in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarSelection {
    #[default]
    Today, // Reminders scheduled for today
    Upcoming, // Reminders with a future delivery time
    All,      // Every reminder
    Channels, // Notification channel management
}

impl SidebarSelection {
    pub fn label(&self) -> &'static str {
        match self {
            SidebarSelection::Today => "Today",
            SidebarSelection::Upcoming => "Upcoming",
            SidebarSelection::All => "All reminders",
            SidebarSelection::Channels => "Channels",
        }
    }

    /// All views in sidebar order.
    pub fn all() -> [SidebarSelection; 4] {
        [
            SidebarSelection::Today,
            SidebarSelection::Upcoming,
            SidebarSelection::All,
            SidebarSelection::Channels,
        ]
    }
}

#[derive(Debug)]
pub enum Action {
    // Navigation
    NavigateToSidebar(SidebarSelection),
    NextItem,
    PreviousItem,

    // Reminder operations
    CreateReminder(ReminderCreateRequest),
    DeleteReminder(String),

    // Channel operations
    DeleteChannel(String),

    // Verification flow: commands produced by the session, results coming
    // back from the background task, both tagged with the session id so a
    // stale result can be dropped
    RunVerification {
        session_id: Uuid,
        command: FlowCommand,
    },
    VerificationOutcome {
        session_id: Uuid,
        result: VerificationResult,
    },
    /// A channel was verified; the cached channel list is stale
    ChannelListStale,

    // Data loading
    StartRefresh,
    DataLoaded {
        channels: Vec<Channel>,
        reminders: Vec<Reminder>,
    },
    RefreshFailed(String),
    /// Refetch after a write operation completed
    RefreshData,
    OperationCompleted(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    /// Two-step channel registration/verification. `existing` resumes the
    /// flow for an already-created, unconfirmed channel.
    ChannelVerification { existing: Option<Channel> },
    ReminderCreation,
    DeleteConfirmation {
        item_type: String,
        item_id: String,
        item_label: String,
    },
    Error(String),
    Info(String),
    Logs,
}
