//! UI components.

pub mod channel_list;
pub mod dialog;
pub mod dialogs;
pub mod reminder_list;
pub mod sidebar;
pub mod status_bar;

pub use channel_list::ChannelListComponent;
pub use dialog::DialogComponent;
pub use reminder_list::ReminderListComponent;
pub use sidebar::SidebarComponent;
pub use status_bar::StatusBar;
