//! Modal dialogs.

pub mod channel_verification_dialog;
pub mod common;
pub mod delete_confirmation_dialog;
pub mod error_dialog;
pub mod info_dialog;
pub mod logs_dialog;
pub mod reminder_creation_dialog;

pub use channel_verification_dialog::ChannelVerificationDialog;
pub use delete_confirmation_dialog::DeleteConfirmationDialog;
pub use error_dialog::ErrorDialog;
pub use info_dialog::InfoDialog;
pub use logs_dialog::LogsDialog;
pub use reminder_creation_dialog::ReminderCreationDialog;
