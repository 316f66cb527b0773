//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Channel verification flow
/// Number of wrong-code submissions allowed before a resend is required
pub const MAX_VERIFICATION_ATTEMPTS: u8 = 3;
/// Length of the verification code sent by the backend
pub const VERIFICATION_CODE_LENGTH: usize = 6;

// Verification fallback messages (used when the backend payload carries none)
pub const ERROR_CHANNEL_CREATE_FAILED: &str = "Failed to create channel. Please try again.";
pub const ERROR_CODE_VALIDATION_FAILED: &str = "Validation failed. Please try again.";
pub const ERROR_CODE_RESEND_FAILED: &str = "Failed to resend code. Please try again.";
pub const ERROR_IDENTIFIER_REQUIRED: &str = "This field is required";
pub const ERROR_CODE_LENGTH: &str = "Verification code must be 6 characters";
pub const ERROR_NO_ATTEMPTS_LEFT: &str = "No attempts remaining. Resend the code to try again.";

// Success Messages
pub const SUCCESS_CHANNEL_VERIFIED: &str = "✅ Channel verified successfully!";
pub const SUCCESS_CODE_SENT: &str = "✅ Verification code sent";
pub const SUCCESS_CODE_RESENT: &str = "✅ Verification code resent";
pub const SUCCESS_REMINDER_CREATED: &str = "✅ Reminder created";
pub const SUCCESS_REMINDER_DELETED: &str = "✅ Reminder deleted";
pub const SUCCESS_CHANNEL_DELETED: &str = "✅ Channel deleted";

// Error Messages
pub const ERROR_REMINDER_CREATE_FAILED: &str = "❌ Failed to create reminder";
pub const ERROR_REMINDER_DELETE_FAILED: &str = "❌ Failed to delete reminder";
pub const ERROR_CHANNEL_DELETE_FAILED: &str = "❌ Failed to delete channel";
pub const ERROR_REFRESH_FAILED: &str = "❌ Failed to refresh data";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_NO_API_TOKEN: &str = "❌ Error: REMINDR_API_TOKEN environment variable not set";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
