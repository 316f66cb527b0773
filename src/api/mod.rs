//! Remindr API abstraction layer.
//!
//! This module defines the interface the rest of the application uses to talk
//! to the Remindr service, along with the wire data types and error handling.
//! The concrete HTTP implementation lives in [`http`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod http;

pub use http::HttpApi;

/// Errors surfaced by API operations.
///
/// The taxonomy matters to the verification flow: a [`ApiError::Rejected`]
/// carries a backend-authored message, while [`ApiError::Network`] covers
/// transport failures that never consume a validation attempt.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("{message}")]
    Rejected { message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl ApiError {
    /// User-facing message for this error, falling back to `fallback` when the
    /// error carries nothing a user could act on.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// The closed set of notification channel types Remindr can deliver to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Email,
    Whatsapp,
    Telegram,
    Webhook,
}

impl ChannelType {
    /// Stable wire name, matching the backend enumeration.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Email => "email",
            ChannelType::Whatsapp => "whatsapp",
            ChannelType::Telegram => "telegram",
            ChannelType::Webhook => "webhook",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered notification destination.
///
/// `confirmed` stays false until the verification flow completes; at most one
/// channel is `primary`, a policy the backend enforces.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(rename = "output_type")]
    pub channel_type: ChannelType,
    pub identifier: String,
    pub confirmed: bool,
    #[serde(default)]
    pub primary: bool,
}

/// A scheduled reminder with its delivery channels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub reminder_text: String,
    #[serde(default)]
    pub target_url: Option<String>,
    #[serde(default)]
    pub outputs: Vec<Channel>,
    /// ISO 8601 datetime string as returned by the API
    pub scheduled_at: String,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub sent: bool,
    pub created_at: String,
}

/// Request payload for registering a new channel.
#[derive(Clone, Debug, Serialize)]
pub struct ChannelCreateRequest {
    #[serde(rename = "output_type")]
    pub channel_type: ChannelType,
    pub identifier: String,
}

/// Request payload for creating a reminder.
#[derive(Clone, Debug, Serialize)]
pub struct ReminderCreateRequest {
    pub reminder_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    pub output_ids: Vec<String>,
    pub scheduled_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Outcome of a validate-code call that reached the backend.
///
/// A response with `success == false` is a substantive rejection (wrong code),
/// distinct from a transport-level [`ApiError`].
#[derive(Clone, Debug, Deserialize)]
pub struct ValidateCodeResponse {
    pub success: bool,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ValidateCodeResponse {
    pub fn is_verified(&self) -> bool {
        self.success && self.confirmed
    }
}

/// Operations the Remindr service exposes to this client.
///
/// Kept behind a trait so the UI and the verification flow can be exercised
/// against a mock implementation in tests.
#[async_trait]
pub trait RemindrApi: Send + Sync {
    async fn list_channels(&self) -> Result<Vec<Channel>, ApiError>;

    /// Registers a channel and triggers delivery of a verification code.
    async fn create_channel(&self, request: ChannelCreateRequest) -> Result<Channel, ApiError>;

    /// Submits a candidate verification code for the given channel.
    async fn validate_code(&self, channel_ref: &str, code: &str) -> Result<ValidateCodeResponse, ApiError>;

    /// Asks the backend to send a fresh verification code.
    async fn resend_code(&self, channel_ref: &str) -> Result<(), ApiError>;

    async fn delete_channel(&self, channel_ref: &str) -> Result<(), ApiError>;

    async fn list_reminders(&self) -> Result<Vec<Reminder>, ApiError>;

    async fn create_reminder(&self, request: ReminderCreateRequest) -> Result<Reminder, ApiError>;

    async fn delete_reminder(&self, reminder_id: &str) -> Result<(), ApiError>;
}
