//! Cached data access for the UI.
//!
//! [`DataService`] is the application's data layer: it wraps the
//! [`RemindrApi`] with in-memory caches for the channel and reminder lists so
//! views render from local data, and exposes explicit invalidation for the
//! moments the lists go stale (channel verified, reminder created, item
//! deleted). Write operations go straight to the API and invalidate the
//! affected cache.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::{ApiError, Channel, ChannelCreateRequest, Reminder, ReminderCreateRequest, RemindrApi};
use crate::logger::Logger;
use crate::verification::{FlowCommand, VerificationResult};

/// Service providing cached reads and cache-invalidating writes.
///
/// Clone-able; all clones share the same caches. One UI-triggered operation
/// per concern is in flight at a time, which the UI enforces with its busy
/// state, so the caches only need interior mutability, not coordination.
#[derive(Clone)]
pub struct DataService {
    api: Arc<dyn RemindrApi>,
    channels: Arc<Mutex<Option<Vec<Channel>>>>,
    reminders: Arc<Mutex<Option<Vec<Reminder>>>>,
    logger: Logger,
}

impl DataService {
    pub fn new(api: Arc<dyn RemindrApi>, logger: Logger) -> Self {
        Self {
            api,
            channels: Arc::new(Mutex::new(None)),
            reminders: Arc::new(Mutex::new(None)),
            logger,
        }
    }

    /// Channel list, served from cache when warm.
    pub async fn channels(&self) -> Result<Vec<Channel>, ApiError> {
        if let Some(cached) = self.channels.lock().await.clone() {
            return Ok(cached);
        }
        self.refresh_channels().await
    }

    /// Reminder list, served from cache when warm.
    pub async fn reminders(&self) -> Result<Vec<Reminder>, ApiError> {
        if let Some(cached) = self.reminders.lock().await.clone() {
            return Ok(cached);
        }
        self.refresh_reminders().await
    }

    /// Refetch the channel list and replace the cache.
    pub async fn refresh_channels(&self) -> Result<Vec<Channel>, ApiError> {
        let channels = self.api.list_channels().await?;
        self.logger.log(format!("Fetched {} channels from API", channels.len()));
        *self.channels.lock().await = Some(channels.clone());
        Ok(channels)
    }

    /// Refetch the reminder list and replace the cache.
    pub async fn refresh_reminders(&self) -> Result<Vec<Reminder>, ApiError> {
        let reminders = self.api.list_reminders().await?;
        self.logger.log(format!("Fetched {} reminders from API", reminders.len()));
        *self.reminders.lock().await = Some(reminders.clone());
        Ok(reminders)
    }

    /// Drop the cached channel list; the next read refetches.
    pub async fn invalidate_channels(&self) {
        *self.channels.lock().await = None;
    }

    /// Drop the cached reminder list; the next read refetches.
    pub async fn invalidate_reminders(&self) {
        *self.reminders.lock().await = None;
    }

    pub async fn create_reminder(&self, request: ReminderCreateRequest) -> Result<Reminder, ApiError> {
        let reminder = self.api.create_reminder(request).await?;
        self.logger.log(format!("Created reminder {}", reminder.id));
        self.invalidate_reminders().await;
        Ok(reminder)
    }

    pub async fn delete_reminder(&self, reminder_id: &str) -> Result<(), ApiError> {
        self.api.delete_reminder(reminder_id).await?;
        self.logger.log(format!("Deleted reminder {}", reminder_id));
        self.invalidate_reminders().await;
        Ok(())
    }

    pub async fn delete_channel(&self, channel_ref: &str) -> Result<(), ApiError> {
        self.api.delete_channel(channel_ref).await?;
        self.logger.log(format!("Deleted channel {}", channel_ref));
        self.invalidate_channels().await;
        Ok(())
    }

    pub async fn create_channel(&self, request: ChannelCreateRequest) -> Result<Channel, ApiError> {
        let channel = self.api.create_channel(request).await?;
        self.logger.log(format!("Created channel {} (unconfirmed)", channel.id));
        self.invalidate_channels().await;
        Ok(channel)
    }

    /// Execute one verification flow command against the API.
    ///
    /// The caller tags the result with the originating session id; the
    /// session applies it only if it is still the live session.
    pub async fn run_flow_command(&self, command: FlowCommand) -> VerificationResult {
        match command {
            FlowCommand::CreateChannel(request) => {
                VerificationResult::Created(self.create_channel(request).await)
            }
            FlowCommand::ValidateCode { channel_ref, code } => {
                VerificationResult::Validated(self.api.validate_code(&channel_ref, &code).await)
            }
            FlowCommand::ResendCode { channel_ref } => {
                VerificationResult::Resent(self.api.resend_code(&channel_ref).await)
            }
        }
    }
}
