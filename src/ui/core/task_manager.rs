//! Background task management.
//!
//! Network work never runs on the UI loop: operations are spawned here and
//! report back as [`Action`]s over an unbounded channel the app drains on
//! tick. Verification results carry their originating session id so that a
//! response landing after the dialog was closed (or reopened with a fresh
//! session) is ignored instead of being applied to the wrong session.

use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::actions::{Action, DialogType};
use crate::service::DataService;
use crate::verification::FlowCommand;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn register(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Spawn a full data refresh (channels + reminders).
    pub fn spawn_refresh(&mut self, service: DataService) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            match (service.refresh_channels().await, service.refresh_reminders().await) {
                (Ok(channels), Ok(reminders)) => {
                    let _ = action_sender.send(Action::DataLoaded { channels, reminders });
                }
                (Err(e), _) | (_, Err(e)) => {
                    let _ = action_sender.send(Action::RefreshFailed(e.to_string()));
                }
            }
        });

        self.register(handle, "Refreshing data".to_string())
    }

    /// Spawn one verification flow command. The result comes back as a
    /// [`Action::VerificationOutcome`] tagged with `session_id`.
    pub fn spawn_verification(&mut self, service: DataService, session_id: Uuid, command: FlowCommand) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Verification step for session {session_id}");

        let handle = tokio::spawn(async move {
            let result = service.run_flow_command(command).await;
            let _ = action_sender.send(Action::VerificationOutcome { session_id, result });
        });

        self.register(handle, description)
    }

    /// Spawn a write operation (create/delete). On success the UI refetches
    /// and shows `success_message` in the status bar; on failure an error
    /// dialog opens.
    pub fn spawn_operation<F, Fut>(&mut self, description: String, success_message: String, operation: F) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<(), crate::api::ApiError>> + Send + 'static,
    {
        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();

        let handle = tokio::spawn(async move {
            match operation().await {
                Ok(()) => {
                    let _ = action_sender.send(Action::OperationCompleted(success_message));
                    let _ = action_sender.send(Action::RefreshData);
                }
                Err(e) => {
                    let _ = action_sender.send(Action::ShowDialog(DialogType::Error(format!(
                        "{description}: {e}"
                    ))));
                }
            }
        });

        self.register(handle, desc_for_task)
    }

    /// Drop bookkeeping for tasks that already finished.
    pub fn cleanup_finished_tasks(&mut self) {
        self.tasks.retain(|_, task| !task.handle.is_finished());
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
