//! Dialog container component.
//!
//! Owns whichever modal dialog is currently open and routes key events and
//! background results to it. At most one dialog is active at a time; opening
//! a new one replaces (and drops) the previous one, which is also how a
//! verification session gets discarded and re-initialized.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use uuid::Uuid;

use crate::api::Channel;
use crate::logger::Logger;
use crate::ui::core::{Action, DialogType};
use crate::verification::VerificationResult;

use super::dialogs::{
    ChannelVerificationDialog, DeleteConfirmationDialog, ErrorDialog, InfoDialog, LogsDialog,
    ReminderCreationDialog,
};

enum ActiveDialog {
    ChannelVerification(ChannelVerificationDialog),
    ReminderCreation(ReminderCreationDialog),
    DeleteConfirmation(DeleteConfirmationDialog),
    Error(ErrorDialog),
    Info(InfoDialog),
    Logs(LogsDialog),
}

pub struct DialogComponent {
    active: Option<ActiveDialog>,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Open a dialog, replacing any currently open one.
    pub fn show(&mut self, dialog_type: DialogType, channels: &[Channel], logger: &Logger) {
        self.active = Some(match dialog_type {
            DialogType::ChannelVerification { existing } => {
                ActiveDialog::ChannelVerification(ChannelVerificationDialog::open(existing.as_ref()))
            }
            DialogType::ReminderCreation => {
                ActiveDialog::ReminderCreation(ReminderCreationDialog::open(channels))
            }
            DialogType::DeleteConfirmation {
                item_type,
                item_id,
                item_label,
            } => ActiveDialog::DeleteConfirmation(DeleteConfirmationDialog::new(
                item_type, item_id, item_label,
            )),
            DialogType::Error(message) => ActiveDialog::Error(ErrorDialog::new(message)),
            DialogType::Info(message) => ActiveDialog::Info(InfoDialog::new(message)),
            DialogType::Logs => ActiveDialog::Logs(LogsDialog::new(logger.clone())),
        });
    }

    /// Close the active dialog. Any verification session it held is discarded;
    /// late results for it will be recognized by id and dropped.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// Route a verification result to the open verification dialog. Results
    /// arriving when no verification dialog is open belong to a discarded
    /// session and are dropped.
    pub fn apply_verification_outcome(
        &mut self,
        session_id: Uuid,
        result: VerificationResult,
    ) -> Action {
        match &mut self.active {
            Some(ActiveDialog::ChannelVerification(dialog)) => {
                dialog.apply_outcome(session_id, result)
            }
            _ => {
                log::debug!("Dropping verification result for closed session {session_id}");
                Action::None
            }
        }
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Esc {
            return Action::HideDialog;
        }

        match &mut self.active {
            Some(ActiveDialog::ChannelVerification(dialog)) => dialog.handle_key_events(key),
            Some(ActiveDialog::ReminderCreation(dialog)) => dialog.handle_key_events(key),
            Some(ActiveDialog::DeleteConfirmation(dialog)) => dialog.handle_key_events(key),
            Some(ActiveDialog::Error(dialog)) => dialog.handle_key_events(key),
            Some(ActiveDialog::Info(dialog)) => dialog.handle_key_events(key),
            Some(ActiveDialog::Logs(dialog)) => dialog.handle_key_events(key),
            None => Action::None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        match &mut self.active {
            Some(ActiveDialog::ChannelVerification(dialog)) => dialog.render(f, area),
            Some(ActiveDialog::ReminderCreation(dialog)) => dialog.render(f, area),
            Some(ActiveDialog::DeleteConfirmation(dialog)) => dialog.render(f, area),
            Some(ActiveDialog::Error(dialog)) => dialog.render(f, area),
            Some(ActiveDialog::Info(dialog)) => dialog.render(f, area),
            Some(ActiveDialog::Logs(dialog)) => dialog.render(f, area),
            None => {}
        }
    }
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
