//! Channel verification dialog.
//!
//! UI host for the two-step channel registration flow. The dialog owns a
//! [`VerificationSession`] created fresh every time it opens; all state
//! transitions happen inside the session, the dialog just collects keystrokes,
//! forwards the session's commands as actions, and renders whichever step the
//! session is in.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use uuid::Uuid;

use super::common;
use crate::api::Channel;
use crate::channels::registry;
use crate::constants::{SUCCESS_CODE_RESENT, SUCCESS_CODE_SENT};
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;
use crate::verification::{FlowSignal, Step, VerificationSession};

pub struct ChannelVerificationDialog {
    session: VerificationSession,
}

impl ChannelVerificationDialog {
    /// Open the dialog, initializing a fresh session. Passing an existing
    /// unconfirmed channel resumes verification in the code entry step.
    /// Re-opening always re-initializes, even for the same channel.
    pub fn open(existing: Option<&Channel>) -> Self {
        let session = match existing {
            Some(channel) => VerificationSession::resume(channel),
            None => VerificationSession::new(),
        };
        Self { session }
    }

    pub fn session(&self) -> &VerificationSession {
        &self.session
    }

    /// Apply a backend result for `session_id`. A result for any other
    /// session is stale (the dialog was closed and reopened since) and is
    /// dropped without touching the live session.
    pub fn apply_outcome(&mut self, session_id: Uuid, result: crate::verification::VerificationResult) -> Action {
        if session_id != self.session.id() {
            log::debug!("Dropping verification result for stale session {session_id}");
            return Action::None;
        }

        match self.session.apply_result(result) {
            FlowSignal::Verified => Action::ChannelListStale,
            FlowSignal::CodeSent => Action::OperationCompleted(SUCCESS_CODE_SENT.to_string()),
            FlowSignal::CodeResent => Action::OperationCompleted(SUCCESS_CODE_RESENT.to_string()),
            FlowSignal::None => Action::None,
        }
    }

    fn edit_identifier(&mut self, key: KeyCode) {
        let mut value = self.session.identifier().to_string();
        match key {
            KeyCode::Char(c) => value.push(c),
            KeyCode::Backspace => {
                value.pop();
            }
            _ => return,
        }
        self.session.set_identifier(value);
    }

    fn edit_code(&mut self, key: KeyCode) {
        let mut value = self.session.code().to_string();
        match key {
            KeyCode::Char(c) => value.push(c),
            KeyCode::Backspace => {
                value.pop();
            }
            _ => return,
        }
        self.session.set_code(value);
    }

    fn cycle_channel_type(&mut self) {
        let types = registry::all_types();
        let current = types
            .iter()
            .position(|t| *t == self.session.channel_type())
            .unwrap_or(0);
        self.session.set_channel_type(types[(current + 1) % types.len()]);
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.session.step() {
            Step::CollectingIdentifier => match key.code {
                KeyCode::Tab => {
                    self.cycle_channel_type();
                    Action::None
                }
                KeyCode::Enter => match self.session.submit_identifier() {
                    Some(command) => Action::RunVerification {
                        session_id: self.session.id(),
                        command,
                    },
                    None => Action::None,
                },
                KeyCode::Char(_) | KeyCode::Backspace => {
                    self.edit_identifier(key.code);
                    Action::None
                }
                _ => Action::None,
            },
            Step::AwaitingCode => match key.code {
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    match self.session.resend_code() {
                        Ok(Some(command)) => Action::RunVerification {
                            session_id: self.session.id(),
                            command,
                        },
                        Ok(None) => Action::None,
                        Err(e) => {
                            log::error!("Verification flow precondition violated: {e}");
                            Action::ShowDialog(crate::ui::core::DialogType::Error(format!("Internal error: {e}")))
                        }
                    }
                }
                KeyCode::Enter => match self.session.submit_code() {
                    Ok(Some(command)) => Action::RunVerification {
                        session_id: self.session.id(),
                        command,
                    },
                    Ok(None) => Action::None,
                    Err(e) => {
                        log::error!("Verification flow precondition violated: {e}");
                        Action::ShowDialog(crate::ui::core::DialogType::Error(format!("Internal error: {e}")))
                    }
                },
                KeyCode::Char(_) | KeyCode::Backspace => {
                    self.edit_code(key.code);
                    Action::None
                }
                _ => Action::None,
            },
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let dialog_area = LayoutManager::centered_rect_lines(60, 14, area);
        f.render_widget(Clear, dialog_area);

        let title = match self.session.step() {
            Step::CollectingIdentifier => " Add channel ",
            Step::AwaitingCode => " Verify channel ",
        };
        let block = common::create_dialog_block(title, Color::Cyan);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        match self.session.step() {
            Step::CollectingIdentifier => self.render_identifier_step(f, inner),
            Step::AwaitingCode => self.render_code_step(f, inner),
        }
    }

    fn render_identifier_step(&self, f: &mut Frame, area: Rect) {
        let config = registry::config_for(self.session.channel_type());

        // Type selector line
        let mut type_spans = vec![Span::styled("Type: ", Style::default().fg(Color::Gray))];
        for channel_type in registry::all_types() {
            let type_config = registry::config_for(channel_type);
            let style = if channel_type == self.session.channel_type() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            type_spans.push(Span::styled(format!(" {} {} ", type_config.icon, type_config.label), style));
        }
        let type_line = Paragraph::new(Line::from(type_spans));
        f.render_widget(type_line, Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), 1));

        // Identifier input
        let input_title = format!("{} ({})", config.label, config.placeholder);
        let input = common::create_input_paragraph(self.session.identifier(), &input_title);
        f.render_widget(input, Rect::new(area.x + 1, area.y + 2, area.width.saturating_sub(2), 3));

        // Help text
        let help = Paragraph::new(config.help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Left);
        f.render_widget(help, Rect::new(area.x + 1, area.y + 5, area.width.saturating_sub(2), 1));

        self.render_error_line(f, Rect::new(area.x + 1, area.y + 7, area.width.saturating_sub(2), 1));

        let instructions = common::create_instructions_paragraph(&[
            common::shortcuts::TAB_SELECT,
            common::shortcuts::SEPARATOR,
            common::shortcuts::ENTER_SUBMIT,
            common::shortcuts::SEPARATOR,
            common::shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(
            instructions,
            Rect::new(area.x + 1, area.y + area.height.saturating_sub(1), area.width.saturating_sub(2), 1),
        );
    }

    fn render_code_step(&self, f: &mut Frame, area: Rect) {
        let config = registry::config_for(self.session.channel_type());

        // Destination being verified (read-only)
        let destination = common::create_selection_paragraph(
            format!("{} {}", config.icon, self.session.identifier()),
            "Sending code to",
        );
        f.render_widget(destination, Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), 3));

        // Code input
        let code_input = common::create_input_paragraph(self.session.code(), "Verification code");
        f.render_widget(code_input, Rect::new(area.x + 1, area.y + 3, area.width.saturating_sub(2), 3));

        // Attempts counter
        let attempts = self.session.attempts_remaining();
        let attempts_style = if attempts == 0 {
            Style::default().fg(Color::Red)
        } else if attempts == 1 {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let attempts_text = if attempts == 0 {
            "No attempts remaining - resend the code (Ctrl+R)".to_string()
        } else {
            format!("{attempts} attempts remaining")
        };
        let attempts_line = Paragraph::new(attempts_text).style(attempts_style);
        f.render_widget(attempts_line, Rect::new(area.x + 1, area.y + 6, area.width.saturating_sub(2), 1));

        self.render_error_line(f, Rect::new(area.x + 1, area.y + 8, area.width.saturating_sub(2), 1));

        let instructions = common::create_instructions_paragraph(&[
            common::shortcuts::ENTER_SUBMIT,
            common::shortcuts::SEPARATOR,
            common::shortcuts::CTRL_R_RESEND,
            common::shortcuts::SEPARATOR,
            common::shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(
            instructions,
            Rect::new(area.x + 1, area.y + area.height.saturating_sub(1), area.width.saturating_sub(2), 1),
        );
    }

    fn render_error_line(&self, f: &mut Frame, rect: Rect) {
        if let Some(error) = self.session.last_error() {
            f.render_widget(common::create_error_line(error), rect);
        } else if self.session.busy() {
            let busy = Paragraph::new("Working...").style(Style::default().fg(Color::Yellow));
            f.render_widget(busy, rect);
        }
    }
}
