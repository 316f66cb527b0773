//! Reminder creation dialog.
//!
//! Collects the reminder text, a quick-schedule preset, and the target
//! channels (confirmed channels only - the backend refuses delivery to an
//! unverified destination anyway).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common;
use crate::api::{Channel, ReminderCreateRequest};
use crate::channels::registry;
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;

/// Quick schedule presets: label plus a function producing the RFC 3339
/// delivery time at submission.
const PRESETS: [(&str, fn() -> String); 4] = [
    ("In 1 hour", || datetime::hours_from_now_rfc3339(1)),
    ("In 3 hours", || datetime::hours_from_now_rfc3339(3)),
    ("Tomorrow 9:00", || datetime::at_hour_rfc3339(1, 9)),
    ("Next week 9:00", || datetime::at_hour_rfc3339(7, 9)),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Text,
    Schedule,
    Channels,
}

pub struct ReminderCreationDialog {
    text: String,
    focus: Focus,
    preset_index: usize,
    channels: Vec<Channel>,
    selected: Vec<bool>,
    channel_cursor: usize,
    error: Option<String>,
}

impl ReminderCreationDialog {
    /// Open the dialog with the channels available for delivery.
    pub fn open(channels: &[Channel]) -> Self {
        let channels: Vec<Channel> = channels.iter().filter(|c| c.confirmed).cloned().collect();
        let selected = vec![false; channels.len()];
        Self {
            text: String::new(),
            focus: Focus::Text,
            preset_index: 0,
            channels,
            selected,
            channel_cursor: 0,
            error: None,
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Text => Focus::Schedule,
            Focus::Schedule => Focus::Channels,
            Focus::Channels => Focus::Text,
        };
    }

    fn submit(&mut self) -> Action {
        if self.text.trim().is_empty() {
            self.error = Some("Reminder text cannot be empty".to_string());
            return Action::None;
        }

        let output_ids: Vec<String> = self
            .channels
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(channel, _)| channel.id.clone())
            .collect();

        if output_ids.is_empty() {
            self.error = Some("Select at least one channel".to_string());
            return Action::None;
        }

        let scheduled_at = (PRESETS[self.preset_index].1)();
        Action::CreateReminder(ReminderCreateRequest {
            reminder_text: self.text.trim().to_string(),
            target_url: None,
            output_ids,
            scheduled_at,
            expires_at: None,
        })
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.cycle_focus();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(' ') if self.focus == Focus::Channels => {
                if let Some(flag) = self.selected.get_mut(self.channel_cursor) {
                    *flag = !*flag;
                    self.error = None;
                }
                Action::None
            }
            KeyCode::Left | KeyCode::Up => {
                match self.focus {
                    Focus::Schedule => {
                        self.preset_index = (self.preset_index + PRESETS.len() - 1) % PRESETS.len();
                    }
                    Focus::Channels if !self.channels.is_empty() => {
                        self.channel_cursor =
                            (self.channel_cursor + self.channels.len() - 1) % self.channels.len();
                    }
                    _ => {}
                }
                Action::None
            }
            KeyCode::Right | KeyCode::Down => {
                match self.focus {
                    Focus::Schedule => {
                        self.preset_index = (self.preset_index + 1) % PRESETS.len();
                    }
                    Focus::Channels if !self.channels.is_empty() => {
                        self.channel_cursor = (self.channel_cursor + 1) % self.channels.len();
                    }
                    _ => {}
                }
                Action::None
            }
            KeyCode::Char(c) if self.focus == Focus::Text => {
                self.text.push(c);
                self.error = None;
                Action::None
            }
            KeyCode::Backspace if self.focus == Focus::Text => {
                self.text.pop();
                self.error = None;
                Action::None
            }
            _ => Action::None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let height = 13 + self.channels.len().min(4) as u16;
        let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
        f.render_widget(Clear, dialog_area);

        let block = common::create_dialog_block(" New reminder ", Color::Green);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        // Reminder text input
        let text_title = if self.focus == Focus::Text { "Reminder ◀" } else { "Reminder" };
        let input = common::create_input_paragraph(&self.text, text_title);
        f.render_widget(input, Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 3));

        // Schedule presets
        let mut preset_spans = vec![Span::styled(
            if self.focus == Focus::Schedule { "Send ◀ " } else { "Send   " },
            Style::default().fg(Color::Gray),
        )];
        for (index, (label, _)) in PRESETS.iter().enumerate() {
            let style = if index == self.preset_index {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            preset_spans.push(Span::styled(format!(" {label} "), style));
        }
        f.render_widget(
            Paragraph::new(Line::from(preset_spans)),
            Rect::new(inner.x + 1, inner.y + 4, inner.width.saturating_sub(2), 1),
        );

        // Channel checkboxes
        let channels_title = if self.focus == Focus::Channels { "Channels ◀" } else { "Channels" };
        f.render_widget(
            Paragraph::new(channels_title).style(Style::default().fg(Color::Gray)),
            Rect::new(inner.x + 1, inner.y + 6, inner.width.saturating_sub(2), 1),
        );

        if self.channels.is_empty() {
            f.render_widget(
                Paragraph::new("No verified channels - add and verify one first")
                    .style(Style::default().fg(Color::Yellow)),
                Rect::new(inner.x + 3, inner.y + 7, inner.width.saturating_sub(4), 1),
            );
        }

        for (index, channel) in self.channels.iter().enumerate().take(4) {
            let config = registry::config_for(channel.channel_type);
            let checked = if self.selected[index] { "[x]" } else { "[ ]" };
            let cursor = if self.focus == Focus::Channels && index == self.channel_cursor {
                "▶ "
            } else {
                "  "
            };
            let line = format!("{cursor}{checked} {} {}", config.icon, channel.identifier);
            let style = if self.selected[index] {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            f.render_widget(
                Paragraph::new(line).style(style),
                Rect::new(inner.x + 1, inner.y + 7 + index as u16, inner.width.saturating_sub(2), 1),
            );
        }

        // Error line
        if let Some(error) = &self.error {
            f.render_widget(
                common::create_error_line(error),
                Rect::new(
                    inner.x + 1,
                    inner.y + inner.height.saturating_sub(3),
                    inner.width.saturating_sub(2),
                    1,
                ),
            );
        }

        let instructions = common::create_instructions_paragraph(&[
            common::shortcuts::TAB_SELECT,
            ("Space", Color::Cyan, " Toggle channel"),
            common::shortcuts::SEPARATOR,
            ("Enter", Color::Green, " Create"),
            common::shortcuts::SEPARATOR,
            common::shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(
            instructions,
            Rect::new(
                inner.x + 1,
                inner.y + inner.height.saturating_sub(1),
                inner.width.saturating_sub(2),
                1,
            ),
        );
    }
}
