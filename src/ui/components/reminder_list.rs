//! Reminder list component.
//!
//! Renders the reminders for the active view with status icon, text, a
//! human-readable schedule, and the channel badges the reminder delivers to.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::api::Reminder;
use crate::channels::registry;
use crate::icons;
use crate::ui::core::{Action, Component, DialogType, SidebarSelection};
use crate::utils::datetime;

pub struct ReminderListComponent {
    reminders: Vec<Reminder>,
    view: SidebarSelection,
    selected_index: usize,
    list_state: ListState,
    show_channel_badges: bool,
}

impl ReminderListComponent {
    pub fn new() -> Self {
        Self {
            reminders: Vec::new(),
            view: SidebarSelection::default(),
            selected_index: 0,
            list_state: ListState::default(),
            show_channel_badges: true,
        }
    }

    pub fn set_show_channel_badges(&mut self, show: bool) {
        self.show_channel_badges = show;
    }

    /// Replace the data and re-filter for the active view.
    pub fn update_data(&mut self, reminders: Vec<Reminder>, view: SidebarSelection) {
        self.view = view;
        self.reminders = reminders
            .into_iter()
            .filter(|r| match view {
                SidebarSelection::Today => !r.sent && datetime::is_today(&r.scheduled_at),
                SidebarSelection::Upcoming => !r.sent && datetime::is_upcoming(&r.scheduled_at),
                _ => true,
            })
            .collect();
        if self.selected_index >= self.reminders.len() {
            self.selected_index = self.reminders.len().saturating_sub(1);
        }
    }

    pub fn selected_reminder(&self) -> Option<&Reminder> {
        self.reminders.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if !self.reminders.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.reminders.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.reminders.is_empty() {
            self.selected_index = (self.selected_index + self.reminders.len() - 1) % self.reminders.len();
        }
    }

    fn reminder_line(&self, reminder: &Reminder) -> Line<'static> {
        let mut spans = vec![
            Span::raw(format!("{} ", icons::reminder_status_icon(reminder))),
            Span::styled(reminder.reminder_text.clone(), Style::default().fg(Color::White)),
            Span::styled(
                format!("  {}", datetime::format_human_datetime(&reminder.scheduled_at)),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        if self.show_channel_badges {
            for output in &reminder.outputs {
                let config = registry::config_for(output.channel_type);
                spans.push(Span::raw(format!(" {}", config.icon)));
            }
        }

        Line::from(spans)
    }
}

impl Component for ReminderListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Char('d') => match self.selected_reminder() {
                Some(reminder) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    item_type: "reminder".to_string(),
                    item_id: reminder.id.clone(),
                    item_label: reminder.reminder_text.clone(),
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(" {} ", self.view.label());

        if self.reminders.is_empty() {
            let empty = List::new([ListItem::new("No reminders here yet. Press 'a' to add one.")])
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = self.reminders.iter().map(|r| ListItem::new(self.reminder_line(r))).collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        self.list_state.select(Some(self.selected_index));
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}

impl Default for ReminderListComponent {
    fn default() -> Self {
        Self::new()
    }
}
