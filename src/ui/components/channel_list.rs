//! Channel list component.
//!
//! Shows the registered notification channels with their verification state.
//! Unconfirmed channels can resume verification from here ('v'), and 'c'
//! opens the registration flow for a new channel.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::api::Channel;
use crate::channels::registry;
use crate::icons;
use crate::ui::core::{Action, Component, DialogType};

pub struct ChannelListComponent {
    channels: Vec<Channel>,
    selected_index: usize,
    list_state: ListState,
}

impl ChannelListComponent {
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
        }
    }

    pub fn update_data(&mut self, channels: Vec<Channel>) {
        self.channels = channels;
        if self.selected_index >= self.channels.len() {
            self.selected_index = self.channels.len().saturating_sub(1);
        }
    }

    pub fn selected_channel(&self) -> Option<&Channel> {
        self.channels.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if !self.channels.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.channels.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.channels.is_empty() {
            self.selected_index = (self.selected_index + self.channels.len() - 1) % self.channels.len();
        }
    }

    fn channel_line(channel: &Channel) -> Line<'static> {
        let config = registry::config_for(channel.channel_type);

        let mut spans = vec![
            Span::raw(format!("{} ", config.icon)),
            Span::styled(
                format!("{:<10}", config.label),
                Style::default().fg(Color::White),
            ),
            Span::styled(channel.identifier.clone(), Style::default().fg(Color::Gray)),
        ];

        if channel.confirmed {
            spans.push(Span::styled(
                format!("  {} verified", icons::CHANNEL_CONFIRMED),
                Style::default().fg(Color::Green),
            ));
        } else {
            spans.push(Span::styled(
                format!("  {} unverified - press 'v'", icons::CHANNEL_UNCONFIRMED),
                Style::default().fg(Color::Yellow),
            ));
        }

        if channel.primary {
            spans.push(Span::styled(
                format!(" {}", icons::CHANNEL_PRIMARY),
                Style::default().fg(Color::Cyan),
            ));
        }

        Line::from(spans)
    }
}

impl Component for ChannelListComponent {
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
            KeyCode::Char('v') => match self.selected_channel() {
                Some(channel) if !channel.confirmed => Action::ShowDialog(DialogType::ChannelVerification {
                    existing: Some(channel.clone()),
                }),
                _ => Action::None,
            },
            KeyCode::Char('d') => match self.selected_channel() {
                Some(channel) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    item_type: "channel".to_string(),
                    item_id: channel.id.clone(),
                    item_label: channel.identifier.clone(),
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.channels.is_empty() {
            let empty = List::new([ListItem::new("No channels registered. Press 'c' to add one.")])
                .block(Block::default().borders(Borders::ALL).title(" Channels "));
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = self.channels.iter().map(|c| ListItem::new(Self::channel_line(c))).collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Channels "))
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        self.list_state.select(Some(self.selected_index));
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}

impl Default for ChannelListComponent {
    fn default() -> Self {
        Self::new()
    }
}
