//! Sidebar component listing the available views.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::api::{Channel, Reminder};
use crate::ui::core::{Action, Component, SidebarSelection};
use crate::utils::datetime;

pub struct SidebarComponent {
    pub selection: SidebarSelection,
    channels: Vec<Channel>,
    reminders: Vec<Reminder>,
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            selection: SidebarSelection::default(),
            channels: Vec::new(),
            reminders: Vec::new(),
        }
    }

    pub fn update_data(&mut self, channels: Vec<Channel>, reminders: Vec<Reminder>) {
        self.channels = channels;
        self.reminders = reminders;
    }

    fn count_for(&self, view: SidebarSelection) -> usize {
        match view {
            SidebarSelection::Today => self
                .reminders
                .iter()
                .filter(|r| !r.sent && datetime::is_today(&r.scheduled_at))
                .count(),
            SidebarSelection::Upcoming => self
                .reminders
                .iter()
                .filter(|r| !r.sent && datetime::is_upcoming(&r.scheduled_at))
                .count(),
            SidebarSelection::All => self.reminders.len(),
            SidebarSelection::Channels => self.channels.len(),
        }
    }

    fn select_next(&mut self) -> Action {
        let views = SidebarSelection::all();
        let current = views.iter().position(|v| *v == self.selection).unwrap_or(0);
        let next = views[(current + 1) % views.len()];
        Action::NavigateToSidebar(next)
    }

    fn select_previous(&mut self) -> Action {
        let views = SidebarSelection::all();
        let current = views.iter().position(|v| *v == self.selection).unwrap_or(0);
        let previous = views[(current + views.len() - 1) % views.len()];
        Action::NavigateToSidebar(previous)
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') | KeyCode::PageDown => self.select_next(),
            KeyCode::Char('K') | KeyCode::PageUp => self.select_previous(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items: Vec<ListItem> = SidebarSelection::all()
            .into_iter()
            .map(|view| {
                let selected = view == self.selection;
                let style = if selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                let marker = if selected { "▶ " } else { "  " };
                let line = Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(view.label(), style),
                    Span::styled(
                        format!(" ({})", self.count_for(view)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Views "));
        f.render_widget(list, rect);
    }
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}
