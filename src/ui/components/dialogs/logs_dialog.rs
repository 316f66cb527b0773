//! In-app log viewer dialog, newest entries first.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Clear, List, ListItem},
    Frame,
};

use super::common;
use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;

pub struct LogsDialog {
    logger: Logger,
    scroll_offset: usize,
}

impl LogsDialog {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            scroll_offset: 0,
        }
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Char('c') => {
                self.logger.clear();
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('G') => Action::HideDialog,
            _ => Action::None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let dialog_area = LayoutManager::centered_rect(80, 70, area);
        f.render_widget(Clear, dialog_area);

        let block = common::create_dialog_block(DIALOG_TITLE_LOGS, Color::Magenta);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let logs = self.logger.get_logs();
        let visible_height = inner.height.saturating_sub(2) as usize;
        let max_offset = logs.len().saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_offset);

        let items: Vec<ListItem> = logs
            .iter()
            .skip(self.scroll_offset)
            .take(visible_height)
            .map(|entry| ListItem::new(entry.clone()).style(Style::default().fg(Color::Gray)))
            .collect();

        let list = List::new(items);
        f.render_widget(
            list,
            Rect::new(
                inner.x + 1,
                inner.y,
                inner.width.saturating_sub(2),
                inner.height.saturating_sub(2),
            ),
        );

        let instructions = common::create_instructions_paragraph(&[
            ("j/k", Color::Cyan, " Scroll"),
            common::shortcuts::SEPARATOR,
            ("c", Color::Yellow, " Clear"),
            common::shortcuts::SEPARATOR,
            ("Esc", Color::Red, " Close"),
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
