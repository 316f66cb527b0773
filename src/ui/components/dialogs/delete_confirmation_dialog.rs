//! Delete confirmation dialog for reminders and channels.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common;
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;

pub struct DeleteConfirmationDialog {
    item_type: String,
    item_id: String,
    item_label: String,
}

impl DeleteConfirmationDialog {
    pub fn new(item_type: String, item_id: String, item_label: String) -> Self {
        Self {
            item_type,
            item_id,
            item_label,
        }
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => match self.item_type.as_str() {
                "channel" => Action::DeleteChannel(self.item_id.clone()),
                _ => Action::DeleteReminder(self.item_id.clone()),
            },
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::HideDialog,
            _ => Action::None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
        f.render_widget(Clear, dialog_area);

        let block = common::create_dialog_block(" Confirm deletion ", Color::Red);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let message = format!("Delete {} \"{}\"?", self.item_type, self.item_label);
        f.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center),
            Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1),
        );

        let instructions = common::create_instructions_paragraph(&[
            ("y", Color::Red, " Delete"),
            common::shortcuts::SEPARATOR,
            ("n", Color::Green, " Keep"),
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
