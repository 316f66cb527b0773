//! Modal error dialog.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common;
use crate::icons;
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;

pub struct ErrorDialog {
    message: String,
}

impl ErrorDialog {
    pub fn new(message: String) -> Self {
        Self { message }
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
            _ => Action::None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let dialog_area = LayoutManager::centered_rect(50, 30, area);
        f.render_widget(Clear, dialog_area);

        let title = format!(" {} Error ", icons::ICON_ERROR);
        let block = common::create_dialog_block(&title, Color::Red);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        f.render_widget(
            Paragraph::new(self.message.clone())
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: true }),
            Rect::new(
                inner.x + 1,
                inner.y + 1,
                inner.width.saturating_sub(2),
                inner.height.saturating_sub(3),
            ),
        );

        let instructions = common::create_instructions_paragraph(&[("Enter/Esc", Color::Gray, " Dismiss")]);
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
