//! Status bar component (bottom line of the screen).

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::icons;

pub struct StatusBar {
    pub loading: bool,
    pub info_message: Option<String>,
    pub error_message: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            loading: false,
            info_message: None,
            error_message: None,
        }
    }

    pub fn render(&self, f: &mut Frame, rect: Rect) {
        let mut spans = Vec::new();

        if self.loading {
            spans.push(Span::styled(
                format!("{} loading ", icons::ICON_LOADING),
                Style::default().fg(Color::Yellow),
            ));
        }

        if let Some(error) = &self.error_message {
            spans.push(Span::styled(error.clone(), Style::default().fg(Color::Red)));
        } else if let Some(info) = &self.info_message {
            spans.push(Span::styled(info.clone(), Style::default().fg(Color::Green)));
        } else {
            spans.push(Span::styled(
                "q quit • r refresh • a add reminder • c add channel • j/k move • J/K switch view • d delete",
                Style::default().fg(Color::DarkGray),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
