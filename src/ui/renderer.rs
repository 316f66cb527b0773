//! Terminal setup and the main event loop.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::logger::Logger;
use crate::service::DataService;
use crate::ui::app::AppComponent;
use crate::ui::core::EventHandler;

/// Run the TUI until the user quits. Owns terminal setup and teardown; the
/// terminal is restored even when the loop exits with an error.
pub async fn run_app(service: DataService, logger: Logger, config: Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(service, logger, config);
    app.init().await;

    let result = event_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppComponent,
) -> Result<()> {
    let mut events = EventHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;
        let event = events.next_event().await?;
        app.handle_event(event).await;
    }

    Ok(())
}
