//! Interactive dashboard.
//!
//! Single-threaded, cooperative: the event loop awaits registry operations
//! inline, so no operation races another and a reload always runs strictly
//! after the mutation that triggered it.

mod app;
mod ui;

use std::error::Error;
use std::io;
use std::sync::Arc;

use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, Event, KeyCode},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};

use crate::client::{HttpRegistry, LinkRegistry};
use crate::config::DashConfig;

use app::{App, CurrentScreen};
use ui::ui;

pub async fn run_tui(config: DashConfig) -> Result<(), Box<dyn Error>> {
    let registry: Arc<dyn LinkRegistry> = Arc::new(HttpRegistry::new(&config)?);
    let mut app = App::new(registry, config);
    app.reload().await;

    // setup terminal; the UI draws on stderr so logs on stdout stay intact
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    // restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };

        match app.current_screen {
            CurrentScreen::Dashboard if app.is_searching => match key.code {
                KeyCode::Esc => app.search_clear(),
                KeyCode::Enter => app.is_searching = false,
                KeyCode::Backspace => app.search_pop(),
                KeyCode::Char(c) => app.search_push(c),
                _ => {}
            },
            CurrentScreen::Dashboard => match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
                KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
                KeyCode::Char('/') => app.is_searching = true,
                KeyCode::Char('a') => app.open_add(),
                KeyCode::Char('d') => app.request_delete(),
                KeyCode::Char('v') | KeyCode::Enter => app.open_stats().await,
                KeyCode::Char('c') => app.show_short_url(),
                KeyCode::Char('h') => app.open_health().await,
                KeyCode::Char('r') => {
                    app.reload().await;
                    if app.collection.error().is_none() {
                        app.set_status("Links reloaded");
                    }
                }
                KeyCode::Esc if !app.collection.search_text().is_empty() => app.search_clear(),
                KeyCode::Char('?') => app.current_screen = CurrentScreen::Help,
                KeyCode::Char('q') => app.current_screen = CurrentScreen::Exiting,
                _ => {}
            },
            CurrentScreen::AddLink => match key.code {
                KeyCode::Enter => app.submit_add().await,
                KeyCode::Tab => app.toggle_add_field(),
                KeyCode::Esc => app.cancel_add(),
                KeyCode::Backspace => {
                    let field = app.active_field;
                    app.create_flow.backspace(field);
                }
                KeyCode::Char(c) => {
                    let field = app.active_field;
                    app.create_flow.type_char(field, c);
                }
                _ => {}
            },
            CurrentScreen::DeleteConfirm => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete().await,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.decline_delete(),
                _ => {}
            },
            CurrentScreen::Stats => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.close_stats(),
                _ => {}
            },
            CurrentScreen::Health => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                    app.current_screen = CurrentScreen::Dashboard;
                }
                _ => {}
            },
            CurrentScreen::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                    app.current_screen = CurrentScreen::Dashboard;
                }
                _ => {}
            },
            CurrentScreen::Exiting => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(()),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.current_screen = CurrentScreen::Dashboard;
                }
                _ => {}
            },
        }
    }
}
