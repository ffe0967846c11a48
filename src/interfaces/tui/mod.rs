//! Terminal User Interface (TUI) module
//!
//! Interactive form for shortening links and tracking their clicks

use std::io::{self, Stderr};
use std::sync::Arc;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tokio::time::Instant;
use tracing::{error, info};

pub mod action;
pub mod app;
pub mod clipboard;
mod constants;
mod event_handler;
mod qr;
mod ui;

use crate::client::HttpApi;
use crate::config::AppConfig;
use crate::errors::{LinkpaneError, Result};
use app::{App, AppSettings};
use clipboard::ClipboardSink;
use ui::ui;

type CrosstermTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    let api = HttpApi::from_config(config);
    info!("Using shortener API at {}", api.base_url());

    let mut app = App::new(
        Arc::new(api),
        AppSettings::from_config(config),
        ClipboardSink::System,
    );

    // Setup terminal
    enable_raw_mode().map_err(terminal_error)?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableBracketedPaste).map_err(terminal_error)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stderr)).map_err(terminal_error)?;

    app.start();
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(terminal_error)?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    if let Err(e) = &res {
        error!("TUI exited with error: {}", e);
    }
    res
}

/// Main application loop
fn run_app(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app)).map_err(terminal_error)?;

        // 等待输入，最多等到下一个去抖截止时间
        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout).map_err(terminal_error)? {
            let action = match event::read().map_err(terminal_error)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    event_handler::handle_key_event(app, key)
                }
                Event::Paste(text) => event_handler::handle_paste(app, text),
                _ => action::Action::Noop,
            };
            if action.should_quit() {
                info!("Quit requested");
            }
            app.apply(action);
        }

        app.tick(Instant::now());
        app.drain_completions();

        if app.should_quit {
            return Ok(());
        }
    }
}

fn terminal_error(e: io::Error) -> LinkpaneError {
    LinkpaneError::terminal(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ratatui::backend::TestBackend;

    use crate::client::{ClientError, HistoryEntry, PreviewResult, ShortenerApi, StatsResult};
    use crate::form::{LookupOutcome, Msg};
    use crate::interfaces::tui::app::CurrentScreen;

    struct OfflineApi;

    #[async_trait]
    impl ShortenerApi for OfflineApi {
        async fn preview(&self, _url: &str) -> std::result::Result<PreviewResult, ClientError> {
            Err(ClientError::Transport("offline".into()))
        }
        async fn stats_by_short(
            &self,
            _code: &str,
        ) -> std::result::Result<StatsResult, ClientError> {
            Err(ClientError::Transport("offline".into()))
        }
        async fn stats_by_original(
            &self,
            _url: &str,
        ) -> std::result::Result<StatsResult, ClientError> {
            Err(ClientError::Transport("offline".into()))
        }
        async fn shorten(&self, _url: &str) -> std::result::Result<String, ClientError> {
            Err(ClientError::Transport("offline".into()))
        }
        async fn history(&self) -> std::result::Result<Vec<HistoryEntry>, ClientError> {
            Err(ClientError::Transport("offline".into()))
        }
    }

    fn offline_app() -> App {
        App::new(
            Arc::new(OfflineApi),
            AppSettings::default(),
            ClipboardSink::memory(),
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_shorten_form() {
        let app = offline_app();
        let screen = render(&app);
        assert!(screen.contains("linkpane"));
        assert!(screen.contains("Shorten Mode"));
        assert!(screen.contains("Track Mode"));
        assert!(screen.contains("Shorten"));
        assert!(screen.contains("Loading history..."));
    }

    #[test]
    fn test_renders_stats_card() {
        let mut app = offline_app();
        app.dispatch(Msg::ToggleTracking);
        app.dispatch(Msg::InputChanged("abc123".into()));

        let effects = app.state.update(Msg::Submit);
        let ticket = effects
            .iter()
            .find_map(|e| match e {
                crate::form::Effect::Lookup { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .unwrap();

        app.dispatch(Msg::LookupCompleted {
            ticket,
            outcome: LookupOutcome::Stats(StatsResult {
                total_clicks: 5,
                ..StatsResult::zeroed()
            }),
        });

        let screen = render(&app);
        assert!(screen.contains("Track by Short URL"));
        assert!(screen.contains("Clicks: 5"));
        assert!(screen.contains("Geographic Distribution"));
    }

    #[test]
    fn test_help_overlays_form() {
        let mut app = offline_app();
        app.switch_screen(CurrentScreen::Help);
        let screen = render(&app);
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("linkpane"));
    }
}
