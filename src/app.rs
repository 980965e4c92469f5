//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, flows, and rendering.

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::flow;
use crate::state::{Action, InputMode, Store};
use crate::ui::Ui;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// API client.
    client: ApiClient,
    /// When portfolio and watchlist were last auto-refreshed.
    last_refresh: Instant,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store with the fixed watchlist roster
        let store = Store::new(&config.watchlist, action_tx);

        // Create event handler
        let event_handler = EventHandler::new(config.keybindings.clone());

        // Create API client
        let client = ApiClient::new(config.api.clone())?;

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            client,
            last_refresh: Instant::now(),
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        self.store.reduce(Action::Log(format!(
            "Connected to {}",
            self.config.api.base_url
        )));

        // Queue the initial data load; the first frame renders before the
        // requests go out.
        self.store.dispatch(Action::RefreshAll)?;

        // Main event loop
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store);
            })?;

            // Handle events and actions
            tokio::select! {
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action).await;
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action).await;
                }
            }

            self.maybe_auto_refresh().await;

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an action. Flow triggers are awaited here; everything else
    /// goes straight to the reducer.
    async fn handle_action(&mut self, action: Action) {
        match action {
            Action::SubmitAnalysis => {
                let input = self.store.app.input_buffer.clone();
                self.store.reduce(Action::SetInputMode(InputMode::Normal));
                flow::run_analysis(
                    &self.client,
                    &mut self.store,
                    &input,
                    &self.config.default_symbol,
                )
                .await;
            }
            Action::RefreshPortfolio => {
                flow::refresh_portfolio(&self.client, &mut self.store).await;
            }
            Action::RefreshWatchlist => {
                flow::refresh_watchlist(&self.client, &mut self.store).await;
            }
            Action::RefreshAll => {
                self.refresh_all().await;
            }
            other => self.store.reduce(other),
        }
    }

    /// Refresh portfolio and watchlist.
    async fn refresh_all(&mut self) {
        flow::refresh_portfolio(&self.client, &mut self.store).await;
        flow::refresh_watchlist(&self.client, &mut self.store).await;
        self.last_refresh = Instant::now();
    }

    /// Re-trigger the periodic refreshes once the configured interval has
    /// elapsed. Disabled when the interval is zero.
    async fn maybe_auto_refresh(&mut self) {
        let secs = self.config.ui.auto_refresh_secs;
        if secs == 0 {
            return;
        }
        if self.last_refresh.elapsed() >= Duration::from_secs(secs) {
            self.refresh_all().await;
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
