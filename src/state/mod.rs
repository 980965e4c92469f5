//! State management for Tickerdeck.
//!
//! Centralized state with a unidirectional data flow: flows and input
//! handlers describe what happened as an [`Action`], and [`Store::reduce`]
//! is the only place widget state mutates. Transitions that touch several
//! widgets at once (the analysis lifecycle) are applied as one batch here,
//! which is what keeps the agent indicators, transcript, and result region
//! in step.

mod agent_state;
mod analysis_state;
mod app_state;
mod console_state;
mod portfolio_state;
mod watchlist_state;

pub use agent_state::{AgentIndicator, AgentPanelState, AgentStatus};
pub use analysis_state::{AnalysisCard, AnalysisPhase, AnalysisState};
pub use app_state::{AppState, InputMode};
pub use console_state::ConsoleState;
pub use portfolio_state::PortfolioState;
pub use watchlist_state::{WatchlistRow, WatchlistState};

use crate::api::{AnalysisResult, PortfolioSnapshot};
use crate::error::Result;
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Input editing
    SetInputMode(InputMode),
    InputChar(char),
    InputBackspace,

    // Flow triggers (handled by the app loop, not the reducer)
    SubmitAnalysis,
    RefreshPortfolio,
    RefreshWatchlist,
    RefreshAll,

    // Analysis request lifecycle
    AnalysisStarted(String),
    AnalysisCompleted(AnalysisResult),
    /// Service answered with a semantic error payload.
    AnalysisRejected(String),
    /// Transport failure with whatever detail was available.
    AnalysisFailed(String),

    // Portfolio refresh lifecycle
    PortfolioLoaded(PortfolioSnapshot),
    PortfolioFailed(String),

    // Watchlist refresh lifecycle
    QuoteUpdated {
        symbol: String,
        price: Option<f64>,
    },
    WatchlistCompleted,

    // Console
    Log(String),

    // Quit
    Quit,
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Agent indicator panel.
    pub agents: AgentPanelState,
    /// Console transcript.
    pub console: ConsoleState,
    /// Analysis result region.
    pub analysis: AnalysisState,
    /// Portfolio widget.
    pub portfolio: PortfolioState,
    /// Watchlist table.
    pub watchlist: WatchlistState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store. The watchlist row set is fixed here and never
    /// grows or shrinks afterwards.
    pub fn new(watchlist_symbols: &[String], action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            app: AppState::default(),
            agents: AgentPanelState::default(),
            console: ConsoleState::default(),
            analysis: AnalysisState::default(),
            portfolio: PortfolioState::default(),
            watchlist: WatchlistState::new(watchlist_symbols),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Input editing
            Action::SetInputMode(mode) => self.app.input_mode = mode,
            Action::InputChar(c) => self.app.push_char(c),
            Action::InputBackspace => self.app.pop_char(),

            // Flow triggers are orchestrated by the app loop; reaching the
            // reducer they are no-ops.
            Action::SubmitAnalysis
            | Action::RefreshPortfolio
            | Action::RefreshWatchlist
            | Action::RefreshAll => {}

            // Analysis lifecycle. Begin and every terminal branch move the
            // agent indicators as a batch, so they are never left running
            // once the flow settles.
            Action::AnalysisStarted(symbol) => {
                self.console.log(format!("Analyzing {symbol}..."));
                self.analysis.begin(symbol);
                self.agents.set_status(AgentStatus::Running);
            }
            Action::AnalysisCompleted(result) => {
                self.console.log(format!(
                    "{}: {} (signal: {:.2})",
                    result.symbol, result.action, result.signal
                ));
                self.analysis.complete(&result);
                self.agents.set_status(AgentStatus::Idle);
            }
            Action::AnalysisRejected(message) => {
                self.console.log(format!("Error: {message}"));
                self.analysis.fail(message);
                self.agents.set_status(AgentStatus::Idle);
            }
            Action::AnalysisFailed(detail) => {
                self.console.log(format!("Connection error: {detail}"));
                self.analysis.fail("Connection error");
                self.agents.set_status(AgentStatus::Idle);
            }

            // Portfolio lifecycle. Failure leaves all displayed fields at
            // their prior values; the transcript line is the only trace.
            Action::PortfolioLoaded(snapshot) => {
                self.portfolio.apply(snapshot);
                self.console.log("Portfolio updated");
            }
            Action::PortfolioFailed(detail) => {
                self.console.log(format!("Portfolio error: {detail}"));
            }

            // Watchlist lifecycle. Unknown symbols fall through silently.
            Action::QuoteUpdated { symbol, price } => {
                self.watchlist.set_price(&symbol, price);
            }
            Action::WatchlistCompleted => {
                self.watchlist.last_updated = Some(chrono::Utc::now());
                self.console.log("Watchlist updated");
            }

            Action::Log(message) => self.console.log(message),

            Action::Quit => self.app.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TradeAction;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn test_store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(&["AAPL".to_string(), "MSFT".to_string()], tx)
    }

    #[test]
    fn test_analysis_started_moves_all_widgets() {
        let mut store = test_store();
        store.reduce(Action::AnalysisStarted("AAPL".to_string()));

        assert!(store.analysis.is_requesting());
        assert!(store.agents.all(AgentStatus::Running));
        assert_eq!(store.console.last(), Some("Analyzing AAPL..."));
    }

    #[test]
    fn test_analysis_completed_logs_decision_line() {
        let mut store = test_store();
        store.reduce(Action::AnalysisStarted("AAPL".to_string()));
        store.reduce(Action::AnalysisCompleted(AnalysisResult {
            symbol: "AAPL".to_string(),
            price: 150.25,
            signal: 0.42,
            signals: HashMap::new(),
            action: TradeAction::Buy,
            confidence: 0.8,
        }));

        assert_eq!(store.console.last(), Some("AAPL: BUY (signal: 0.42)"));
        assert!(store.agents.all(AgentStatus::Idle));
        assert!(matches!(store.analysis.phase, AnalysisPhase::Complete(_)));
    }

    #[test]
    fn test_analysis_rejected_renders_service_message() {
        let mut store = test_store();
        store.reduce(Action::AnalysisStarted("XXXX".to_string()));
        store.reduce(Action::AnalysisRejected("symbol not found".to_string()));

        assert_eq!(
            store.analysis.phase,
            AnalysisPhase::Failed {
                message: "symbol not found".to_string()
            }
        );
        assert_eq!(store.console.last(), Some("Error: symbol not found"));
        assert!(store.agents.all(AgentStatus::Idle));
    }

    #[test]
    fn test_analysis_failed_renders_generic_message() {
        let mut store = test_store();
        store.reduce(Action::AnalysisStarted("AAPL".to_string()));
        store.reduce(Action::AnalysisFailed("connection refused".to_string()));

        assert_eq!(
            store.analysis.phase,
            AnalysisPhase::Failed {
                message: "Connection error".to_string()
            }
        );
        assert_eq!(
            store.console.last(),
            Some("Connection error: connection refused")
        );
        assert!(store.agents.all(AgentStatus::Idle));
    }

    #[test]
    fn test_portfolio_failure_keeps_prior_snapshot() {
        let mut store = test_store();
        let snapshot = PortfolioSnapshot {
            cash: 10_000.0,
            positions_value: 5_000.0,
            total_value: 15_000.0,
            total_pnl: 500.0,
            total_pnl_pct: 3.45,
        };
        store.reduce(Action::PortfolioLoaded(snapshot));
        store.reduce(Action::PortfolioFailed("timed out".to_string()));

        let kept = store.portfolio.snapshot.unwrap();
        assert_eq!(kept.total_value, 15_000.0);
        assert_eq!(store.console.last(), Some("Portfolio error: timed out"));
    }

    #[test]
    fn test_quote_for_unknown_symbol_is_dropped() {
        let mut store = test_store();
        store.reduce(Action::QuoteUpdated {
            symbol: "AMZN".to_string(),
            price: Some(1.0),
        });

        assert_eq!(store.watchlist.rows().len(), 2);
        assert!(store.watchlist.rows().iter().all(|r| r.price.is_none()));
    }
}
