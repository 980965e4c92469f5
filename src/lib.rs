//! # Tickerdeck - Analysis Service TUI
//!
//! A terminal dashboard for a multi-agent stock analysis service. The
//! service itself is a black box reached over HTTP; this client owns the
//! request lifecycle, signal classification, and widget synchronization.
//!
//! ## Architecture
//!
//! - **App**: Core application state and lifecycle management
//! - **UI**: Layout and rendering logic
//! - **API**: Analysis service integration layer
//! - **Flow**: Request/render cycles (analysis, portfolio, watchlist)
//! - **State**: Centralized state management
//! - **Events**: Input handling and event processing
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod flow;
pub mod signal;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use signal::{bar_percent, ClassifiedSignal, SignalCategory};
