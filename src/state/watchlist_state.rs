//! Watchlist table state.

use chrono::{DateTime, Utc};

/// One row of the watchlist table.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchlistRow {
    pub symbol: String,
    pub price: Option<f64>,
}

/// State of the watchlist table. The row set is fixed when the state is
/// built; a refresh only mutates prices. Row identity is exact symbol
/// equality, and updates for unknown symbols are silently dropped.
#[derive(Debug, Clone, Default)]
pub struct WatchlistState {
    rows: Vec<WatchlistRow>,
    /// When the last full refresh finished.
    pub last_updated: Option<DateTime<Utc>>,
}

impl WatchlistState {
    /// Build the fixed row set from the configured roster, preserving order.
    /// Symbols are uppercased here once; rows and quote requests share the
    /// normalized form.
    pub fn new(symbols: &[String]) -> Self {
        Self {
            rows: symbols
                .iter()
                .map(|s| WatchlistRow {
                    symbol: s.to_uppercase(),
                    price: None,
                })
                .collect(),
            last_updated: None,
        }
    }

    /// The roster, in table order.
    pub fn symbols(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.symbol.clone()).collect()
    }

    /// Overwrite the price cell of the row whose symbol matches exactly.
    /// Returns false when no such row exists (the update is dropped).
    pub fn set_price(&mut self, symbol: &str, price: Option<f64>) -> bool {
        match self.rows.iter_mut().find(|r| r.symbol == symbol) {
            Some(row) => {
                row.price = price;
                true
            }
            None => false,
        }
    }

    /// All rows, in table order.
    pub fn rows(&self) -> &[WatchlistRow] {
        &self.rows
    }
}
