//! Portfolio valuation state.

use crate::api::PortfolioSnapshot;
use chrono::{DateTime, Utc};

/// State of the portfolio widget. A failed refresh leaves the previous
/// snapshot untouched; the widget itself never shows an error.
#[derive(Debug, Clone, Default)]
pub struct PortfolioState {
    /// Last successfully fetched valuation, if any.
    pub snapshot: Option<PortfolioSnapshot>,
    /// When the snapshot was last overwritten.
    pub last_updated: Option<DateTime<Utc>>,
}

impl PortfolioState {
    /// Overwrite all displayed fields from a fresh snapshot.
    pub fn apply(&mut self, snapshot: PortfolioSnapshot) {
        self.snapshot = Some(snapshot);
        self.last_updated = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_overwrites_snapshot() {
        let mut state = PortfolioState::default();
        assert!(state.snapshot.is_none());

        state.apply(PortfolioSnapshot {
            cash: 10_000.0,
            positions_value: 5_250.5,
            total_value: 15_250.5,
            total_pnl: 250.5,
            total_pnl_pct: 1.67,
        });

        let snapshot = state.snapshot.unwrap();
        assert_eq!(snapshot.cash, 10_000.0);
        assert_eq!(snapshot.total_pnl_pct, 1.67);
        assert!(state.last_updated.is_some());
    }
}
