//! Portfolio refresh flow.

use crate::api::AnalysisService;
use crate::state::{Action, Store};

/// Run one fetch-render cycle for aggregate account valuation.
///
/// Success overwrites all four displayed fields at once; failure leaves
/// them at their prior values and surfaces only in the transcript.
pub async fn refresh_portfolio(service: &dyn AnalysisService, store: &mut Store) {
    match service.portfolio().await {
        Ok(snapshot) => store.reduce(Action::PortfolioLoaded(snapshot)),
        Err(err) => store.reduce(Action::PortfolioFailed(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockAnalysisService, PortfolioSnapshot};
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn test_store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(&[], tx)
    }

    #[tokio::test]
    async fn test_success_overwrites_fields() {
        let mut service = MockAnalysisService::new();
        service.expect_portfolio().times(1).returning(|| {
            Ok(PortfolioSnapshot {
                cash: 10_000.0,
                positions_value: 5_250.5,
                total_value: 15_250.5,
                total_pnl: 250.5,
                total_pnl_pct: 1.67,
            })
        });

        let mut store = test_store();
        refresh_portfolio(&service, &mut store).await;

        let snapshot = store.portfolio.snapshot.unwrap();
        assert_eq!(snapshot.total_value, 15_250.5);
        assert_eq!(store.console.last(), Some("Portfolio updated"));
    }

    #[tokio::test]
    async fn test_failure_is_silent_except_transcript() {
        let mut service = MockAnalysisService::new();
        service
            .expect_portfolio()
            .times(1)
            .returning(|| Err(Error::application("timed out")));

        let mut store = test_store();
        store.reduce(Action::PortfolioLoaded(PortfolioSnapshot {
            cash: 1.0,
            positions_value: 2.0,
            total_value: 3.0,
            total_pnl: 4.0,
            total_pnl_pct: 5.0,
        }));

        refresh_portfolio(&service, &mut store).await;

        // Prior values are untouched.
        let snapshot = store.portfolio.snapshot.unwrap();
        assert_eq!(snapshot.total_value, 3.0);
        assert_eq!(store.console.last(), Some("Portfolio error: timed out"));
    }
}
