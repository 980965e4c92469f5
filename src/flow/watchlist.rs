//! Watchlist refresh flow.

use crate::api::AnalysisService;
use crate::state::{Action, Store};
use tracing::warn;

/// Refresh every watchlist row, strictly one symbol at a time.
///
/// Each quote request completes (either way) before the next is issued, so
/// total latency is bounded by the sum of individual latencies. A failed
/// symbol keeps its previous cell, goes to the diagnostic log only, and
/// never aborts the batch; the transcript gets exactly one completion line
/// after all symbols are processed.
pub async fn refresh_watchlist(service: &dyn AnalysisService, store: &mut Store) {
    for symbol in store.watchlist.symbols() {
        match service.quote(&symbol).await {
            Ok(quote) => store.reduce(Action::QuoteUpdated {
                symbol,
                price: quote.price,
            }),
            Err(err) => {
                warn!(symbol = %symbol, error = %err, "watchlist quote failed");
            }
        }
    }

    store.reduce(Action::WatchlistCompleted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockAnalysisService, Quote};
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn roster() -> Vec<String> {
        ["AAPL", "MSFT", "NVDA", "TSLA", "GOOGL"]
            .map(String::from)
            .to_vec()
    }

    fn test_store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(&roster(), tx)
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_batch() {
        let mut service = MockAnalysisService::new();
        service.expect_quote().times(5).returning(|symbol| {
            if symbol == "NVDA" {
                Err(Error::application("quote source down"))
            } else {
                Ok(Quote { price: Some(100.0) })
            }
        });

        let mut store = test_store();
        // The failing row carries a previous value it must retain.
        store.reduce(Action::QuoteUpdated {
            symbol: "NVDA".to_string(),
            price: Some(877.35),
        });

        refresh_watchlist(&service, &mut store).await;

        for row in store.watchlist.rows() {
            if row.symbol == "NVDA" {
                assert_eq!(row.price, Some(877.35));
            } else {
                assert_eq!(row.price, Some(100.0));
            }
        }

        // Exactly one completion line regardless of per-symbol outcomes.
        let completions = store
            .console
            .lines()
            .iter()
            .filter(|l| *l == "Watchlist updated")
            .count();
        assert_eq!(completions, 1);
        assert!(store.watchlist.last_updated.is_some());
    }

    #[tokio::test]
    async fn test_absent_price_renders_as_absent() {
        let mut service = MockAnalysisService::new();
        service
            .expect_quote()
            .times(5)
            .returning(|_| Ok(Quote { price: None }));

        let mut store = test_store();
        store.reduce(Action::QuoteUpdated {
            symbol: "AAPL".to_string(),
            price: Some(150.0),
        });

        refresh_watchlist(&service, &mut store).await;

        // A successful quote with no price overwrites the cell to absent.
        assert!(store.watchlist.rows().iter().all(|r| r.price.is_none()));
    }

    #[tokio::test]
    async fn test_requests_follow_roster_order() {
        let order = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen = order.clone();

        let mut service = MockAnalysisService::new();
        service.expect_quote().times(5).returning(move |symbol| {
            seen.lock().unwrap().push(symbol.to_string());
            Ok(Quote { price: Some(1.0) })
        });

        let mut store = test_store();
        refresh_watchlist(&service, &mut store).await;

        assert_eq!(*order.lock().unwrap(), roster());
    }
}
