//! Analysis request flow.

use crate::api::{AnalysisService, AnalyzeResponse};
use crate::state::{Action, Store};

use super::normalize_symbol;

/// Run one fetch-classify-render cycle for a single symbol.
///
/// Entering the flow renders the in-progress placeholder, logs the attempt,
/// and sets every agent indicator running; exactly one request is issued,
/// and whichever way it resolves the indicators return to idle exactly once.
pub async fn run_analysis(
    service: &dyn AnalysisService,
    store: &mut Store,
    raw_input: &str,
    fallback: &str,
) {
    let symbol = normalize_symbol(raw_input, fallback);
    store.reduce(Action::AnalysisStarted(symbol.clone()));

    match service.analyze(&symbol).await {
        Ok(AnalyzeResponse::Completed(result)) => {
            store.reduce(Action::AnalysisCompleted(result));
        }
        Ok(AnalyzeResponse::Rejected { error }) => {
            store.reduce(Action::AnalysisRejected(error));
        }
        Err(err) => {
            store.reduce(Action::AnalysisFailed(err.to_string()));
        }
    }
}
