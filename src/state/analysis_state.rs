//! Analysis request state and the rendered result card.

use crate::api::{
    AnalysisResult, TradeAction, ML_PREDICTOR, SENTIMENT_ANALYST, TECHNICAL_ANALYST,
};
use crate::signal::{bar_percent, ClassifiedSignal};

/// Everything the result card displays for one completed analysis.
///
/// The decision row follows the service's own `action` field; the
/// signal-derived category may disagree with it and the card does not
/// reconcile the two.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisCard {
    pub symbol: String,
    pub price: f64,
    /// Aggregate signal, driving the bar indicator only.
    pub signal: f64,
    pub technical: ClassifiedSignal,
    pub sentiment: ClassifiedSignal,
    pub ml: ClassifiedSignal,
    pub action: TradeAction,
    confidence: f64,
}

impl AnalysisCard {
    /// Build the card from a service result.
    pub fn from_result(result: &AnalysisResult) -> Self {
        let agent = |key: &str| ClassifiedSignal::from_value(result.signals.get(key).copied());

        Self {
            symbol: result.symbol.clone(),
            price: result.price,
            signal: result.signal,
            technical: agent(TECHNICAL_ANALYST),
            sentiment: agent(SENTIMENT_ANALYST),
            ml: agent(ML_PREDICTOR),
            action: result.action,
            confidence: result.confidence,
        }
    }

    /// Bar indicator position in percent; off-scale for out-of-range signals.
    pub fn bar_percent(&self) -> f64 {
        bar_percent(self.signal)
    }

    /// Confidence as a rounded whole-number percentage.
    pub fn confidence_percent(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }
}

/// Phase of the analysis request lifecycle. Transitions are forced:
/// idle → requesting → (complete | failed) → idle on the next request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Requesting {
        symbol: String,
    },
    Complete(Box<AnalysisCard>),
    /// Terminal error display: the service's own message for semantic
    /// errors, a generic connection message for transport failures.
    Failed {
        message: String,
    },
}

/// State of the analysis result region.
#[derive(Debug, Clone, Default)]
pub struct AnalysisState {
    pub phase: AnalysisPhase,
}

impl AnalysisState {
    /// Enter the requesting phase for a symbol.
    pub fn begin(&mut self, symbol: String) {
        self.phase = AnalysisPhase::Requesting { symbol };
    }

    /// Render a completed analysis.
    pub fn complete(&mut self, result: &AnalysisResult) {
        self.phase = AnalysisPhase::Complete(Box::new(AnalysisCard::from_result(result)));
    }

    /// Render a terminal error message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = AnalysisPhase::Failed {
            message: message.into(),
        };
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Requesting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalCategory;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn sample_result() -> AnalysisResult {
        let mut signals = HashMap::new();
        signals.insert(TECHNICAL_ANALYST.to_string(), 0.5);
        signals.insert(SENTIMENT_ANALYST.to_string(), -0.1);
        signals.insert(ML_PREDICTOR.to_string(), 0.3);

        AnalysisResult {
            symbol: "AAPL".to_string(),
            price: 150.25,
            signal: 0.42,
            signals,
            action: TradeAction::Buy,
            confidence: 0.8,
        }
    }

    #[test]
    fn test_card_from_result() {
        let card = AnalysisCard::from_result(&sample_result());

        assert_eq!(card.symbol, "AAPL");
        assert_eq!(card.price, 150.25);
        assert_eq!(card.bar_percent(), 71.0);
        assert_eq!(card.technical.display, "+0.50");
        assert_eq!(card.technical.category, SignalCategory::Buy);
        assert_eq!(card.sentiment.display, "-0.10");
        assert_eq!(card.sentiment.category, SignalCategory::Hold);
        assert_eq!(card.ml.display, "+0.30");
        assert_eq!(card.action, TradeAction::Buy);
        assert_eq!(card.confidence_percent(), 80);
    }

    #[test]
    fn test_card_missing_agent_signal_is_neutral() {
        let mut result = sample_result();
        result.signals.remove(ML_PREDICTOR);

        let card = AnalysisCard::from_result(&result);
        assert_eq!(card.ml.display, "--");
        assert_eq!(card.ml.category, SignalCategory::Neutral);
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = AnalysisState::default();
        assert_eq!(state.phase, AnalysisPhase::Idle);

        state.begin("AAPL".to_string());
        assert!(state.is_requesting());

        state.complete(&sample_result());
        assert!(matches!(state.phase, AnalysisPhase::Complete(_)));

        state.begin("MSFT".to_string());
        state.fail("symbol not found");
        assert_eq!(
            state.phase,
            AnalysisPhase::Failed {
                message: "symbol not found".to_string()
            }
        );
    }
}
