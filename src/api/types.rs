//! Wire types for the analysis service.
//!
//! The service is a black box reached over HTTP; these types mirror its
//! JSON response shapes. Results are consumed once per request and never
//! cached.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Agent keys the result card reads out of the per-agent signal map.
pub const TECHNICAL_ANALYST: &str = "technical_analyst";
pub const SENTIMENT_ANALYST: &str = "sentiment_analyst";
pub const ML_PREDICTOR: &str = "ml_predictor";

/// The service's final decision label. Independent of the signal-derived
/// category; the two may disagree and are never reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Hold,
    Sell,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "BUY"),
            TradeAction::Hold => write!(f, "HOLD"),
            TradeAction::Sell => write!(f, "SELL"),
        }
    }
}

/// A successful per-symbol analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResult {
    pub symbol: String,
    pub price: f64,
    /// Aggregate signal, conventionally in [-1, 1] but not enforced.
    pub signal: f64,
    /// Per-agent sub-signals keyed by agent name; absent keys are allowed.
    #[serde(default)]
    pub signals: HashMap<String, f64>,
    pub action: TradeAction,
    /// In [0, 1].
    pub confidence: f64,
}

/// The analyze endpoint answers with either a result or a semantic error
/// payload; both arrive as HTTP 2xx-shaped JSON bodies in the happy
/// transport case, so decoding is untagged.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    /// The service declined the request (e.g. unknown symbol). A normal
    /// terminal outcome, not a transport fault.
    Rejected { error: String },
    Completed(AnalysisResult),
}

/// Aggregate account valuation, single currency.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PortfolioSnapshot {
    pub cash: f64,
    pub positions_value: f64,
    pub total_value: f64,
    pub total_pnl: f64,
    pub total_pnl_pct: f64,
}

/// Current quote for one symbol. Price may be absent.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub price: Option<f64>,
}
