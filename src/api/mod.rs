//! Analysis service integration layer.
//!
//! The remote service is opaque: three read-only endpoints with defined
//! response contracts. Flows consume it through the [`AnalysisService`]
//! trait so they can be exercised against a mock.

mod client;
mod types;

pub use client::ApiClient;
pub use types::{
    AnalysisResult, AnalyzeResponse, PortfolioSnapshot, Quote, TradeAction, ML_PREDICTOR,
    SENTIMENT_ANALYST, TECHNICAL_ANALYST,
};

use crate::error::Result;
use async_trait::async_trait;

/// The analysis service boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Run a full analysis for one symbol. A semantic `{error}` payload is a
    /// successful call; `Err` is reserved for transport failures.
    async fn analyze(&self, symbol: &str) -> Result<AnalyzeResponse>;

    /// Fetch aggregate account valuation.
    async fn portfolio(&self) -> Result<PortfolioSnapshot>;

    /// Fetch the current quote for one symbol.
    async fn quote(&self, symbol: &str) -> Result<Quote>;
}
