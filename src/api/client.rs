//! HTTP client for the analysis service.

use crate::api::{AnalysisService, AnalyzeResponse, PortfolioSnapshot, Quote};
use crate::config::ApiConfig;
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Typed client for the three service endpoints. All requests are
/// read-only and idempotent; a failed request is never retried here.
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, http })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl AnalysisService for ApiClient {
    async fn analyze(&self, symbol: &str) -> Result<AnalyzeResponse> {
        // The service reports semantic errors with a JSON {error} body and a
        // non-2xx status; both decode through the untagged response enum, so
        // the status itself is not treated as a transport fault.
        let response = self
            .http
            .get(self.endpoint("/api/analyze"))
            .query(&[("symbol", symbol)])
            .send()
            .await?
            .json::<AnalyzeResponse>()
            .await?;

        Ok(response)
    }

    async fn portfolio(&self) -> Result<PortfolioSnapshot> {
        let snapshot = self
            .http
            .get(self.endpoint("/api/portfolio"))
            .send()
            .await?
            .error_for_status()?
            .json::<PortfolioSnapshot>()
            .await?;

        Ok(snapshot)
    }

    async fn quote(&self, symbol: &str) -> Result<Quote> {
        let quote = self
            .http
            .get(self.endpoint("/api/quote"))
            .query(&[("symbol", symbol)])
            .send()
            .await?
            .error_for_status()?
            .json::<Quote>()
            .await?;

        Ok(quote)
    }
}
