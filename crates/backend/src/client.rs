use crate::error::{extract_detail, SolveError, SolveOutcome};
use crate::types::{SampleProblem, SampleProblemsResponse, SolveRequest, SolveResult, Strategy};
use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client for the solver service. Solve calls carry no overall timeout;
/// only connection setup is bounded.
#[derive(Clone)]
pub struct SolveClient {
    http: Client,
    base_url: String,
}

impl Default for SolveClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(5))
    }
}

impl SolveClient {
    pub fn new(base_url: &str, connect_timeout: Duration) -> Self {
        let http = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn solve(
        &self,
        strategy: Strategy,
        request: &SolveRequest,
    ) -> SolveOutcome<SolveResult> {
        let body = request.for_strategy(strategy);
        debug!(
            "POST {} (key attached: {})",
            strategy.path(),
            body.openai_api_key.is_some()
        );

        let response = self
            .http
            .post(format!("{}{}", self.base_url, strategy.path()))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(SolveError::Status {
                status: status.as_u16(),
                detail: extract_detail(&text),
            });
        }

        let result: SolveResult =
            serde_json::from_str(&text).map_err(|e| SolveError::Decode(e.to_string()))?;
        info!(
            "{} solver answered in {} steps (success: {})",
            strategy,
            result.total_steps,
            result.success
        );
        Ok(result)
    }

    /// Any 2xx from the root path counts as online. Transport failures and
    /// other statuses come back as the reason the backend is offline.
    pub async fn health_check(&self) -> Result<()> {
        let response = self
            .http
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(|e| anyhow!(describe(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("health check returned {}", status));
        }
        debug!("Health check ok ({})", status);
        Ok(())
    }

    pub async fn sample_problems(&self) -> Result<Vec<SampleProblem>> {
        let response = self
            .http
            .get(format!("{}/api/sample-problems", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Sample problems failed: {}", response.status()));
        }

        let data: SampleProblemsResponse = response.json().await?;
        Ok(data.problems)
    }
}

/// Short reason for the topbar, which already shows the URL.
fn describe(error: reqwest::Error) -> String {
    let error = error.without_url();
    match std::error::Error::source(&error) {
        Some(source) => format!("{error}: {source}"),
        None => error.to_string(),
    }
}
