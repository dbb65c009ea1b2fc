//! HTTP client for the remote scoring service.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::ScoringConfig;
use crate::error::RequestError;
use crate::wizard::{FinancialProfile, Improvement, ScoreResult};

/// Abstraction over the scoring call so the session loop can be driven
/// against a mock service in tests.
#[async_trait]
pub trait ScoreService: Send + Sync {
    /// Submit a profile for scoring. A single attempt: no retry, no
    /// timeout, no cancellation. At most one call is outstanding at a
    /// time; the caller's pending flag enforces that.
    async fn submit(&self, profile: &FinancialProfile) -> Result<ScoreResult, RequestError>;
}

/// Success body returned by `POST /predict`.
///
/// The service also sends `status` and `message` keys; unknown keys are
/// ignored, only the shape below is required.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    credit_score: i32,
    improvements: Vec<Improvement>,
}

/// Failure body. Non-2xx responses may carry a human-readable `detail`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the scoring service.
#[derive(Clone)]
pub struct ScoringClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScoringClient {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Probe the service root, which answers with its version banner.
    ///
    /// Used at startup to log reachability; failures are not fatal.
    pub async fn health(&self) -> Result<(), RequestError> {
        let url = format!("{}/", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RequestError::Server(format!(
                "health check returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ScoreService for ScoringClient {
    async fn submit(&self, profile: &FinancialProfile) -> Result<ScoreResult, RequestError> {
        let url = format!("{}/predict", self.base_url);
        tracing::info!("Submitting profile for scoring: {}", url);

        let response = self
            .client
            .post(&url)
            .json(profile)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body: ErrorBody = response.json().await.unwrap_or_default();
            tracing::warn!(
                "Scoring service rejected the request ({}): {:?}",
                status,
                body.detail
            );
            return Err(match body.detail {
                Some(detail) => RequestError::Server(detail),
                None => RequestError::Server(crate::error::CONNECT_FALLBACK.to_string()),
            });
        }

        // A success status with an unexpected body must not take the
        // session down; it classifies as a malformed response instead.
        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| RequestError::MalformedResponse(e.to_string()))?;

        tracing::info!("Received credit score {}", body.credit_score);
        Ok(ScoreResult {
            score: body.credit_score,
            improvements: body.improvements,
        })
    }
}
