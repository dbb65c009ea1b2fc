//! Configuration types.

/// Scoring service configuration.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Base URL of the scoring service. A trailing slash is tolerated.
    pub base_url: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl ScoringConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CREDIT_COACH_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Self::default().base_url);
        Self { base_url }
    }
}
