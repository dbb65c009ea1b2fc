//! Error types for the wizard client.

use crate::wizard::model::ProfileField;

/// Fixed user-facing text when the service cannot be reached or a failure
/// carries no detail of its own.
pub const CONNECT_FALLBACK: &str = "Failed to connect to server. Please try again.";

/// Required fields were empty at submission time.
///
/// Recovered locally: the message is surfaced inline and the request is
/// never issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// The required fields that were empty.
    pub missing: Vec<ProfileField>,
    /// Inline message shown to the user.
    pub message: String,
}

impl ValidationError {
    pub fn new(missing: Vec<ProfileField>) -> Self {
        let names: Vec<&str> = missing.iter().map(|f| f.display_name()).collect();
        let message = format!(
            "Please fill in all required fields: {}",
            names.join(" and ")
        );
        Self { missing, message }
    }
}

/// Failures of the remote scoring call.
///
/// Every kind is recoverable: the session stays interactive and the user
/// may edit inputs and resubmit.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The service answered non-2xx with a human-readable detail.
    #[error("Scoring service error: {0}")]
    Server(String),

    /// No response was obtained at the transport layer.
    #[error("Connection to scoring service failed: {0}")]
    Network(String),

    /// The transport succeeded but the body did not match the expected shape.
    #[error("Malformed scoring response: {0}")]
    MalformedResponse(String),
}

impl RequestError {
    /// Text shown to the user.
    ///
    /// Server detail is surfaced verbatim; the other kinds collapse to the
    /// fixed connection-failure message.
    pub fn display_message(&self) -> String {
        match self {
            Self::Server(detail) => detail.clone(),
            Self::Network(_) | Self::MalformedResponse(_) => CONNECT_FALLBACK.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_missing_fields() {
        let err = ValidationError::new(vec![ProfileField::MonthlyIncome]);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: Monthly Income"
        );

        let err = ValidationError::new(vec![
            ProfileField::MonthlyIncome,
            ProfileField::MonthlyExpenses,
        ]);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: Monthly Income and Monthly Expenses"
        );
    }

    #[test]
    fn server_detail_is_surfaced_verbatim() {
        let err = RequestError::Server("invalid income".to_string());
        assert_eq!(err.display_message(), "invalid income");
    }

    #[test]
    fn transport_failures_use_the_fixed_message() {
        let network = RequestError::Network("connection refused".to_string());
        assert_eq!(network.display_message(), CONNECT_FALLBACK);

        let malformed = RequestError::MalformedResponse("missing credit_score".to_string());
        assert_eq!(malformed.display_message(), CONNECT_FALLBACK);
    }
}
