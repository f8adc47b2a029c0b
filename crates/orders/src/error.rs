//! Order gateway error types.

use thiserror::Error;

/// Errors that can occur when talking to the order service.
///
/// Both variants are order-submission failures from the orchestrator's
/// point of view and trigger compensation.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The order service answered with a non-2xx status.
    #[error("Order service rejected the order: status {status}")]
    Rejected {
        /// HTTP status returned by the order service.
        status: u16,
        /// Raw response body, surfaced to the caller for diagnostics.
        body: String,
    },

    /// The order service could not be reached or the response could not
    /// be read (connect failure, timeout, malformed body).
    #[error("Order service unreachable: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::Transport(e.to_string())
    }
}
