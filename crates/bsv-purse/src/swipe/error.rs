//! Error types for the funds source.

/// Errors returned by a [`FundsSource`](super::FundsSource).
#[derive(Debug, thiserror::Error)]
pub enum FundsSourceError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The service answered with a non-success status.
    #[error("swipe rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, or the status reason when the body is empty.
        message: String,
    },

    /// A payment response carried no `payment` object.
    #[error("swipe response has no payment")]
    MissingPayment,
}
