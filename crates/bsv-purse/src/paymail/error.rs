//! Error types for handle resolution.

/// Errors that can occur when resolving a paymail handle.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The handle is not of the form `alias@domain`.
    #[error("invalid paymail handle: {0}")]
    InvalidHandle(String),

    /// A required sender field was empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The host does not know the handle.
    #[error("unknown paymail handle")]
    UnknownHandle,

    /// The host does not advertise payment destinations.
    #[error("host does not support payment destinations")]
    CapabilityMissing,

    /// The host answered with a non-success status.
    #[error("paymail host rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The returned output is not a usable script.
    #[error("invalid output script: {0}")]
    InvalidOutput(String),
}
