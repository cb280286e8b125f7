/// Errors raised while decoding, building, or signing transactions.
#[derive(Debug, thiserror::Error)]
pub enum TxError {
    /// Wire data was truncated, malformed, or had trailing bytes.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The transaction is structurally unusable for the requested operation.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// An input could not be signed or its signature could not be checked.
    #[error("signing error: {0}")]
    Signing(String),

    /// Key material could not be parsed.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A Base58Check address failed to decode.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A script was not valid hex or not of the expected shape.
    #[error("invalid script: {0}")]
    InvalidScript(String),
}

impl From<hex::FromHexError> for TxError {
    fn from(e: hex::FromHexError) -> Self {
        TxError::Serialization(format!("invalid hex: {e}"))
    }
}
