//! Error type for funding operations.

use bsv_purse_tx::TxError;

use crate::paymail::ResolverError;
use crate::swipe::FundsSourceError;

/// Errors that abort a [`Purse::pay`](crate::Purse::pay) call.
#[derive(Debug, thiserror::Error)]
pub enum PurseError {
    /// The funds source paid, but no output of its transaction pays the
    /// one-time address that was requested.
    #[error("funding transaction {txid} has no output paying {address}")]
    FundingSourceMismatch {
        /// The one-time address the payment was requested to.
        address: String,
        /// Txid reported by the funds source.
        txid: String,
    },

    /// The funds source did not return the named identity attribute.
    #[error("funds source did not supply identity attribute '{0}'")]
    IdentityUnavailable(String),

    /// The handle resolver would not produce a change script.
    #[error("could not resolve change output for {handle}: {source}")]
    ResolutionFailed {
        /// The paymail handle being resolved.
        handle: String,
        /// Why the resolver failed.
        #[source]
        source: ResolverError,
    },

    /// A balance sum left the representable range.
    #[error("satoshi amounts overflow")]
    ValueOverflow,

    /// The funds source request failed.
    #[error("funds source error: {0}")]
    FundsSource(#[from] FundsSourceError),

    /// Decoding, building, or signing a transaction failed.
    #[error("transaction error: {0}")]
    Transaction(#[from] TxError),
}
