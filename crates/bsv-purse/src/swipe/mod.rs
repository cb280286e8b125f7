//! Funds source: the wallet service that pays the purse.
//!
//! The service exposes one "swipe" endpoint. The purse uses it for two
//! unrelated things, so the trait splits them into two typed operations.

pub mod client;
pub mod error;
pub mod types;

pub use client::{SwipeClient, SwipeConfig};
pub use error::FundsSourceError;
pub use types::{
    CryptoOperation, CryptoOperationResult, IdentityRequest, IdentityResponse, Payment,
    PaymentRequest, USER_PAYMAIL,
};

/// A service that can pay satoshis to an address and answer identity queries.
pub trait FundsSource {
    /// Pay `request.amount` to `request.to` and return the paying transaction.
    fn request_payment(
        &self,
        request: &PaymentRequest,
    ) -> impl std::future::Future<Output = Result<Payment, FundsSourceError>> + Send;

    /// Evaluate the requested identity operations for the current user.
    fn resolve_identity(
        &self,
        request: &IdentityRequest,
    ) -> impl std::future::Future<Output = Result<IdentityResponse, FundsSourceError>> + Send;
}
