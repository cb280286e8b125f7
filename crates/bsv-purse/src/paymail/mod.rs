//! Handle resolution: turning a paymail handle into a locking script.

pub mod client;
pub mod error;
pub mod types;

pub use client::{PaymailClient, PaymailConfig};
pub use error::ResolverError;
pub use types::{Capabilities, PaymailHandle, PaymentDestinationResponse, SenderRequest};

/// Resolves a paymail handle to a fresh output script for a sender.
pub trait HandleResolver {
    /// Return the hex locking script `handle` wants to be paid to.
    fn get_output_for(
        &self,
        handle: &str,
        sender: &SenderRequest,
    ) -> impl std::future::Future<Output = Result<String, ResolverError>> + Send;
}
