#![deny(missing_docs)]

//! # bsv-purse
//!
//! Funds a partially-built BSV transaction so that it can be relayed.
//!
//! [`Purse::pay`] measures how far the transaction is from paying its own
//! fee, then either acquires one new input from a swipe funds source (signed
//! with a throwaway key), leaves the transaction alone, or returns the surplus
//! as change to the user's own paymail.
//!
//! # Example
//!
//! ```no_run
//! use bsv_purse::{ParentReference, PaymailClient, PaymailConfig, Purse, SwipeClient, SwipeConfig};
//!
//! # async fn run(raw_tx_hex: &str) -> Result<(), bsv_purse::PurseError> {
//! let purse = Purse::new(
//!     SwipeClient::new(SwipeConfig::new("https://swipe.example.com/api")),
//!     PaymailClient::new(PaymailConfig::default()),
//! );
//! let funded = purse.pay(raw_tx_hex, &[ParentReference::new(1_000)]).await?;
//! # let _ = funded;
//! # Ok(())
//! # }
//! ```

pub mod change;
pub mod config;
pub mod error;
pub mod fee;
pub mod funding;
pub mod paymail;
pub mod policy;
pub mod purse;
pub mod swipe;

#[cfg(test)]
mod tests;

pub use config::{FeePolicy, PurseConfig};
pub use error::PurseError;
pub use fee::ParentReference;
pub use paymail::{HandleResolver, PaymailClient, PaymailConfig, ResolverError, SenderRequest};
pub use policy::FundingDecision;
pub use purse::Purse;
pub use swipe::{FundsSource, FundsSourceError, SwipeClient, SwipeConfig};
