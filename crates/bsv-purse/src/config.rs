//! Purse configuration.

use bsv_purse_tx::Network;

/// Currency unit the funds source is asked to pay in.
pub const DEFAULT_CURRENCY: &str = "BSV-SAT";

/// Fee and dust parameters for the balance estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeePolicy {
    /// Fee rate in satoshis per 1000 bytes (500 = 0.5 sat/byte).
    pub sats_per_kb: u64,
    /// Bytes added to the current size for the input the purse may append.
    pub funding_input_allowance: u64,
    /// Smallest value the purse will request or emit as change.
    pub dust_limit: u64,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            sats_per_kb: 500,
            funding_input_allowance: 160,
            dust_limit: 547,
        }
    }
}

/// Configuration for a [`Purse`](crate::Purse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurseConfig {
    /// Fee and dust parameters.
    pub fee_policy: FeePolicy,
    /// Network the one-time funding address is encoded for.
    pub network: Network,
    /// Currency unit sent with payment requests.
    pub currency: String,
}

impl Default for PurseConfig {
    fn default() -> Self {
        Self {
            fee_policy: FeePolicy::default(),
            network: Network::Mainnet,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}
