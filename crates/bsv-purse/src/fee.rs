//! Balance estimate for a transaction about to be funded.
//!
//! ```text
//! needed = ceil((size + allowance) * rate) + sum(outputs) - sum(parents)
//! ```
//!
//! Positive means the transaction is short by that many satoshis; negative
//! means it overpays by that many.

use bsv_purse_tx::Transaction;
use serde::{Deserialize, Serialize};

use crate::config::FeePolicy;
use crate::PurseError;

/// The output an existing input spends, described only by its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentReference {
    /// Value of the spent output.
    pub satoshis: u64,
    /// Locking script of the spent output (hex). Carried for the caller's
    /// bookkeeping; the balance estimate ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl ParentReference {
    /// A parent worth `satoshis`.
    pub fn new(satoshis: u64) -> Self {
        Self {
            satoshis,
            script: None,
        }
    }
}

/// Fee for `bytes` bytes, rounded up to the next satoshi.
pub fn fee_for_size(bytes: u64, policy: &FeePolicy) -> Result<u64, PurseError> {
    bytes
        .checked_mul(policy.sats_per_kb)
        .map(|millisats| millisats.div_ceil(1000))
        .ok_or(PurseError::ValueOverflow)
}

/// Net satoshis still needed by `tx` given the values its inputs spend.
///
/// Only the fee term is rounded; the sums are exact.
pub fn net_satoshis_needed(
    tx: &Transaction,
    parents: &[ParentReference],
    policy: &FeePolicy,
) -> Result<i64, PurseError> {
    let size = (tx.size() as u64)
        .checked_add(policy.funding_input_allowance)
        .ok_or(PurseError::ValueOverflow)?;
    let fee = fee_for_size(size, policy)?;
    let spent = tx
        .total_output_satoshis()
        .ok_or(PurseError::ValueOverflow)?;
    let funded = parents
        .iter()
        .try_fold(0u64, |acc, p| acc.checked_add(p.satoshis))
        .ok_or(PurseError::ValueOverflow)?;

    let needed = i128::from(fee) + i128::from(spent) - i128::from(funded);
    i64::try_from(needed).map_err(|_| PurseError::ValueOverflow)
}
