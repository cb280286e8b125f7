//! Change emission: pay a surplus back to the user's own paymail.

use bsv_purse_tx::{Script, Transaction, TransactionOutput};
use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::paymail::{HandleResolver, ResolverError, SenderRequest};
use crate::swipe::{FundsSource, IdentityRequest, USER_PAYMAIL};
use crate::PurseError;

/// Signature value sent with destination requests. Hosts that accept
/// unsigned requests do not check it.
pub const SIGNATURE_PLACEHOLDER: &str = "signature";

/// Append an output of `satoshis` to the user's paymail and return the hex.
pub async fn add_change_output<S, R>(
    source: &S,
    resolver: &R,
    mut tx: Transaction,
    satoshis: u64,
) -> Result<String, PurseError>
where
    S: FundsSource,
    R: HandleResolver,
{
    let identity = source
        .resolve_identity(&IdentityRequest::user_paymail())
        .await?;
    let handle = identity
        .value_of(USER_PAYMAIL)
        .ok_or_else(|| PurseError::IdentityUnavailable(USER_PAYMAIL.to_string()))?
        .to_string();

    let sender = SenderRequest::new(
        handle.as_str(),
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        SIGNATURE_PLACEHOLDER,
    );
    let output_hex = resolver
        .get_output_for(&handle, &sender)
        .await
        .map_err(|source| PurseError::ResolutionFailed {
            handle: handle.clone(),
            source,
        })?;
    let script = Script::from_hex(&output_hex)
        .map_err(|e| ResolverError::InvalidOutput(e.to_string()))
        .and_then(|script| {
            if script.is_empty() {
                Err(ResolverError::InvalidOutput("empty script".to_string()))
            } else {
                Ok(script)
            }
        })
        .map_err(|source| PurseError::ResolutionFailed {
            handle: handle.clone(),
            source,
        })?;

    tx.add_output(TransactionOutput::new(satoshis, script));

    info!(satoshis, "added change output");
    Ok(tx.to_hex())
}
