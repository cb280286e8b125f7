//! Input acquisition: have the funds source pay a one-time address, then
//! spend that payment into the transaction being funded.

use bsv_purse_tx::sighash::SIGHASH_ALL_FORKID;
use bsv_purse_tx::{p2pkh, Address, PrivateKey, Transaction, TransactionInput, TransactionOutput};
use tracing::info;

use crate::config::PurseConfig;
use crate::swipe::{FundsSource, PaymentRequest};
use crate::PurseError;

/// Append one signed input worth `satoshis` to `tx` and return its hex.
///
/// A fresh key is generated per call and dropped on return. Only the new
/// input is signed; existing inputs are carried through untouched and are not
/// checked.
pub async fn add_funding_input<S: FundsSource>(
    source: &S,
    config: &PurseConfig,
    mut tx: Transaction,
    satoshis: u64,
) -> Result<String, PurseError> {
    let key = PrivateKey::random();
    let address = Address::from_public_key(&key.public_key(), config.network);
    let lock = p2pkh::lock(&address);

    let request = PaymentRequest {
        to: address.to_string(),
        amount: satoshis,
        currency: config.currency.clone(),
    };
    let payment = source.request_payment(&request).await?;

    let funding_tx = Transaction::from_hex(&payment.rawtx)?;
    let vout = funding_tx
        .outputs
        .iter()
        .position(|output| output.locking_script == lock)
        .ok_or_else(|| PurseError::FundingSourceMismatch {
            address: request.to.clone(),
            txid: payment.txid.clone(),
        })?;
    let vout = u32::try_from(vout).map_err(|_| PurseError::ValueOverflow)?;

    let input = TransactionInput::spending(
        &payment.txid,
        vout,
        TransactionOutput::new(satoshis, lock),
    )?;
    tx.add_input(input);

    let index = tx.input_count() - 1;
    let unlocking_script = p2pkh::unlock(&key, SIGHASH_ALL_FORKID).sign(&tx, index)?;
    tx.inputs[index].unlocking_script = unlocking_script;

    info!(txid = %payment.txid, vout, satoshis, "added funding input");
    Ok(tx.to_hex())
}
