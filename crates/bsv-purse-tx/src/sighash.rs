//! FORKID signature hash (the BIP-143 digest BSV adopted at the UAHF fork).
//!
//! See <https://github.com/bitcoin-sv/bitcoin-sv/blob/master/doc/abc/replay-protected-sighash.md>

use crate::encoding::TxWriter;
use crate::hash::sha256d;
use crate::transaction::Transaction;
use crate::TxError;

pub const SIGHASH_ALL: u32 = 0x01;
pub const SIGHASH_NONE: u32 = 0x02;
pub const SIGHASH_SINGLE: u32 = 0x03;
pub const SIGHASH_FORKID: u32 = 0x40;
pub const SIGHASH_ANYONECANPAY: u32 = 0x80;

/// ALL | FORKID, the flag funding inputs are signed with.
pub const SIGHASH_ALL_FORKID: u32 = SIGHASH_ALL | SIGHASH_FORKID;

const SIGHASH_BASE_MASK: u32 = 0x1f;

/// Digest to sign for `input_index`, spending an output worth `satoshis`
/// and locked by `script_code`.
pub fn signature_hash(
    tx: &Transaction,
    input_index: usize,
    script_code: &[u8],
    satoshis: u64,
    sighash_type: u32,
) -> Result<[u8; 32], TxError> {
    let preimage = calc_preimage(tx, input_index, script_code, satoshis, sighash_type)?;
    Ok(sha256d(&preimage))
}

/// The unhashed preimage:
///
/// 1. nVersion
/// 2. hashPrevouts (zero with ANYONECANPAY)
/// 3. hashSequence (zero with ANYONECANPAY, SINGLE or NONE)
/// 4. outpoint being spent
/// 5. scriptCode
/// 6. value being spent
/// 7. nSequence of this input
/// 8. hashOutputs (all, the matching one for SINGLE, else zero)
/// 9. nLockTime
/// 10. sighash type
pub fn calc_preimage(
    tx: &Transaction,
    input_index: usize,
    script_code: &[u8],
    satoshis: u64,
    sighash_type: u32,
) -> Result<Vec<u8>, TxError> {
    let input = tx.inputs.get(input_index).ok_or_else(|| {
        TxError::InvalidTransaction(format!(
            "input index {} out of range (tx has {} inputs)",
            input_index,
            tx.inputs.len()
        ))
    })?;
    if sighash_type & SIGHASH_FORKID == 0 {
        return Err(TxError::Signing(format!(
            "sighash type {sighash_type:#04x} lacks FORKID"
        )));
    }

    let base = sighash_type & SIGHASH_BASE_MASK;
    let anyone_can_pay = sighash_type & SIGHASH_ANYONECANPAY != 0;

    let hash_prevouts = if anyone_can_pay {
        [0u8; 32]
    } else {
        let mut w = TxWriter::with_capacity(tx.inputs.len() * 36);
        for i in &tx.inputs {
            w.write_bytes(&i.source_txid);
            w.write_u32_le(i.source_tx_out_index);
        }
        sha256d(w.as_bytes())
    };

    let hash_sequence = if anyone_can_pay || base == SIGHASH_SINGLE || base == SIGHASH_NONE {
        [0u8; 32]
    } else {
        let mut w = TxWriter::with_capacity(tx.inputs.len() * 4);
        for i in &tx.inputs {
            w.write_u32_le(i.sequence_number);
        }
        sha256d(w.as_bytes())
    };

    let hash_outputs = if base != SIGHASH_SINGLE && base != SIGHASH_NONE {
        let mut w = TxWriter::new();
        for o in &tx.outputs {
            o.write_to(&mut w);
        }
        sha256d(w.as_bytes())
    } else if base == SIGHASH_SINGLE && input_index < tx.outputs.len() {
        let mut w = TxWriter::new();
        tx.outputs[input_index].write_to(&mut w);
        sha256d(w.as_bytes())
    } else {
        [0u8; 32]
    };

    let mut w = TxWriter::with_capacity(160 + script_code.len());
    w.write_u32_le(tx.version);
    w.write_bytes(&hash_prevouts);
    w.write_bytes(&hash_sequence);
    w.write_bytes(&input.source_txid);
    w.write_u32_le(input.source_tx_out_index);
    w.write_var_bytes(script_code);
    w.write_u64_le(satoshis);
    w.write_u32_le(input.sequence_number);
    w.write_bytes(&hash_outputs);
    w.write_u32_le(tx.lock_time);
    w.write_u32_le(sighash_type);
    Ok(w.into_bytes())
}
