//! Pay-to-public-key-hash locking, signing and verification.

use crate::address::Address;
use crate::keys::{PrivateKey, PublicKey, Signature};
use crate::script::{Script, OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OP_HASH160};
use crate::sighash::{self, SIGHASH_FORKID};
use crate::transaction::Transaction;
use crate::TxError;

/// `OP_DUP OP_HASH160 <pkh> OP_EQUALVERIFY OP_CHECKSIG` for `address`.
pub fn lock(address: &Address) -> Script {
    let mut script = Script::new();
    script.append_opcode(OP_DUP);
    script.append_opcode(OP_HASH160);
    script.append_push_data(address.public_key_hash());
    script.append_opcode(OP_EQUALVERIFY);
    script.append_opcode(OP_CHECKSIG);
    script
}

/// Produces `<DER sig || flag byte> <compressed pubkey>` unlocking scripts.
pub struct P2pkhUnlocker<'a> {
    key: &'a PrivateKey,
    sighash_flag: u32,
}

/// Unlocker signing with `key` under `sighash_flag`.
pub fn unlock(key: &PrivateKey, sighash_flag: u32) -> P2pkhUnlocker<'_> {
    P2pkhUnlocker { key, sighash_flag }
}

impl P2pkhUnlocker<'_> {
    /// Sign `input_index` of `tx` against the source output recorded on it.
    pub fn sign(&self, tx: &Transaction, input_index: usize) -> Result<Script, TxError> {
        let input = tx.inputs.get(input_index).ok_or_else(|| {
            TxError::Signing(format!(
                "input index {} out of range (tx has {} inputs)",
                input_index,
                tx.inputs.len()
            ))
        })?;
        let source = input.source_output.as_ref().ok_or_else(|| {
            TxError::Signing(format!("input {input_index} has no source output"))
        })?;

        let digest = sighash::signature_hash(
            tx,
            input_index,
            source.locking_script.as_bytes(),
            source.satoshis,
            self.sighash_flag,
        )?;
        let signature = self.key.sign(&digest)?;

        let mut sig_buf = signature.to_der();
        sig_buf.push(self.sighash_flag as u8);

        let mut script = Script::new();
        script.append_push_data(&sig_buf);
        script.append_push_data(&self.key.public_key().to_compressed());
        Ok(script)
    }
}

/// Check a signed P2PKH input against the source output recorded on it.
///
/// Verifies that the pushed public key hashes to the locked PKH and that the
/// signature is valid for the FORKID digest named by its trailing flag byte.
pub fn verify_input(tx: &Transaction, input_index: usize) -> Result<(), TxError> {
    let input = tx.inputs.get(input_index).ok_or_else(|| {
        TxError::Signing(format!("input index {input_index} out of range"))
    })?;
    let source = input
        .source_output
        .as_ref()
        .ok_or_else(|| TxError::Signing(format!("input {input_index} has no source output")))?;
    let pkh = source
        .locking_script
        .p2pkh_public_key_hash()
        .ok_or_else(|| TxError::Signing("source output is not P2PKH".into()))?;

    let items = input.unlocking_script.push_data_items()?;
    let [sig_with_flag, pubkey_bytes] = items.as_slice() else {
        return Err(TxError::Signing(format!(
            "expected 2 pushes in unlocking script, found {}",
            items.len()
        )));
    };
    let (flag, der) = sig_with_flag
        .split_last()
        .ok_or_else(|| TxError::Signing("empty signature push".into()))?;
    let flag = *flag as u32;
    if flag & SIGHASH_FORKID == 0 {
        return Err(TxError::Signing(format!("sighash flag {flag:#04x} lacks FORKID")));
    }

    let public_key = PublicKey::from_bytes(pubkey_bytes)?;
    if crate::hash::hash160(pubkey_bytes) != pkh {
        return Err(TxError::Signing("public key does not match locking script".into()));
    }
    let signature = Signature::from_der(der)?;
    let digest = sighash::signature_hash(
        tx,
        input_index,
        source.locking_script.as_bytes(),
        source.satoshis,
        flag,
    )?;
    if !public_key.verify(&digest, &signature) {
        return Err(TxError::Signing(format!(
            "signature on input {input_index} does not verify"
        )));
    }
    Ok(())
}
