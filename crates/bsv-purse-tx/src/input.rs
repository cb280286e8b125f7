//! Transaction inputs.

use crate::encoding::{TxReader, TxWriter};
use crate::output::TransactionOutput;
use crate::script::Script;
use crate::TxError;

/// Sequence number of a final input.
pub const DEFAULT_SEQUENCE_NUMBER: u32 = 0xFFFF_FFFF;

/// An input spending a previous output.
///
/// `source_output` is local bookkeeping for signing (the value and locking
/// script being spent) and is not part of the wire format:
///
/// | Field               | Size          |
/// |---------------------|---------------|
/// | source_txid         | 32 bytes (LE) |
/// | source_tx_out_index | 4 bytes (LE)  |
/// | script length       | VarInt        |
/// | unlocking_script    | variable      |
/// | sequence_number     | 4 bytes (LE)  |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    /// Txid of the spent output in internal (reversed) byte order.
    pub source_txid: [u8; 32],
    pub source_tx_out_index: u32,
    /// Empty until the input is signed.
    pub unlocking_script: Script,
    pub sequence_number: u32,
    pub source_output: Option<TransactionOutput>,
}

impl TransactionInput {
    /// Build an unsigned input spending `vout` of the transaction whose
    /// display-order txid is `txid_hex`.
    pub fn spending(
        txid_hex: &str,
        vout: u32,
        source_output: TransactionOutput,
    ) -> Result<Self, TxError> {
        let bytes = hex::decode(txid_hex)?;
        if bytes.len() != 32 {
            return Err(TxError::InvalidTransaction(format!(
                "txid must be 32 bytes, got {}",
                bytes.len()
            )));
        }
        let mut source_txid = [0u8; 32];
        source_txid.copy_from_slice(&bytes);
        source_txid.reverse();
        Ok(TransactionInput {
            source_txid,
            source_tx_out_index: vout,
            unlocking_script: Script::new(),
            sequence_number: DEFAULT_SEQUENCE_NUMBER,
            source_output: Some(source_output),
        })
    }

    /// Txid of the spent output in display order.
    pub fn source_txid_hex(&self) -> String {
        let mut id = self.source_txid;
        id.reverse();
        hex::encode(id)
    }

    pub fn read_from(reader: &mut TxReader) -> Result<Self, TxError> {
        let source_txid = reader
            .read_array::<32>()
            .map_err(|e| TxError::Serialization(format!("reading source txid: {e}")))?;
        let source_tx_out_index = reader
            .read_u32_le()
            .map_err(|e| TxError::Serialization(format!("reading output index: {e}")))?;
        let script = reader
            .read_var_bytes()
            .map_err(|e| TxError::Serialization(format!("reading unlocking script: {e}")))?;
        let sequence_number = reader
            .read_u32_le()
            .map_err(|e| TxError::Serialization(format!("reading sequence number: {e}")))?;
        Ok(TransactionInput {
            source_txid,
            source_tx_out_index,
            unlocking_script: Script::from_bytes(script),
            sequence_number,
            source_output: None,
        })
    }

    pub fn write_to(&self, writer: &mut TxWriter) {
        writer.write_bytes(&self.source_txid);
        writer.write_u32_le(self.source_tx_out_index);
        writer.write_var_bytes(self.unlocking_script.as_bytes());
        writer.write_u32_le(self.sequence_number);
    }
}
