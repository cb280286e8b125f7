//! Transaction outputs.

use crate::encoding::{TxReader, TxWriter};
use crate::script::Script;
use crate::TxError;

/// A value and the script locking it.
///
/// | Field          | Size         |
/// |----------------|--------------|
/// | satoshis       | 8 bytes (LE) |
/// | script length  | VarInt       |
/// | locking_script | variable     |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionOutput {
    pub satoshis: u64,
    pub locking_script: Script,
}

impl TransactionOutput {
    pub fn new(satoshis: u64, locking_script: Script) -> Self {
        TransactionOutput {
            satoshis,
            locking_script,
        }
    }

    pub fn read_from(reader: &mut TxReader) -> Result<Self, TxError> {
        let satoshis = reader
            .read_u64_le()
            .map_err(|e| TxError::Serialization(format!("reading satoshis: {e}")))?;
        let script = reader
            .read_var_bytes()
            .map_err(|e| TxError::Serialization(format!("reading locking script: {e}")))?;
        Ok(TransactionOutput {
            satoshis,
            locking_script: Script::from_bytes(script),
        })
    }

    pub fn write_to(&self, writer: &mut TxWriter) {
        writer.write_u64_le(self.satoshis);
        writer.write_var_bytes(self.locking_script.as_bytes());
    }
}
