//! The transaction type and its wire encoding.

use std::fmt;

use crate::encoding::{TxReader, TxWriter, VarInt};
use crate::hash::sha256d;
use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::TxError;

/// A BSV transaction.
///
/// | Field        | Size         |
/// |--------------|--------------|
/// | version      | 4 bytes (LE) |
/// | input count  | VarInt       |
/// | inputs       | variable     |
/// | output count | VarInt       |
/// | outputs      | variable     |
/// | lock_time    | 4 bytes (LE) |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: u32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

impl Transaction {
    /// Empty version-1 transaction with lock time 0.
    pub fn new() -> Self {
        Transaction {
            version: 1,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, TxError> {
        Self::from_bytes(&hex::decode(hex_str)?)
    }

    /// Decode exactly one transaction; trailing bytes are an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TxError> {
        let mut reader = TxReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TxError::Serialization(format!(
                "trailing {} bytes after transaction",
                reader.remaining()
            )));
        }
        Ok(tx)
    }

    pub fn read_from(reader: &mut TxReader) -> Result<Self, TxError> {
        let version = reader
            .read_u32_le()
            .map_err(|e| TxError::Serialization(format!("reading version: {e}")))?;

        let input_count = reader
            .read_varint()
            .map_err(|e| TxError::Serialization(format!("reading input count: {e}")))?;
        // counts are untrusted; no preallocation
        let mut inputs = Vec::new();
        for _ in 0..input_count.value() {
            inputs.push(TransactionInput::read_from(reader)?);
        }

        let output_count = reader
            .read_varint()
            .map_err(|e| TxError::Serialization(format!("reading output count: {e}")))?;
        let mut outputs = Vec::new();
        for _ in 0..output_count.value() {
            outputs.push(TransactionOutput::read_from(reader)?);
        }

        let lock_time = reader
            .read_u32_le()
            .map_err(|e| TxError::Serialization(format!("reading lock time: {e}")))?;

        Ok(Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = TxWriter::with_capacity(256);
        writer.write_u32_le(self.version);
        writer.write_varint(VarInt::from(self.inputs.len()));
        for input in &self.inputs {
            input.write_to(&mut writer);
        }
        writer.write_varint(VarInt::from(self.outputs.len()));
        for output in &self.outputs {
            output.write_to(&mut writer);
        }
        writer.write_u32_le(self.lock_time);
        writer.into_bytes()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Serialized size in bytes.
    pub fn size(&self) -> usize {
        self.to_bytes().len()
    }

    /// Double SHA-256 of the encoding, in internal byte order.
    pub fn tx_id(&self) -> [u8; 32] {
        sha256d(&self.to_bytes())
    }

    /// Txid in the conventional byte-reversed display order.
    pub fn tx_id_hex(&self) -> String {
        let mut id = self.tx_id();
        id.reverse();
        hex::encode(id)
    }

    pub fn add_input(&mut self, input: TransactionInput) {
        self.inputs.push(input);
    }

    pub fn add_output(&mut self, output: TransactionOutput) {
        self.outputs.push(output);
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Sum of output values, or `None` if it overflows a `u64`.
    pub fn total_output_satoshis(&self) -> Option<u64> {
        self.outputs
            .iter()
            .try_fold(0u64, |acc, o| acc.checked_add(o.satoshis))
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
