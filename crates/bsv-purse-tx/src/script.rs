//! Script byte strings and the handful of opcodes the purse needs.

use std::fmt;

use crate::TxError;

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_RETURN: u8 = 0x6a;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;

/// A locking or unlocking script.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Script(Vec::new())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, TxError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| TxError::InvalidScript(format!("invalid hex: {e}")))?;
        Ok(Script(bytes))
    }

    /// `OP_FALSE OP_RETURN <item>...`, an unspendable data carrier.
    pub fn op_return(items: &[&[u8]]) -> Self {
        let mut script = Script(vec![OP_0, OP_RETURN]);
        for item in items {
            script.append_push_data(item);
        }
        script
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn append_opcode(&mut self, opcode: u8) {
        self.0.push(opcode);
    }

    /// Push `data` with the shortest encoding: a direct length byte below 76
    /// bytes, otherwise PUSHDATA1/2/4.
    pub fn append_push_data(&mut self, data: &[u8]) {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
    }

    /// Split a push-only script into its data items.
    ///
    /// Fails on any non-push opcode or a push running past the end.
    pub fn push_data_items(&self) -> Result<Vec<&[u8]>, TxError> {
        let bytes = &self.0;
        let mut items = Vec::new();
        let mut pos = 0usize;
        while pos < bytes.len() {
            let op = bytes[pos];
            pos += 1;
            let (len, header) = match op {
                OP_0 => (0, 0),
                0x01..=0x4b => (op as usize, 0),
                OP_PUSHDATA1 => (read_len(bytes, pos, 1)?, 1),
                OP_PUSHDATA2 => (read_len(bytes, pos, 2)?, 2),
                OP_PUSHDATA4 => (read_len(bytes, pos, 4)?, 4),
                _ => {
                    return Err(TxError::InvalidScript(format!(
                        "opcode {op:#04x} at offset {} is not a data push",
                        pos - 1
                    )))
                }
            };
            pos += header;
            let end = pos
                .checked_add(len)
                .filter(|end| *end <= bytes.len())
                .ok_or_else(|| TxError::InvalidScript("push runs past end of script".into()))?;
            items.push(&bytes[pos..end]);
            pos = end;
        }
        Ok(items)
    }

    /// `OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG`
    pub fn is_p2pkh(&self) -> bool {
        let b = &self.0;
        b.len() == 25
            && b[0] == OP_DUP
            && b[1] == OP_HASH160
            && b[2] == 20
            && b[23] == OP_EQUALVERIFY
            && b[24] == OP_CHECKSIG
    }

    /// The public key hash a P2PKH script commits to.
    pub fn p2pkh_public_key_hash(&self) -> Option<[u8; 20]> {
        if !self.is_p2pkh() {
            return None;
        }
        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&self.0[3..23]);
        Some(pkh)
    }
}

fn read_len(bytes: &[u8], pos: usize, width: usize) -> Result<usize, TxError> {
    let raw = bytes
        .get(pos..pos + width)
        .ok_or_else(|| TxError::InvalidScript("truncated PUSHDATA length".into()))?;
    let mut buf = [0u8; 4];
    buf[..width].copy_from_slice(raw);
    Ok(u32::from_le_bytes(buf) as usize)
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
