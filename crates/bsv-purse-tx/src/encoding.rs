//! Bitcoin wire-format primitives.
//!
//! `VarInt` length prefixes plus a cursor reader and a growable writer for
//! little-endian integers. Reading past the end of the buffer yields
//! [`TxError::Serialization`], never a panic.

use crate::TxError;

/// A Bitcoin variable-length integer (1, 3, 5, or 9 bytes on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Number of bytes this value occupies when encoded.
    pub fn encoded_len(&self) -> usize {
        match self.0 {
            0..=0xfc => 1,
            0xfd..=0xffff => 3,
            0x1_0000..=0xffff_ffff => 5,
            _ => 9,
        }
    }

    /// The decoded integer.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<usize> for VarInt {
    fn from(n: usize) -> Self {
        VarInt(n as u64)
    }
}

impl From<u64> for VarInt {
    fn from(n: u64) -> Self {
        VarInt(n)
    }
}

/// Cursor over a borrowed byte slice.
pub struct TxReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TxReader<'a> {
    /// Start reading at the beginning of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        TxReader { data, pos: 0 }
    }

    /// Take the next `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], TxError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| {
                TxError::Serialization(format!(
                    "unexpected end of data: wanted {} bytes at offset {}, {} left",
                    n,
                    self.pos,
                    self.remaining()
                ))
            })?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Read a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], TxError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, TxError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16, TxError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, TxError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, TxError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Read a `VarInt` prefix.
    pub fn read_varint(&mut self) -> Result<VarInt, TxError> {
        let value = match self.read_u8()? {
            0xff => self.read_u64_le()?,
            0xfe => self.read_u32_le()? as u64,
            0xfd => self.read_u16_le()? as u64,
            b => b as u64,
        };
        Ok(VarInt(value))
    }

    /// Read a `VarInt`-prefixed byte string.
    pub fn read_var_bytes(&mut self) -> Result<&'a [u8], TxError> {
        let len = self.read_varint()?.value();
        let len = usize::try_from(len)
            .map_err(|_| TxError::Serialization(format!("length {len} does not fit in memory")))?;
        self.read_bytes(len)
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

/// Append-only little-endian byte writer.
#[derive(Debug, Default)]
pub struct TxWriter {
    buf: Vec<u8>,
}

impl TxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TxWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    pub fn write_u32_le(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    pub fn write_u64_le(&mut self, val: u64) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    pub fn write_varint(&mut self, varint: VarInt) {
        let n = varint.0;
        match varint.encoded_len() {
            1 => self.buf.push(n as u8),
            3 => {
                self.buf.push(0xfd);
                self.buf.extend_from_slice(&(n as u16).to_le_bytes());
            }
            5 => {
                self.buf.push(0xfe);
                self.buf.extend_from_slice(&(n as u32).to_le_bytes());
            }
            _ => {
                self.buf.push(0xff);
                self.buf.extend_from_slice(&n.to_le_bytes());
            }
        }
    }

    /// Write a `VarInt` length followed by the bytes themselves.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_varint(VarInt::from(bytes.len()));
        self.write_bytes(bytes);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
