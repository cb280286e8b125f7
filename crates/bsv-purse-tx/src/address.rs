//! Base58Check P2PKH addresses.

use std::fmt;

use crate::hash::sha256d;
use crate::keys::PublicKey;
use crate::TxError;

const MAINNET_P2PKH: u8 = 0x00;
const TESTNET_P2PKH: u8 = 0x6f;

/// Network an address is encoded for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Network {
    /// Version byte `0x00`, addresses start with `1`.
    #[default]
    Mainnet,
    /// Version byte `0x6f`, addresses start with `m` or `n`.
    Testnet,
}

impl Network {
    fn version_byte(self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_P2PKH,
            Network::Testnet => TESTNET_P2PKH,
        }
    }
}

/// A pay-to-public-key-hash address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    public_key_hash: [u8; 20],
    network: Network,
}

impl Address {
    pub fn from_public_key_hash(public_key_hash: [u8; 20], network: Network) -> Self {
        Address {
            public_key_hash,
            network,
        }
    }

    /// Address of a public key's compressed encoding.
    pub fn from_public_key(key: &PublicKey, network: Network) -> Self {
        Self::from_public_key_hash(key.hash160(), network)
    }

    /// Decode a Base58Check string, checking length, checksum and version.
    pub fn from_string(s: &str) -> Result<Self, TxError> {
        let decoded = bs58::decode(s)
            .into_vec()
            .map_err(|e| TxError::InvalidAddress(format!("{s}: {e}")))?;
        if decoded.len() != 25 {
            return Err(TxError::InvalidAddress(format!(
                "{s}: decoded to {} bytes, expected 25",
                decoded.len()
            )));
        }
        if sha256d(&decoded[..21])[..4] != decoded[21..] {
            return Err(TxError::InvalidAddress(format!("{s}: checksum mismatch")));
        }
        let network = match decoded[0] {
            MAINNET_P2PKH => Network::Mainnet,
            TESTNET_P2PKH => Network::Testnet,
            v => {
                return Err(TxError::InvalidAddress(format!(
                    "{s}: unsupported version byte {v:#04x}"
                )))
            }
        };
        let mut public_key_hash = [0u8; 20];
        public_key_hash.copy_from_slice(&decoded[1..21]);
        Ok(Address {
            public_key_hash,
            network,
        })
    }

    pub fn public_key_hash(&self) -> &[u8; 20] {
        &self.public_key_hash
    }

    pub fn network(&self) -> Network {
        self.network
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut payload = Vec::with_capacity(25);
        payload.push(self.network.version_byte());
        payload.extend_from_slice(&self.public_key_hash);
        let checksum = sha256d(&payload);
        payload.extend_from_slice(&checksum[..4]);
        f.write_str(&bs58::encode(payload).into_string())
    }
}
