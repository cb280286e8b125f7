//! secp256k1 keys and ECDSA signatures.
//!
//! Thin wrappers over `k256` that speak the encodings transactions need:
//! compressed SEC1 public keys and strict DER signatures with low S.

use std::fmt;

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;

use crate::hash::hash160;
use crate::TxError;

/// A secp256k1 private key.
///
/// `Debug` never prints the scalar.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a key from the operating system RNG.
    pub fn random() -> Self {
        PrivateKey {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Load a key from its 32-byte big-endian scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TxError> {
        if bytes.len() != 32 {
            return Err(TxError::InvalidKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let inner = SigningKey::from_slice(bytes).map_err(|e| TxError::InvalidKey(e.to_string()))?;
        Ok(PrivateKey { inner })
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            inner: self.inner.verifying_key().clone(),
        }
    }

    /// Sign a 32-byte digest (RFC 6979 nonce, S normalized to the low half).
    pub fn sign(&self, digest: &[u8; 32]) -> Result<Signature, TxError> {
        let sig: k256::ecdsa::Signature = self
            .inner
            .sign_prehash(digest)
            .map_err(|e| TxError::Signing(e.to_string()))?;
        let sig = sig.normalize_s().unwrap_or(sig);
        Ok(Signature { inner: sig })
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// A secp256k1 public key.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Parse a compressed (33-byte) or uncompressed (65-byte) SEC1 key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TxError> {
        let inner =
            VerifyingKey::from_sec1_bytes(bytes).map_err(|e| TxError::InvalidKey(e.to_string()))?;
        Ok(PublicKey { inner })
    }

    /// The 33-byte compressed SEC1 encoding.
    pub fn to_compressed(&self) -> [u8; 33] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; 33];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Hash160 of the compressed key, as committed to by P2PKH scripts.
    pub fn hash160(&self) -> [u8; 20] {
        hash160(&self.to_compressed())
    }

    /// Check `sig` over a 32-byte digest.
    pub fn verify(&self, digest: &[u8; 32], sig: &Signature) -> bool {
        self.inner.verify_prehash(digest, &sig.inner).is_ok()
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.to_compressed()))
    }
}

/// An ECDSA signature over secp256k1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    inner: k256::ecdsa::Signature,
}

impl Signature {
    /// Parse a strict DER signature (without a trailing sighash byte).
    pub fn from_der(bytes: &[u8]) -> Result<Self, TxError> {
        let inner = k256::ecdsa::Signature::from_der(bytes)
            .map_err(|e| TxError::Signing(format!("invalid DER signature: {e}")))?;
        Ok(Signature { inner })
    }

    /// DER encoding (at most 72 bytes).
    pub fn to_der(&self) -> Vec<u8> {
        self.inner.to_der().as_bytes().to_vec()
    }
}
