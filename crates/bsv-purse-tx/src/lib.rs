//! Transaction building blocks for the BSV purse.
//!
//! Covers exactly what a funding round touches: the wire codec, hashing,
//! secp256k1 keys, P2PKH addresses and scripts, the FORKID signature hash,
//! and P2PKH signing/verification of a single input.

pub mod address;
pub mod encoding;
pub mod hash;
pub mod keys;
pub mod p2pkh;
pub mod script;
pub mod sighash;
pub mod transaction;

mod error;
mod input;
mod output;

pub use address::{Address, Network};
pub use error::TxError;
pub use input::{TransactionInput, DEFAULT_SEQUENCE_NUMBER};
pub use keys::{PrivateKey, PublicKey, Signature};
pub use output::TransactionOutput;
pub use script::Script;
pub use transaction::Transaction;
