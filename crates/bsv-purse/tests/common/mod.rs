//! In-memory collaborators and transaction fixtures shared by the
//! integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use bsv_purse::paymail::PaymailHandle;
use bsv_purse::swipe::{
    CryptoOperationResult, IdentityRequest, IdentityResponse, Payment, PaymentRequest,
};
use bsv_purse::{FundsSource, FundsSourceError, HandleResolver, ResolverError, SenderRequest};
use bsv_purse_tx::{p2pkh, Address, Script, Transaction, TransactionInput, TransactionOutput};

/// Recipient of the 600-sat fixture output.
pub const RECIPIENT: &str = "1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr";
pub const USER_HANDLE: &str = "alice@example.com";
/// Script the mock resolver hands out for change.
pub const CHANGE_SCRIPT: &str = "76a91400112233445566778899aabbccddeeff0011223388ac";

/// How [`MockSwipe`] answers payment requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayMode {
    /// Pay the requested address the requested amount.
    Honest,
    /// Pay somewhere else.
    WrongAddress,
    /// Refuse with a 402.
    Refuse,
}

pub struct MockSwipe {
    pub mode: PayMode,
    pub paymail: Option<String>,
    pub payments: Mutex<Vec<PaymentRequest>>,
    pub funding_txs: Mutex<Vec<Transaction>>,
    pub identity_calls: Mutex<Vec<IdentityRequest>>,
}

impl MockSwipe {
    pub fn new() -> Self {
        Self {
            mode: PayMode::Honest,
            paymail: Some(USER_HANDLE.to_string()),
            payments: Mutex::new(Vec::new()),
            funding_txs: Mutex::new(Vec::new()),
            identity_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_mode(mode: PayMode) -> Self {
        Self {
            mode,
            ..Self::new()
        }
    }

    pub fn with_paymail(paymail: Option<&str>) -> Self {
        Self {
            paymail: paymail.map(str::to_string),
            ..Self::new()
        }
    }

    pub fn payments(&self) -> Vec<PaymentRequest> {
        self.payments.lock().unwrap().clone()
    }

    pub fn funding_txs(&self) -> Vec<Transaction> {
        self.funding_txs.lock().unwrap().clone()
    }

    pub fn identity_call_count(&self) -> usize {
        self.identity_calls.lock().unwrap().len()
    }
}

/// Transaction paying `amount` to `to` at output 1, behind an unrelated
/// output 0, so the purse has to search for its output.
fn funding_transaction(to: &str, amount: u64) -> Transaction {
    let mut tx = Transaction::new();
    tx.add_input(TransactionInput {
        source_txid: [7u8; 32],
        source_tx_out_index: 3,
        unlocking_script: Script::from_bytes(&[0x51]),
        sequence_number: 0xFFFF_FFFF,
        source_output: None,
    });
    tx.add_output(TransactionOutput::new(
        5_000,
        Script::op_return(&[b"unrelated"]),
    ));
    let address = Address::from_string(to).unwrap();
    tx.add_output(TransactionOutput::new(amount, p2pkh::lock(&address)));
    tx
}

impl FundsSource for MockSwipe {
    async fn request_payment(&self, request: &PaymentRequest) -> Result<Payment, FundsSourceError> {
        self.payments.lock().unwrap().push(request.clone());

        let tx = match self.mode {
            PayMode::Honest => funding_transaction(&request.to, request.amount),
            PayMode::WrongAddress => funding_transaction(RECIPIENT, request.amount),
            PayMode::Refuse => {
                return Err(FundsSourceError::Rejected {
                    status: 402,
                    message: "insufficient funds".to_string(),
                })
            }
        };
        self.funding_txs.lock().unwrap().push(tx.clone());

        Ok(Payment {
            txid: tx.tx_id_hex(),
            rawtx: tx.to_hex(),
        })
    }

    async fn resolve_identity(
        &self,
        request: &IdentityRequest,
    ) -> Result<IdentityResponse, FundsSourceError> {
        self.identity_calls.lock().unwrap().push(request.clone());

        let crypto_operations = request
            .crypto_operations
            .iter()
            .map(|op| CryptoOperationResult {
                name: op.name.clone(),
                method: Some(op.method.clone()),
                value: self.paymail.clone(),
            })
            .collect();
        Ok(IdentityResponse { crypto_operations })
    }
}

/// Resolver that checks its inputs like a real host would and hands out a
/// fixed script.
pub struct MockPaymail {
    pub output: Option<String>,
    pub calls: Mutex<Vec<(String, SenderRequest)>>,
}

impl MockPaymail {
    pub fn new() -> Self {
        Self::returning(Some(CHANGE_SCRIPT))
    }

    /// `None` makes every lookup fail with `UnknownHandle`.
    pub fn returning(output: Option<&str>) -> Self {
        Self {
            output: output.map(str::to_string),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, SenderRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

impl HandleResolver for MockPaymail {
    async fn get_output_for(
        &self,
        handle: &str,
        sender: &SenderRequest,
    ) -> Result<String, ResolverError> {
        self.calls
            .lock()
            .unwrap()
            .push((handle.to_string(), sender.clone()));

        handle.parse::<PaymailHandle>()?;
        sender.validate()?;
        self.output.clone().ok_or(ResolverError::UnknownHandle)
    }
}

/// 600 sat to [`RECIPIENT`] plus a zero-value data output; 64 bytes with no
/// inputs.
pub fn payment_fixture() -> Transaction {
    let mut tx = Transaction::new();
    let recipient = Address::from_string(RECIPIENT).unwrap();
    tx.add_output(TransactionOutput::new(600, p2pkh::lock(&recipient)));
    tx.add_output(TransactionOutput::new(0, Script::op_return(&[b"somedata"])));
    tx
}

/// Zero-value data output only.
pub fn data_fixture() -> Transaction {
    let mut tx = Transaction::new();
    tx.add_output(TransactionOutput::new(0, Script::op_return(&[b"somedata"])));
    tx
}

/// An unsigned input spending output 0 of a made-up parent.
pub fn parent_input(satoshis: u64) -> TransactionInput {
    let recipient = Address::from_string(RECIPIENT).unwrap();
    TransactionInput::spending(
        "d2a1fc6c2d3dd2ed8e0e8d30a0cfe4f2c0f1fd05d7e2ad2e3e1a94b2c7f2a3b4",
        0,
        TransactionOutput::new(satoshis, p2pkh::lock(&recipient)),
    )
    .unwrap()
}

pub fn with_parent(mut tx: Transaction, satoshis: u64) -> Transaction {
    tx.add_input(parent_input(satoshis));
    tx
}
