//! Swipe request and response bodies.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name of the identity operation that yields the user's paymail handle.
pub const USER_PAYMAIL: &str = "userPaymail";

/// Ask the funds source to pay `amount` units of `currency` to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Destination address.
    pub to: String,
    /// Amount in `currency` units; a decimal string on the wire.
    #[serde(serialize_with = "amount_to_string", deserialize_with = "amount_from_string")]
    pub amount: u64,
    /// Currency unit, normally `BSV-SAT`.
    pub currency: String,
}

fn amount_to_string<S: Serializer>(amount: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(amount)
}

fn amount_from_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

/// A payment made by the funds source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Txid of the paying transaction, display order.
    pub txid: String,
    /// Paying transaction, hex.
    pub rawtx: String,
}

/// One identity operation to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoOperation {
    /// Name the result is reported under.
    pub name: String,
    /// Method the service uses to produce the value.
    pub method: String,
}

/// Identity query sent to the funds source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRequest {
    /// Operations to evaluate.
    pub crypto_operations: Vec<CryptoOperation>,
}

impl IdentityRequest {
    /// Request for the user's own paymail handle.
    pub fn user_paymail() -> Self {
        Self {
            crypto_operations: vec![CryptoOperation {
                name: USER_PAYMAIL.to_string(),
                method: "paymail".to_string(),
            }],
        }
    }
}

/// Result of one identity operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoOperationResult {
    /// Operation name, echoed from the request.
    pub name: String,
    /// Method, when echoed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Produced value, absent if the service could not evaluate it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Identity query answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    /// Evaluated operations.
    #[serde(default)]
    pub crypto_operations: Vec<CryptoOperationResult>,
}

impl IdentityResponse {
    /// The non-empty value reported for `name`, if any.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.crypto_operations
            .iter()
            .filter(|op| op.name == name)
            .find_map(|op| op.value.as_deref().filter(|v| !v.is_empty()))
    }
}

/// Raw swipe response; either half may be present depending on the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SwipeResponse {
    #[serde(default)]
    pub payment: Option<Payment>,
    #[serde(default)]
    pub crypto_operations: Vec<CryptoOperationResult>,
}
