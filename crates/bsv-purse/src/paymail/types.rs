//! Paymail request and response bodies.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ResolverError;

/// Capability key for the payment destination endpoint template.
pub const PAYMENT_DESTINATION: &str = "paymentDestination";

/// A parsed `alias@domain` handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymailHandle {
    /// Local part.
    pub alias: String,
    /// Host part, lower-cased.
    pub domain: String,
}

impl FromStr for PaymailHandle {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (alias, domain) = s
            .split_once('@')
            .ok_or_else(|| ResolverError::InvalidHandle(s.to_string()))?;
        let valid = !alias.is_empty()
            && !domain.is_empty()
            && !domain.contains('@')
            && !domain.contains('/')
            && !alias.chars().any(char::is_whitespace)
            && !domain.chars().any(char::is_whitespace);
        if !valid {
            return Err(ResolverError::InvalidHandle(s.to_string()));
        }
        Ok(Self {
            alias: alias.to_string(),
            domain: domain.to_ascii_lowercase(),
        })
    }
}

impl fmt::Display for PaymailHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.alias, self.domain)
    }
}

/// Who is asking for an output, sent with the destination request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderRequest {
    /// Sender's own handle.
    pub sender_handle: String,
    /// Request timestamp, RFC 3339.
    pub dt: String,
    /// Signature over the request, or a placeholder.
    pub signature: String,
    /// Sender display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    /// Free-text purpose of the payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Intended amount in satoshis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

impl SenderRequest {
    /// Request with the three required fields set.
    pub fn new(
        sender_handle: impl Into<String>,
        dt: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            sender_handle: sender_handle.into(),
            dt: dt.into(),
            signature: signature.into(),
            sender_name: None,
            purpose: None,
            amount: None,
        }
    }

    /// Check the required fields are non-empty.
    pub fn validate(&self) -> Result<(), ResolverError> {
        if self.sender_handle.is_empty() {
            return Err(ResolverError::MissingField("senderHandle"));
        }
        if self.dt.is_empty() {
            return Err(ResolverError::MissingField("dt"));
        }
        if self.signature.is_empty() {
            return Err(ResolverError::MissingField("signature"));
        }
        Ok(())
    }
}

/// The host's `.well-known/bsvalias` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Protocol version.
    #[serde(default)]
    pub bsvalias: Option<String>,
    /// Capability name to endpoint template (or flag).
    #[serde(default)]
    pub capabilities: HashMap<String, serde_json::Value>,
}

impl Capabilities {
    /// The endpoint template for `name`, if advertised as a URL.
    pub fn endpoint(&self, name: &str) -> Option<&str> {
        self.capabilities
            .get(name)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Payment destination answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDestinationResponse {
    /// Hex locking script.
    pub output: String,
}

/// Substitute `handle` into a capability template.
pub(crate) fn fill_template(template: &str, handle: &PaymailHandle) -> String {
    template
        .replace("{alias}", &handle.alias)
        .replace("{domain.tld}", &handle.domain)
}
