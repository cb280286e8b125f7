//! HTTP client for the swipe endpoint.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;

use super::error::FundsSourceError;
use super::types::{IdentityRequest, IdentityResponse, Payment, PaymentRequest, SwipeResponse};
use super::FundsSource;

/// Configuration for a [`SwipeClient`].
#[derive(Debug, Clone)]
pub struct SwipeConfig {
    /// Base URL of the wallet API; requests go to `{base_url}/swipe`.
    pub base_url: String,
    /// Optional Bearer token for authentication.
    pub api_key: Option<String>,
}

impl SwipeConfig {
    /// Config for `base_url` with no API key.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}

/// [`FundsSource`] backed by a wallet's HTTP swipe endpoint.
#[derive(Debug, Clone)]
pub struct SwipeClient {
    /// Client configuration.
    config: SwipeConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl SwipeClient {
    /// Create a new swipe client with the given configuration.
    pub fn new(config: SwipeConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// The client's configuration.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    async fn swipe<B: Serialize + ?Sized>(&self, body: &B) -> Result<SwipeResponse, FundsSourceError> {
        let url = format!("{}/swipe", self.config.base_url.trim_end_matches('/'));

        let resp = self
            .client
            .post(&url)
            .headers(self.build_headers())
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("rejected").to_string()
            } else {
                body
            };
            return Err(FundsSourceError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    /// Build common headers from config.
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(ref key) = self.config.api_key {
            if let Ok(val) = HeaderValue::from_str(&format!("Bearer {key}")) {
                headers.insert(AUTHORIZATION, val);
            }
        }

        headers
    }
}

impl FundsSource for SwipeClient {
    async fn request_payment(&self, request: &PaymentRequest) -> Result<Payment, FundsSourceError> {
        self.swipe(request)
            .await?
            .payment
            .ok_or(FundsSourceError::MissingPayment)
    }

    async fn resolve_identity(
        &self,
        request: &IdentityRequest,
    ) -> Result<IdentityResponse, FundsSourceError> {
        let response = self.swipe(request).await?;
        Ok(IdentityResponse {
            crypto_operations: response.crypto_operations,
        })
    }
}
