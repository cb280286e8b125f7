//! bsvalias HTTP client.

use reqwest::Response;
use serde::de::DeserializeOwned;

use super::error::ResolverError;
use super::types::{
    fill_template, Capabilities, PaymailHandle, PaymentDestinationResponse, SenderRequest,
    PAYMENT_DESTINATION,
};
use super::HandleResolver;

/// Configuration for a [`PaymailClient`].
#[derive(Debug, Clone, Default)]
pub struct PaymailConfig {
    /// Scheme and host used for capability discovery instead of
    /// `https://{domain}`.
    pub discovery_base_url: Option<String>,
}

/// [`HandleResolver`] that speaks the bsvalias protocol over HTTPS.
#[derive(Debug, Clone)]
pub struct PaymailClient {
    /// Client configuration.
    config: PaymailConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl PaymailClient {
    /// Create a new paymail client with the given configuration.
    pub fn new(config: PaymailConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Fetch the capability document for `domain`.
    pub async fn capabilities(&self, domain: &str) -> Result<Capabilities, ResolverError> {
        let base = match self.config.discovery_base_url {
            Some(ref url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{domain}"),
        };
        let url = format!("{base}/.well-known/bsvalias");

        let resp = self.client.get(&url).send().await?;
        Self::parse(resp).await
    }

    /// Ask the host of `handle` for an output script on behalf of `sender`.
    pub async fn resolve_output(
        &self,
        handle: &str,
        sender: &SenderRequest,
    ) -> Result<String, ResolverError> {
        let handle: PaymailHandle = handle.parse()?;
        sender.validate()?;

        let capabilities = self.capabilities(&handle.domain).await?;
        let template = capabilities
            .endpoint(PAYMENT_DESTINATION)
            .ok_or(ResolverError::CapabilityMissing)?;
        let url = fill_template(template, &handle);

        let resp = self.client.post(&url).json(sender).send().await?;
        let destination: PaymentDestinationResponse = Self::parse(resp).await?;
        Ok(destination.output)
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T, ResolverError> {
        let status = resp.status();

        if status.as_u16() == 404 {
            return Err(ResolverError::UnknownHandle);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ResolverError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }
}

impl HandleResolver for PaymailClient {
    async fn get_output_for(
        &self,
        handle: &str,
        sender: &SenderRequest,
    ) -> Result<String, ResolverError> {
        self.resolve_output(handle, sender).await
    }
}
