//! The purse: estimate, decide, act.

use bsv_purse_tx::Transaction;
use tracing::debug;

use crate::change::add_change_output;
use crate::config::PurseConfig;
use crate::fee::{net_satoshis_needed, ParentReference};
use crate::funding::add_funding_input;
use crate::paymail::HandleResolver;
use crate::policy::{decide, FundingDecision};
use crate::swipe::FundsSource;
use crate::PurseError;

/// Funds transactions from a [`FundsSource`] and returns surpluses through a
/// [`HandleResolver`].
///
/// Holds no per-call state, so one purse can serve concurrent `pay` calls.
#[derive(Debug, Clone)]
pub struct Purse<S, R> {
    funds_source: S,
    resolver: R,
    config: PurseConfig,
}

impl<S, R> Purse<S, R>
where
    S: FundsSource,
    R: HandleResolver,
{
    /// A purse with the default configuration.
    pub fn new(funds_source: S, resolver: R) -> Self {
        Self::with_config(funds_source, resolver, PurseConfig::default())
    }

    /// A purse with an explicit configuration.
    pub fn with_config(funds_source: S, resolver: R, config: PurseConfig) -> Self {
        Self {
            funds_source,
            resolver,
            config,
        }
    }

    /// The purse configuration.
    pub fn config(&self) -> &PurseConfig {
        &self.config
    }

    /// The funds source.
    pub fn funds_source(&self) -> &S {
        &self.funds_source
    }

    /// The handle resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Balance `raw_tx_hex` and return the resulting transaction hex.
    ///
    /// `parents` lists the values spent by the transaction's existing inputs.
    /// If the transaction is within dust of balanced, `raw_tx_hex` is returned
    /// as given. Otherwise one funding input or one change output is
    /// appended. The result is not checked for overall validity.
    ///
    /// # Errors
    ///
    /// Any decoding, collaborator, or signing failure aborts the call.
    #[tracing::instrument(level = "debug", skip_all, err)]
    pub async fn pay(
        &self,
        raw_tx_hex: &str,
        parents: &[ParentReference],
    ) -> Result<String, PurseError> {
        let tx = Transaction::from_hex(raw_tx_hex)?;
        let policy = &self.config.fee_policy;

        let needed = net_satoshis_needed(&tx, parents, policy)?;
        let decision = decide(needed, policy.dust_limit);
        debug!(needed, ?decision, "funding decision");

        match decision {
            FundingDecision::FundExact(sats) | FundingDecision::FundDustFloor(sats) => {
                add_funding_input(&self.funds_source, &self.config, tx, sats).await
            }
            FundingDecision::Unchanged => Ok(raw_tx_hex.to_string()),
            FundingDecision::Refund(sats) => {
                add_change_output(&self.funds_source, &self.resolver, tx, sats).await
            }
        }
    }
}
