//! The funding decision table.

/// What the purse does with a transaction, chosen from its net need `n`.
///
/// | Condition          | Decision        |
/// |--------------------|-----------------|
/// | `n > dust`         | `FundExact(n)`  |
/// | `0 < n <= dust`    | `FundDustFloor` |
/// | `-dust < n <= 0`   | `Unchanged`     |
/// | `n <= -dust`       | `Refund(-n)`    |
///
/// The two middle bands absorb small deficits and surpluses as fee instead
/// of creating sub-dust values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundingDecision {
    /// Request exactly the shortfall.
    FundExact(u64),
    /// Shortfall is at most dust; request the dust limit instead.
    FundDustFloor(u64),
    /// Leave the transaction as it is.
    Unchanged,
    /// Return the surplus as a change output.
    Refund(u64),
}

impl FundingDecision {
    /// Amount to request from the funds source, if this decision funds.
    pub fn requested_satoshis(&self) -> Option<u64> {
        match *self {
            FundingDecision::FundExact(sats) | FundingDecision::FundDustFloor(sats) => Some(sats),
            FundingDecision::Unchanged | FundingDecision::Refund(_) => None,
        }
    }

    /// Change to emit, if this decision refunds.
    pub fn change_satoshis(&self) -> Option<u64> {
        match *self {
            FundingDecision::Refund(sats) => Some(sats),
            _ => None,
        }
    }
}

/// Pick the decision for net need `net_needed` under `dust_limit`.
pub fn decide(net_needed: i64, dust_limit: u64) -> FundingDecision {
    let dust = i64::try_from(dust_limit).unwrap_or(i64::MAX);
    if net_needed > dust {
        FundingDecision::FundExact(net_needed.unsigned_abs())
    } else if net_needed > 0 {
        FundingDecision::FundDustFloor(dust_limit)
    } else if net_needed > -dust {
        FundingDecision::Unchanged
    } else {
        FundingDecision::Refund(net_needed.unsigned_abs())
    }
}
