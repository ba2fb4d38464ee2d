use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A completed payout to the seller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub date: DateTime<Utc>,
    pub amount_cents: i64,
}

/// Seller earnings: lifetime total, the pending balance, and the most recent
/// payout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earnings {
    pub total_cents: i64,
    pub pending_cents: i64,
    pub last_payout: Payout,
}

/// Failure modes of the payout operation.
#[derive(Debug, Error)]
pub enum PayoutError {
    #[error("no pending earnings to pay out")]
    NothingPending,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl Earnings {
    /// Pay out the pending balance.
    ///
    /// Moves the whole pending amount into `last_payout` (dated `at`) and
    /// resets pending to zero. Fails when nothing is pending; the totals are
    /// untouched in that case.
    pub fn request_payout(&mut self, at: DateTime<Utc>) -> Result<Payout, PayoutError> {
        if self.pending_cents <= 0 {
            return Err(PayoutError::NothingPending);
        }
        let payout = Payout {
            date: at,
            amount_cents: self.pending_cents,
        };
        self.pending_cents = 0;
        self.last_payout = payout.clone();
        Ok(payout)
    }
}
