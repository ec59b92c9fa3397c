//! Credit ledger client: turns a confirmed checkout session into credits
//! on an agency's balance.
//!
//! The client performs no local deduplication: it may run more than once
//! for the same session (a confirmation page reload, for instance). Replay
//! safety is the backend procedure's contract, keyed by the payment-intent
//! identifier the ledger entry is tagged with.

use tracing::info;

use crate::config::{credit_purchase_description, METADATA_AGENCY_ID, METADATA_CREDITS_AMOUNT};
use crate::error::{StayError, StayResult};
use crate::marketplace::AgencyId;
use crate::traits::{MarketplaceStore, PaymentProvider, PaymentStatus};

/// Applies purchased credits after payment confirmation.
#[derive(Clone)]
pub struct CreditLedgerClient<P, S> {
    payments: P,
    store: S,
}

impl<P: PaymentProvider, S: MarketplaceStore> CreditLedgerClient<P, S> {
    pub fn new(payments: P, store: S) -> Self {
        Self { payments, store }
    }

    /// Apply the credits purchased through a checkout session.
    ///
    /// Retrieves the session, verifies it is paid, extracts the agency and
    /// credit quantity from its metadata, and invokes the backend's atomic
    /// credit procedure tagged with the session's payment-intent
    /// identifier. Returns the number of credits applied.
    pub async fn apply_session_credits(&self, session_id: &str) -> StayResult<u64> {
        let session = self
            .payments
            .retrieve_checkout_session(session_id)
            .await
            .map_err(|e| StayError::Payment(format!("session '{session_id}': {e}")))?;

        if session.payment_status != PaymentStatus::Paid {
            return Err(StayError::PaymentNotCompleted {
                status: session.payment_status.as_str().to_string(),
            });
        }

        let agency = required_metadata(&session.metadata, METADATA_AGENCY_ID)?;
        let credits_raw = required_metadata(&session.metadata, METADATA_CREDITS_AMOUNT)?;
        let credits: i64 = credits_raw.parse().map_err(|_| {
            StayError::InvalidSessionMetadata(format!(
                "'{METADATA_CREDITS_AMOUNT}' is not an integer: '{credits_raw}'"
            ))
        })?;
        if credits <= 0 {
            return Err(StayError::InvalidSessionMetadata(format!(
                "'{METADATA_CREDITS_AMOUNT}' must be positive, got {credits}"
            )));
        }
        let credits = credits as u64;

        // The intent id is the backend's idempotency key; a paid session
        // without one cannot be applied safely.
        let payment_intent = session
            .payment_intent_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                StayError::InvalidSessionMetadata(
                    "paid session carries no payment-intent identifier".to_string(),
                )
            })?;

        let agency = AgencyId::from(agency);
        let description = credit_purchase_description(credits, &session.id);
        let balance = self
            .store
            .add_agency_credits(&agency, credits, payment_intent, &description)
            .await
            .map_err(|e| StayError::CreditApplicationFailed(e.to_string()))?;

        info!(
            agency = %agency,
            credits,
            payment_intent,
            balance,
            "agency credits applied"
        );
        Ok(credits)
    }
}

fn required_metadata<'a>(
    metadata: &'a std::collections::HashMap<String, String>,
    key: &str,
) -> Result<&'a str, StayError> {
    metadata
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| StayError::InvalidSessionMetadata(format!("missing '{key}'")))
}
