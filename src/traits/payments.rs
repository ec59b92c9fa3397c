//! Payment provider abstraction for testable checkout-session retrieval.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Payment status reported by the provider for a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// The session has been paid in full.
    Paid,
    /// The session has not been paid (abandoned or still in progress).
    Unpaid,
    /// The session required no payment (zero-amount checkout).
    NoPaymentRequired,
    /// A status this client does not recognize; treated as not completed.
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    /// The provider's wire label for this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::NoPaymentRequired => "no_payment_required",
            Self::Unknown => "unknown",
        }
    }
}

/// A checkout session as returned by the payment provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider-issued session identifier.
    pub id: String,

    /// Whether the session has been paid.
    pub payment_status: PaymentStatus,

    /// Provider-issued payment-intent identifier, present once a payment
    /// has been attempted. Used to tag the credit ledger entry.
    pub payment_intent_id: Option<String>,

    /// Free-form metadata attached at session creation. Credit purchases
    /// carry `agency_id` and `credits_amount` here.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Abstraction over the external payment provider.
#[async_trait]
pub trait PaymentProvider: Send + Sync + Clone {
    /// Retrieve a checkout session by its provider-issued identifier.
    async fn retrieve_checkout_session(&self, session_id: &str) -> Result<CheckoutSession>;
}
