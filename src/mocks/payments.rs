//! Mock payment provider for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::{METADATA_AGENCY_ID, METADATA_CREDITS_AMOUNT};
use crate::traits::{CheckoutSession, PaymentProvider, PaymentStatus};

/// Mock payment provider holding preloaded checkout sessions.
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MockPayments {
    sessions: Arc<RwLock<HashMap<String, CheckoutSession>>>,
    fail_retrievals: Arc<RwLock<bool>>,
    retrieve_count: Arc<AtomicU64>,
}

impl MockPayments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a checkout session.
    pub async fn insert_session(&self, session: CheckoutSession) {
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session);
    }

    /// Set whether session retrievals should fail.
    pub async fn set_fail_retrievals(&self, fail: bool) {
        *self.fail_retrievals.write().await = fail;
    }

    /// Number of retrieval calls made.
    pub fn retrieve_count(&self) -> u64 {
        self.retrieve_count.load(Ordering::SeqCst)
    }

    /// Build a paid session carrying well-formed credit-purchase metadata.
    pub fn paid_session(
        session_id: &str,
        payment_intent_id: &str,
        agency_id: &str,
        credits_amount: &str,
    ) -> CheckoutSession {
        let mut metadata = HashMap::new();
        metadata.insert(METADATA_AGENCY_ID.to_string(), agency_id.to_string());
        metadata.insert(
            METADATA_CREDITS_AMOUNT.to_string(),
            credits_amount.to_string(),
        );
        CheckoutSession {
            id: session_id.to_string(),
            payment_status: PaymentStatus::Paid,
            payment_intent_id: Some(payment_intent_id.to_string()),
            metadata,
        }
    }

    /// Build an unpaid session (abandoned checkout).
    pub fn unpaid_session(session_id: &str) -> CheckoutSession {
        CheckoutSession {
            id: session_id.to_string(),
            payment_status: PaymentStatus::Unpaid,
            payment_intent_id: None,
            metadata: HashMap::new(),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockPayments {
    async fn retrieve_checkout_session(&self, session_id: &str) -> Result<CheckoutSession> {
        self.retrieve_count.fetch_add(1, Ordering::SeqCst);
        if *self.fail_retrievals.read().await {
            bail!("simulated payment provider outage");
        }
        match self.sessions.read().await.get(session_id) {
            Some(session) => Ok(session.clone()),
            None => bail!("no such checkout session: {session_id}"),
        }
    }
}
