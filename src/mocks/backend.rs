//! Mock marketplace backend for testing.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::marketplace::{AgencyId, Favorite, ListingId, UserId};
use crate::traits::MarketplaceStore;

/// Types of failures that can be simulated.
#[derive(Debug, Clone)]
pub enum MockBackendFailure {
    /// Fail all operations.
    All,
    /// Fail only favorite operations.
    Favorites,
    /// Fail only the credits procedure.
    Credits,
    /// Fail favorite operations on a specific listing.
    OnListing(ListingId),
}

/// A recorded call to the credits procedure, for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCreditCall {
    pub agency: AgencyId,
    pub credits: u64,
    pub payment_intent_id: String,
    pub description: String,
}

#[derive(Debug, Default)]
struct MockBackendInner {
    /// Favorite rows: Map<user, Map<listing, row>>.
    favorites: RwLock<HashMap<UserId, HashMap<ListingId, Favorite>>>,
    /// Credit balances per agency.
    balances: RwLock<HashMap<AgencyId, u64>>,
    /// Payment-intent ids already applied (backend-side idempotency).
    applied_intents: RwLock<HashSet<String>>,
    /// Every credits call that reached the backend, including replays.
    credit_calls: RwLock<Vec<RecordedCreditCall>>,
    /// Number of favorite mutations that reached the backend.
    favorite_calls: AtomicU64,
    /// Whether to simulate failures.
    fail_mode: RwLock<Option<MockBackendFailure>>,
}

/// Mock backend for testing.
///
/// Simulates the managed backend: the favorites relation, agency credit
/// balances, and the atomic credits procedure with idempotency per
/// payment-intent id. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    inner: Arc<MockBackendInner>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether (and which) operations should fail.
    pub async fn set_fail_mode(&self, mode: Option<MockBackendFailure>) {
        *self.inner.fail_mode.write().await = mode;
    }

    /// Seed favorite rows for a user, bypassing the client path.
    /// Seeded rows are stamped with `created_at = 0`.
    pub async fn seed_favorites(&self, user: &UserId, listings: &[ListingId]) {
        let mut favorites = self.inner.favorites.write().await;
        let rows = favorites.entry(user.clone()).or_default();
        for listing in listings {
            rows.insert(
                listing.clone(),
                Favorite::new(user.clone(), listing.clone(), 0),
            );
        }
    }

    /// The listing identifiers currently favorited by a user.
    pub async fn favorites_of(&self, user: &UserId) -> HashSet<ListingId> {
        self.inner
            .favorites
            .read()
            .await
            .get(user)
            .map(|rows| rows.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// The full favorite rows currently stored for a user.
    pub async fn favorite_rows(&self, user: &UserId) -> Vec<Favorite> {
        self.inner
            .favorites
            .read()
            .await
            .get(user)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Seed an agency's credit balance.
    pub async fn set_balance(&self, agency: &AgencyId, balance: u64) {
        self.inner
            .balances
            .write()
            .await
            .insert(agency.clone(), balance);
    }

    /// An agency's current credit balance (0 if unknown).
    pub async fn balance(&self, agency: &AgencyId) -> u64 {
        self.inner
            .balances
            .read()
            .await
            .get(agency)
            .copied()
            .unwrap_or(0)
    }

    /// All credits calls that reached the backend, including replays.
    pub async fn credit_calls(&self) -> Vec<RecordedCreditCall> {
        self.inner.credit_calls.read().await.clone()
    }

    /// Number of credits calls that reached the backend.
    pub async fn credit_call_count(&self) -> usize {
        self.inner.credit_calls.read().await.len()
    }

    /// Number of favorite mutations that reached the backend.
    pub async fn favorite_call_count(&self) -> u64 {
        self.inner.favorite_calls.load(Ordering::SeqCst)
    }

    async fn check_favorite_failure(&self, listing: Option<&ListingId>) -> Result<()> {
        match &*self.inner.fail_mode.read().await {
            Some(MockBackendFailure::All) | Some(MockBackendFailure::Favorites) => {
                bail!("simulated backend failure")
            }
            Some(MockBackendFailure::OnListing(failing)) => {
                if listing == Some(failing) {
                    bail!("simulated backend failure on listing {failing}")
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    async fn check_credit_failure(&self) -> Result<()> {
        match &*self.inner.fail_mode.read().await {
            Some(MockBackendFailure::All) | Some(MockBackendFailure::Credits) => {
                bail!("simulated backend failure")
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl MarketplaceStore for MockBackend {
    async fn list_favorites(&self, user: &UserId) -> Result<Vec<Favorite>> {
        self.check_favorite_failure(None).await?;
        Ok(self.favorite_rows(user).await)
    }

    async fn insert_favorite(&self, favorite: &Favorite) -> Result<()> {
        self.inner.favorite_calls.fetch_add(1, Ordering::SeqCst);
        self.check_favorite_failure(Some(&favorite.listing_id)).await?;
        self.inner
            .favorites
            .write()
            .await
            .entry(favorite.user_id.clone())
            .or_default()
            // Unique per pair: a re-insert keeps the original row.
            .entry(favorite.listing_id.clone())
            .or_insert_with(|| favorite.clone());
        Ok(())
    }

    async fn delete_favorite(&self, user: &UserId, listing: &ListingId) -> Result<()> {
        self.inner.favorite_calls.fetch_add(1, Ordering::SeqCst);
        self.check_favorite_failure(Some(listing)).await?;
        if let Some(set) = self.inner.favorites.write().await.get_mut(user) {
            set.remove(listing);
        }
        Ok(())
    }

    async fn add_agency_credits(
        &self,
        agency: &AgencyId,
        credits: u64,
        payment_intent_id: &str,
        description: &str,
    ) -> Result<u64> {
        self.inner
            .credit_calls
            .write()
            .await
            .push(RecordedCreditCall {
                agency: agency.clone(),
                credits,
                payment_intent_id: payment_intent_id.to_string(),
                description: description.to_string(),
            });
        self.check_credit_failure().await?;

        // Idempotency per payment-intent id: a replayed call leaves the
        // balance untouched.
        let mut applied = self.inner.applied_intents.write().await;
        let mut balances = self.inner.balances.write().await;
        let balance = balances.entry(agency.clone()).or_insert(0);
        if applied.insert(payment_intent_id.to_string()) {
            *balance += credits;
        }
        Ok(*balance)
    }
}
