//! Backend storage abstraction for testable marketplace operations.
//!
//! The production backend is a managed service (row-level CRUD on the
//! favorites relation plus a server-side credits procedure); this trait
//! lets favorites and credit logic run against an in-process fake.

use anyhow::Result;
use async_trait::async_trait;

use crate::marketplace::{AgencyId, Favorite, ListingId, UserId};

/// Abstraction over the marketplace backend.
#[async_trait]
pub trait MarketplaceStore: Send + Sync + Clone {
    /// Fetch the complete set of favorite rows for a user.
    async fn list_favorites(&self, user: &UserId) -> Result<Vec<Favorite>>;

    /// Create a favorite row.
    ///
    /// Inserting a `(user, listing)` pair that already exists is a no-op
    /// (the relation is unique per pair and rows are never updated, so the
    /// original `created_at` stands).
    async fn insert_favorite(&self, favorite: &Favorite) -> Result<()>;

    /// Delete the favorite row for `(user, listing)`.
    ///
    /// Deleting a pair that does not exist is a no-op.
    async fn delete_favorite(&self, user: &UserId, listing: &ListingId) -> Result<()>;

    /// Atomically add purchased credits to an agency's balance.
    ///
    /// The ledger entry is tagged with `payment_intent_id`; the backend is
    /// expected to dedupe by that tag so the call tolerates replay (e.g. a
    /// page reload re-running the confirmation flow).
    ///
    /// Returns the agency's balance after the call.
    async fn add_agency_credits(
        &self,
        agency: &AgencyId,
        credits: u64,
        payment_intent_id: &str,
        description: &str,
    ) -> Result<u64>;
}
