use serde::{Deserialize, Serialize};

use crate::marketplace::{ListingId, UserId};

/// A favorite relation row: one user has saved one listing.
///
/// Unique per `(user_id, listing_id)`; created on toggle-on, deleted on
/// toggle-off, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: UserId,
    pub listing_id: ListingId,

    /// Unix timestamp when the favorite was created.
    pub created_at: u64,
}

impl Favorite {
    pub fn new(user_id: UserId, listing_id: ListingId, created_at: u64) -> Self {
        Self {
            user_id,
            listing_id,
            created_at,
        }
    }
}
