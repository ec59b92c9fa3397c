//! Per-user favorites cache with optimistic backend sync.
//!
//! Holds the set of listing identifiers the current user has saved. Toggles
//! mutate the in-memory set first and reconcile with the backend after;
//! a failed backend request reverts the set to its pre-toggle snapshot.
//! Failures are logged, never propagated — the visible fallback is simply
//! the unchanged set.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::marketplace::{Favorite, ListingId, UserId};
use crate::traits::{MarketplaceStore, TimeProvider};

#[derive(Debug)]
struct FavoritesInner {
    /// Bound user, `None` between sessions.
    user: Option<UserId>,
    listings: HashSet<ListingId>,
}

/// The current user's favorited listings.
///
/// Cheap to clone; all clones share the same set. Toggles are not queued or
/// serialized: a rapid double-toggle before the first request resolves can
/// leave client and backend transiently inconsistent until both settle.
#[derive(Clone)]
pub struct FavoritesSet<S: MarketplaceStore, T: TimeProvider> {
    store: S,
    time: T,
    inner: Arc<RwLock<FavoritesInner>>,
}

impl<S: MarketplaceStore, T: TimeProvider> FavoritesSet<S, T> {
    pub fn new(store: S, time: T) -> Self {
        Self {
            store,
            time,
            inner: Arc::new(RwLock::new(FavoritesInner {
                user: None,
                listings: HashSet::new(),
            })),
        }
    }

    /// Session establishment: bind a user and load their favorites
    /// wholesale from the backend.
    ///
    /// A failed load binds the user with an empty set (logged); a later
    /// [`refresh`](Self::refresh) can heal it.
    pub async fn bind_user(&self, user: UserId) {
        let listings: HashSet<ListingId> = match self.store.list_favorites(&user).await {
            Ok(rows) => rows.into_iter().map(|f| f.listing_id).collect(),
            Err(e) => {
                warn!(user = %user, error = %e, "failed to load favorites, starting empty");
                HashSet::new()
            }
        };

        info!(user = %user, count = listings.len(), "favorites loaded");
        let mut inner = self.inner.write().await;
        inner.user = Some(user);
        inner.listings = listings;
    }

    /// Session teardown: clear the bound user and the set.
    pub async fn unbind_user(&self) {
        let mut inner = self.inner.write().await;
        inner.user = None;
        inner.listings.clear();
    }

    /// Re-fetch the bound user's favorites and replace the set wholesale.
    ///
    /// No-op when no user is bound; on fetch failure the current set is
    /// kept as-is.
    pub async fn refresh(&self) {
        let user = match self.current_user().await {
            Some(user) => user,
            None => return,
        };

        match self.store.list_favorites(&user).await {
            Ok(rows) => {
                let mut inner = self.inner.write().await;
                // Session may have changed while the fetch was in flight.
                if inner.user.as_ref() == Some(&user) {
                    inner.listings = rows.into_iter().map(|f| f.listing_id).collect();
                }
            }
            Err(e) => {
                warn!(user = %user, error = %e, "favorites refresh failed, keeping current set");
            }
        }
    }

    /// Membership test against the in-memory set.
    pub async fn is_favorited(&self, listing: &ListingId) -> bool {
        self.inner.read().await.listings.contains(listing)
    }

    /// Snapshot of the currently favorited listing identifiers.
    pub async fn favorited(&self) -> Vec<ListingId> {
        self.inner.read().await.listings.iter().cloned().collect()
    }

    /// Number of favorited listings.
    pub async fn count(&self) -> usize {
        self.inner.read().await.listings.len()
    }

    /// The user this set is bound to, if any.
    pub async fn current_user(&self) -> Option<UserId> {
        self.inner.read().await.user.clone()
    }

    /// Toggle a listing's favorite state and return the resulting
    /// membership.
    ///
    /// With no bound user this is a no-op returning `false`. Otherwise the
    /// set is flipped optimistically, then the matching create/delete is
    /// issued (new rows are stamped with the current time); on backend
    /// failure the pre-toggle snapshot is restored and the failure is
    /// logged, not surfaced.
    pub async fn toggle(&self, listing: &ListingId) -> bool {
        let (user, adding, snapshot) = {
            let mut inner = self.inner.write().await;
            let user = match inner.user.clone() {
                Some(user) => user,
                None => {
                    debug!(listing = %listing, "favorite toggle ignored: no authenticated user");
                    return false;
                }
            };

            let snapshot = inner.listings.clone();
            let adding = !inner.listings.contains(listing);
            if adding {
                inner.listings.insert(listing.clone());
            } else {
                inner.listings.remove(listing);
            }
            (user, adding, snapshot)
        };

        let result = if adding {
            let row = Favorite::new(user.clone(), listing.clone(), self.time.now_unix());
            self.store.insert_favorite(&row).await
        } else {
            self.store.delete_favorite(&user, listing).await
        };

        match result {
            Ok(()) => adding,
            Err(e) => {
                warn!(listing = %listing, error = %e, "favorite toggle failed, reverting");
                let mut inner = self.inner.write().await;
                // Only roll back if the session is still the one we
                // toggled under; a teardown in flight wins.
                if inner.user.as_ref() == Some(&user) {
                    inner.listings = snapshot;
                }
                inner.listings.contains(listing)
            }
        }
    }
}
