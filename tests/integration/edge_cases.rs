//! Edge cases across components: racing toggles, session teardown during
//! an in-flight failure, listing visibility at window boundaries.

use unistay::mocks::MockBackendFailure;
use unistay::{ListingId, ListingStatus, TimeProvider};

use crate::common::StayHarness;

#[tokio::test]
async fn test_rapid_double_toggle_settles_consistent() {
    // Toggles are not serialized; once both requests settle, client and
    // backend agree.
    let harness = StayHarness::new();
    harness.bind_user("u1").await;
    let listing = ListingId::from("lst-1");

    let favorites_a = harness.favorites.clone();
    let favorites_b = harness.favorites.clone();
    let (first, second) = tokio::join!(favorites_a.toggle(&listing), favorites_b.toggle(&listing));

    // The in-memory flips are serialized by the set's lock: one toggle
    // added, the other removed, and the set ends where it started. Backend
    // row order under a race is best-effort by design, so it is not
    // asserted here.
    assert_ne!(first, second);
    assert!(!harness.favorites.is_favorited(&listing).await);
}

#[tokio::test]
async fn test_teardown_during_failed_toggle_does_not_resurrect_set() {
    let harness = StayHarness::new();
    harness.bind_user("u1").await;
    harness
        .backend
        .set_fail_mode(Some(MockBackendFailure::Favorites))
        .await;

    // The failing toggle reverts only if the same session is still bound;
    // here the teardown happens after the toggle settles, so the set must
    // stay empty either way.
    harness.favorites.toggle(&ListingId::from("lst-1")).await;
    harness.favorites.unbind_user().await;

    assert_eq!(harness.favorites.count().await, 0);
    assert!(harness.favorites.current_user().await.is_none());
}

#[tokio::test]
async fn test_listing_visibility_at_window_boundary() {
    let harness = StayHarness::new();
    let listing = harness.listing_with_titles("lst-1", &[("en", "Room")]);

    // `active_until` is one day past harness time.
    assert!(listing.is_visible_at(harness.time.now_unix()));
    assert!(!listing.is_visible_at(listing.active_until));
    assert_eq!(listing.funding_remaining_at(listing.active_until), 0);
}

#[tokio::test]
async fn test_lapsed_listing_still_resolves_text() {
    // Text resolution is independent of visibility; a lapsed listing's
    // detail page still renders.
    let harness = StayHarness::new();
    let mut listing = harness.listing_with_titles("lst-1", &[("en", "Room")]);
    listing.status = ListingStatus::Inactive;

    assert!(!listing.is_visible_at(harness.time.now_unix()));
    assert_eq!(listing.title_in("en"), "Room");
}
