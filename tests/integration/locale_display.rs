//! Locale resolution as the UI consumes it: the process-wide preference
//! feeding listing accessors.

use unistay::{LocalePreference, UNTITLED_LISTING};

use crate::common::StayHarness;

#[tokio::test]
async fn test_listing_titles_follow_the_active_locale() {
    let harness = StayHarness::new();
    let listing = harness.listing_with_titles(
        "lst-1",
        &[("en", "Room near campus"), ("it", "Stanza vicino al campus")],
    );

    assert_eq!(harness.locale.get(), "en");
    assert_eq!(listing.title_in(&harness.locale.get()), "Room near campus");

    harness.locale.set("it");
    assert_eq!(
        listing.title_in(&harness.locale.get()),
        "Stanza vicino al campus"
    );
}

#[tokio::test]
async fn test_unsupported_locale_degrades_to_english() {
    let harness = StayHarness::new();
    let listing = harness.listing_with_titles(
        "lst-1",
        &[("en", "Room near campus"), ("it", "Stanza vicino al campus")],
    );

    harness.locale.set("fr");
    assert_eq!(listing.title_in(&harness.locale.get()), "Room near campus");
}

#[tokio::test]
async fn test_mixed_case_catalog_still_resolves() {
    let harness = StayHarness::new();
    let listing = harness.listing_with_titles("lst-1", &[("EN", "Room near campus")]);

    assert_eq!(listing.title_in("en"), "Room near campus");
    assert_eq!(listing.title_in("en-GB"), "Room near campus");
}

#[tokio::test]
async fn test_untranslatable_listing_shows_untitled_marker() {
    let harness = StayHarness::new();
    let listing = harness.listing_with_titles("lst-1", &[("it", "   ")]);

    assert_eq!(listing.title_in("it"), UNTITLED_LISTING);
}

#[tokio::test]
async fn test_regional_preference_matches_primary_catalog() {
    let harness = StayHarness::new();
    let listing = harness.listing_with_titles("lst-1", &[("it", "Stanza"), ("en", "Room")]);
    let pref = LocalePreference::new("it-CH");

    assert_eq!(listing.title_in(&pref.get()), "Stanza");
}
