//! Core client logic for a student-housing rental marketplace.
//!
//! Three pieces live here, between the UI layer and the managed backend:
//!
//! - multilingual listing text resolution with a deterministic fallback
//!   cascade ([`i18n`]),
//! - an optimistic per-user favorites cache ([`favorites`]),
//! - credit-ledger application after payment confirmation ([`credits`]).
//!
//! External services (backend rows and RPC, payment provider) sit behind
//! the traits in [`traits`]; [`mocks`] provides in-process fakes for tests.

pub mod config;
pub mod credits;
pub mod error;
pub mod favorites;
pub mod i18n;
pub mod marketplace;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod mocks;

pub use credits::CreditLedgerClient;
pub use error::{StayError, StayResult};
pub use favorites::FavoritesSet;
pub use i18n::{resolve_localized, LocalePreference, LocalizedField};
pub use marketplace::{
    AgencyId, Favorite, Listing, ListingId, ListingStatus, UserId, UNTITLED_LISTING,
};
pub use traits::{
    CheckoutSession, MarketplaceStore, PaymentProvider, PaymentStatus, SystemTimeProvider,
    TimeProvider,
};
