use serde::{Deserialize, Serialize};

use crate::i18n::LocalizedField;
use crate::marketplace::{AgencyId, ListingId};
use crate::traits::TimeProvider;

/// Fallback shown when a listing has no resolvable title in any locale.
pub const UNTITLED_LISTING: &str = "Untitled listing";

/// Status of a listing in the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Published and credit-funded; shown in search results.
    Active,
    /// Unpublished or out of credits; hidden from tenants.
    Inactive,
}

/// A student-housing property listing.
///
/// Text columns are [`LocalizedField`]s: older records carry bare strings,
/// newer records carry per-locale mappings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Backend identifier of this listing.
    pub id: ListingId,

    /// Agency that owns and funds the listing.
    pub agency_id: AgencyId,

    /// Title of the property.
    pub title: LocalizedField,

    /// Longer description; absent on sparse records.
    pub description: Option<LocalizedField>,

    /// City the property is in.
    pub city: String,

    /// Monthly rent in euro cents.
    pub monthly_rent_cents: u64,

    /// Unix timestamp until which the listing's credit funding runs.
    /// Consumption happens server-side; this crate only reads it.
    pub active_until: u64,

    /// Unix timestamp when the listing was created.
    pub created_at: u64,

    /// Current status of the listing.
    pub status: ListingStatus,
}

impl Listing {
    /// Resolve the title for display in the given locale.
    pub fn title_in(&self, locale: &str) -> String {
        self.title.resolve(locale, UNTITLED_LISTING)
    }

    /// Resolve the description for display in the given locale.
    /// An absent or untranslatable description renders as empty.
    pub fn description_in(&self, locale: &str) -> String {
        crate::i18n::resolve_localized(self.description.as_ref(), locale, "")
    }

    /// Check whether the listing is currently visible to tenants.
    pub fn is_visible(&self, time: &dyn TimeProvider) -> bool {
        self.is_visible_at(time.now_unix())
    }

    /// Check whether the listing is visible at a specific timestamp.
    pub const fn is_visible_at(&self, now: u64) -> bool {
        matches!(self.status, ListingStatus::Active) && self.active_until > now
    }

    /// Seconds of credit funding remaining (0 if lapsed).
    pub fn funding_remaining(&self, time: &dyn TimeProvider) -> u64 {
        self.funding_remaining_at(time.now_unix())
    }

    /// Seconds of credit funding remaining at a specific timestamp.
    pub const fn funding_remaining_at(&self, now: u64) -> u64 {
        self.active_until.saturating_sub(now)
    }
}
