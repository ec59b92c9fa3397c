//! Configuration constants for the marketplace client core.
//!
//! This module centralizes magic values and configuration defaults
//! to improve maintainability and enable easier tuning.

/// Default locale used when no preference has been chosen yet.
pub const DEFAULT_LOCALE: &str = "en";

/// Universal fallback locale tried after the requested locale fails.
/// Assumed to be present on all records.
pub const FALLBACK_LOCALE: &str = "en";

/// Region suffix appended to a primary language subtag as an intermediate
/// fallback (`it` -> `it-us`, `en` -> `en-us`).
pub const REGION_FALLBACK_SUFFIX: &str = "-us";

/// Checkout-session metadata key holding the agency identifier.
pub const METADATA_AGENCY_ID: &str = "agency_id";

/// Checkout-session metadata key holding the purchased credit quantity.
pub const METADATA_CREDITS_AMOUNT: &str = "credits_amount";

/// Environment variable for overriding the active locale at startup.
pub const STAY_LOCALE_ENV: &str = "UNISTAY_LOCALE";

/// Build the ledger-entry description for a credit purchase.
pub fn credit_purchase_description(credits: u64, session_id: &str) -> String {
    format!("Purchase of {credits} listing credits (checkout session {session_id})")
}
