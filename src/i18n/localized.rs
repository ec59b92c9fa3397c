//! Multilingual text fields and the locale resolution cascade.
//!
//! Listing text columns are stored either as a bare string or as a JSON
//! object mapping locale codes to translations. The resolver picks the best
//! string for a requested locale and always degrades to *something*
//! human-readable rather than a blank field; English is the universal
//! fallback because it is assumed to be present on all records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{FALLBACK_LOCALE, REGION_FALLBACK_SUFFIX};

/// A text field whose value may vary by locale.
///
/// `Plain` carries a single untranslated string; `Localized` maps lowercase
/// locale codes (`en`, `it`, `en-us`) to translations. Keys are matched
/// case-insensitively at resolution time, so mixed-case keys from older
/// records still resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedField {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl LocalizedField {
    /// Build a field from an arbitrary backend JSON value.
    ///
    /// A JSON string becomes `Plain`; a JSON object becomes `Localized`
    /// keeping only its string-typed members. Any other shape (number,
    /// array, bool, null) yields `None` and the caller's fallback applies.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(Self::Plain(s.clone())),
            serde_json::Value::Object(map) => {
                let translations: BTreeMap<String, String> = map
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect();
                Some(Self::Localized(translations))
            }
            _ => None,
        }
    }

    /// Resolve the best string for `requested`, or `fallback`.
    ///
    /// See [`resolve_localized`] for the full cascade.
    pub fn resolve(&self, requested: &str, fallback: &str) -> String {
        resolve_localized(Some(self), requested, fallback)
    }
}

impl From<&str> for LocalizedField {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_string())
    }
}

impl From<String> for LocalizedField {
    fn from(s: String) -> Self {
        Self::Plain(s)
    }
}

/// Resolve the best display string for a localized field.
///
/// The cascade, in order:
/// 1. absent field -> `fallback`
/// 2. plain string -> itself if non-empty after trimming, else `fallback`
/// 3. mapping: exact requested locale, then its primary subtag, then
///    primary subtag + `-us`, then `en`, then `en-us` — first candidate
///    with a non-empty (post-trim) value wins, matched case-insensitively
/// 4. first key (lexicographic order) starting with the requested primary
///    subtag, then first key starting with `en`
/// 5. first non-empty value in key order
/// 6. `fallback`
///
/// Total over all inputs: never panics, never errors.
pub fn resolve_localized(
    field: Option<&LocalizedField>,
    requested: &str,
    fallback: &str,
) -> String {
    let map = match field {
        None => return fallback.to_string(),
        Some(LocalizedField::Plain(s)) => {
            return if s.trim().is_empty() {
                fallback.to_string()
            } else {
                s.clone()
            };
        }
        Some(LocalizedField::Localized(map)) => map,
    };

    // Case-insensitive view. On a case collision (`EN` and `en`) the
    // lexicographically first key wins.
    let mut lowered: BTreeMap<String, &String> = BTreeMap::new();
    for (key, value) in map {
        lowered.entry(key.to_lowercase()).or_insert(value);
    }

    let requested = requested.trim().to_lowercase();
    let primary = requested
        .split('-')
        .next()
        .unwrap_or_default()
        .to_string();
    let primary_region = format!("{primary}{REGION_FALLBACK_SUFFIX}");
    let english_region = format!("{FALLBACK_LOCALE}{REGION_FALLBACK_SUFFIX}");

    let candidates = [
        requested.as_str(),
        primary.as_str(),
        primary_region.as_str(),
        FALLBACK_LOCALE,
        english_region.as_str(),
    ];
    for candidate in candidates {
        if let Some(value) = lowered.get(candidate) {
            if !value.trim().is_empty() {
                return (*value).clone();
            }
        }
    }

    // Prefix search: any translation in the requested language family,
    // then any English variant.
    let prefixes = [primary.as_str(), FALLBACK_LOCALE];
    for prefix in prefixes {
        if prefix.is_empty() {
            continue;
        }
        for (key, value) in &lowered {
            if key.starts_with(prefix) && !value.trim().is_empty() {
                return (*value).clone();
            }
        }
    }

    // Last resort: any non-empty translation at all.
    for value in map.values() {
        if !value.trim().is_empty() {
            return value.clone();
        }
    }

    fallback.to_string()
}
