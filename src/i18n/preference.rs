//! Process-wide locale preference.
//!
//! The active locale is chosen by the user at runtime and shared across the
//! whole UI process. Components read it here and pass it *explicitly* into
//! [`resolve_localized`](super::resolve_localized); the resolver itself
//! never consults ambient state.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::config::{DEFAULT_LOCALE, STAY_LOCALE_ENV};

/// Shared handle to the active locale code.
///
/// Cheap to clone; all clones observe the same value.
#[derive(Debug, Clone)]
pub struct LocalePreference {
    locale: Arc<RwLock<String>>,
}

impl LocalePreference {
    /// Create a preference starting at the given locale.
    ///
    /// The code is normalized (trimmed, lowercased); a blank code falls
    /// back to the default locale.
    pub fn new(initial: impl AsRef<str>) -> Self {
        Self {
            locale: Arc::new(RwLock::new(normalize(initial.as_ref()))),
        }
    }

    /// Create a preference from the `UNISTAY_LOCALE` environment variable,
    /// falling back to the default locale when unset.
    pub fn from_env() -> Self {
        match std::env::var(STAY_LOCALE_ENV) {
            Ok(value) => Self::new(value),
            Err(_) => Self::default(),
        }
    }

    /// The currently active locale code.
    pub fn get(&self) -> String {
        self.locale.read().clone()
    }

    /// Switch the active locale at runtime.
    pub fn set(&self, locale: impl AsRef<str>) {
        let normalized = normalize(locale.as_ref());
        debug!(locale = %normalized, "switching active locale");
        *self.locale.write() = normalized;
    }
}

impl Default for LocalePreference {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

fn normalize(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        DEFAULT_LOCALE.to_string()
    } else {
        trimmed.to_lowercase()
    }
}
