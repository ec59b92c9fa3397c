//! Multilingual content: localized fields, the resolution cascade, and the
//! process-wide locale preference.

pub mod localized;
pub mod preference;

pub use localized::{resolve_localized, LocalizedField};
pub use preference::LocalePreference;
