//! Locale type: an opaque, unvalidated locale identifier.
//!
//! Any string is accepted as a locale. Whether a locale is actually
//! available is a property of the translation table, not of this type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The locale used as the final source of translations.
pub const DEFAULT_LOCALE: &str = "en-US";

/// A locale identifier such as `"en-US"` or `"fr-FR"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from any string. No validation is performed.
    pub fn new(code: impl Into<String>) -> Self {
        Locale(code.into())
    }

    /// The default (fallback) locale, `en-US`.
    pub fn default_locale() -> Self {
        Locale(DEFAULT_LOCALE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LOCALE
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Locale::new(code)
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Locale(code)
    }
}

impl From<&Locale> for Locale {
    fn from(locale: &Locale) -> Self {
        locale.clone()
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
