//! Translation table: locale → key → display string.
//!
//! The default locale's sub-mapping always exists. Every constructor and
//! deserialization path inserts an empty one if the source data lacks it,
//! so the fallback step of a lookup never has to special-case its absence.

use crate::error::I18nError;
use crate::i18n::strings::BUILTIN_STRINGS;
use crate::i18n::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

type RawTable = HashMap<String, HashMap<String, String>>;

/// Two-level mapping from locale to message key to display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTable", into = "RawTable")]
pub struct TranslationTable {
    locales: RawTable,
}

impl TranslationTable {
    /// Create a table holding only an empty default-locale mapping.
    pub fn new() -> Self {
        Self::from(RawTable::new())
    }

    /// The table shipped with the crate (en-US and a partial fr-FR).
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for strings in BUILTIN_STRINGS {
            for (key, text) in strings.entries {
                table.insert(strings.locale, *key, *text);
            }
        }
        table
    }

    /// Parse a table from JSON of the form `{"en-US": {"key": "text"}}`.
    ///
    /// The caller is responsible for reading the text from wherever it lives.
    ///
    /// # Returns
    /// * `Ok(TranslationTable)` with an `en-US` mapping guaranteed present
    /// * `Err(I18nError::InvalidTable)` if the JSON is not a nested string map
    pub fn from_json(json: &str) -> Result<Self, I18nError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Insert (or replace) a single entry.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Look up an entry in exactly one locale, without fallback.
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
    }

    /// The sub-mapping for a locale, if the table has one.
    pub fn locale(&self, locale: &str) -> Option<&HashMap<String, String>> {
        self.locales.get(locale)
    }

    /// The default locale's sub-mapping.
    pub fn default_strings(&self) -> &HashMap<String, String> {
        // Always present, see `ensure_default`.
        static EMPTY: std::sync::OnceLock<HashMap<String, String>> = std::sync::OnceLock::new();
        self.locales
            .get(DEFAULT_LOCALE)
            .unwrap_or_else(|| EMPTY.get_or_init(HashMap::new))
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// All locales in the table, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Iterate over `(locale, sub-mapping)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashMap<String, String>)> {
        self.locales.iter().map(|(locale, strings)| (locale.as_str(), strings))
    }

    fn ensure_default(&mut self) {
        self.locales.entry(DEFAULT_LOCALE.to_string()).or_default();
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl From<RawTable> for TranslationTable {
    fn from(locales: RawTable) -> Self {
        let mut table = TranslationTable { locales };
        table.ensure_default();
        table
    }
}

impl From<TranslationTable> for RawTable {
    fn from(table: TranslationTable) -> Self {
        table.locales
    }
}
