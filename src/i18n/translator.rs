//! Translator: key resolution with a guaranteed fallback chain.
//!
//! Resolution order for a key:
//!
//! 1. the current locale's entry, if present and non-empty
//! 2. the default locale's (`en-US`) entry, if present and non-empty
//! 3. the key itself
//!
//! Every step is infallible, so `t` is total over all inputs. An unknown
//! current locale simply has no entries and falls through to step 2.
//!
//! Each lookup bumps one of the shared [`LookupMetrics`] counters. This is
//! the only state a lookup touches and it never changes the returned text.

use crate::config::Config;
use crate::error::I18nError;
use crate::i18n::interpolate::interpolate;
use crate::i18n::metrics::{LookupMetrics, MetricsReport};
use crate::i18n::{Locale, TranslationTable, DEFAULT_LOCALE};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of a lookup, tagged with the step of the chain that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Found in the current locale
    Current(&'a str),
    /// Found in the default locale
    Default(&'a str),
    /// Found nowhere; holds the key itself
    Missing(&'a str),
}

impl<'a> Lookup<'a> {
    /// The resolved display string.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Lookup::Current(text) | Lookup::Default(text) | Lookup::Missing(text) => text,
        }
    }

    /// Check if the chain ended at the key itself.
    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing(_))
    }
}

/// Translator with an explicit current locale.
///
/// Cloning is cheap: the table and metrics are shared. Use
/// [`Translator::with_locale`] to derive a request-scoped translator
/// without touching any shared state.
#[derive(Debug, Clone)]
pub struct Translator {
    table: Arc<TranslationTable>,
    locale: Locale,
    metrics: Arc<LookupMetrics>,
    warn_unknown_locale: bool,
}

impl Translator {
    /// Create a translator over `table`, starting in the default locale.
    pub fn new(table: TranslationTable) -> Self {
        Self {
            table: Arc::new(table),
            locale: Locale::default_locale(),
            metrics: Arc::new(LookupMetrics::new()),
            warn_unknown_locale: false,
        }
    }

    pub fn from_config(table: TranslationTable, config: &Config) -> Self {
        let mut translator = Self::new(table);
        translator.configure(config);
        translator
    }

    /// Apply configuration in place.
    ///
    /// Table and metrics are kept, so counters collected so far survive and
    /// clones made earlier keep sharing them.
    pub fn configure(&mut self, config: &Config) {
        self.warn_unknown_locale = config.warn_unknown_locale;
        self.set_locale(config.initial_locale.clone());
    }

    /// Switch the current locale.
    ///
    /// Any string is accepted. A locale missing from the table is kept as-is
    /// and every lookup falls back to the default locale. The warning for
    /// such locales is off unless enabled through [`Config`].
    pub fn set_locale(&mut self, locale: impl Into<Locale>) {
        let locale = locale.into();
        if self.warn_unknown_locale && !self.table.has_locale(locale.as_str()) {
            warn!(
                "Locale '{}' has no translations, falling back to {}",
                locale, DEFAULT_LOCALE
            );
        }
        self.locale = locale;
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// A copy of this translator in another locale, sharing table and metrics.
    pub fn with_locale(&self, locale: impl Into<Locale>) -> Self {
        let mut translator = self.clone();
        translator.set_locale(locale);
        translator
    }

    /// Resolve a key and report which step of the chain answered.
    ///
    /// # Arguments
    /// * `key` - The message key (e.g., "welcome-header"); any string is valid
    ///
    /// # Returns
    /// * `Lookup::Current` if the current locale has a non-empty entry
    /// * `Lookup::Default` if only the default locale has one
    /// * `Lookup::Missing` holding `key` otherwise
    pub fn lookup<'a>(&'a self, key: &'a str) -> Lookup<'a> {
        if let Some(text) = non_empty(self.table.get(self.locale.as_str(), key)) {
            self.metrics.record_current_hit();
            return Lookup::Current(text);
        }

        if let Some(text) = non_empty(self.table.get(DEFAULT_LOCALE, key)) {
            self.metrics.record_default_fallback();
            debug!(
                "Translation key '{}' not found in {}, using {}",
                key, self.locale, DEFAULT_LOCALE
            );
            return Lookup::Default(text);
        }

        self.metrics.record_key_fallback();
        debug!("Missing translation key '{}', returning key as-is", key);
        Lookup::Missing(key)
    }

    /// Resolve a key to its display string. Never fails.
    ///
    /// # Example
    /// ```
    /// use bionic_i18n::Translator;
    ///
    /// let translator = Translator::default().with_locale("fr-FR");
    /// assert_eq!(translator.t("model-loading"), "Loading model...");
    /// ```
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).as_str().to_string()
    }

    /// Resolve a key and substitute `{$name}` arguments.
    ///
    /// A key missing everywhere is returned unchanged, without substitution.
    pub fn t_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let found = self.lookup(key);
        if found.is_missing() {
            return key.to_string();
        }
        interpolate(found.as_str(), args)
    }

    /// Replace the translation table. The current locale is kept.
    pub fn load_translations(&mut self, table: TranslationTable) {
        info!("Loaded translations for {} locale(s)", table.locales().len());
        self.table = Arc::new(table);
    }

    /// Strict check for hosts that want to reject unsupported locales.
    ///
    /// Lookups never call this; `set_locale` stays permissive.
    pub fn check_locale(&self, locale: &str) -> Result<(), I18nError> {
        if self.table.has_locale(locale) {
            Ok(())
        } else {
            Err(I18nError::UnknownLocale(locale.to_string()))
        }
    }

    /// Locales present in the table, sorted.
    pub fn available_locales(&self) -> Vec<Locale> {
        self.table.locales().into_iter().map(Locale::from).collect()
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }

    pub fn metrics_report(&self) -> MetricsReport {
        self.metrics.report()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslationTable::builtin())
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}
