//! Process-wide translator.
//!
//! Holds the current locale for hosts that want a single global setting.
//! Access goes through an `RwLock`, so calls from multiple threads are safe;
//! a poisoned lock is recovered rather than propagated, since a string
//! lookup must never fail.

use crate::config::Config;
use crate::i18n::metrics::MetricsReport;
use crate::i18n::{Locale, TranslationTable, Translator};
use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Global translator instance (initialized lazily)
static TRANSLATOR: OnceLock<RwLock<Translator>> = OnceLock::new();

fn translator() -> &'static RwLock<Translator> {
    TRANSLATOR.get_or_init(|| RwLock::new(Translator::default()))
}

fn read() -> RwLockReadGuard<'static, Translator> {
    translator().read().unwrap_or_else(|e| e.into_inner())
}

fn write() -> RwLockWriteGuard<'static, Translator> {
    translator().write().unwrap_or_else(|e| e.into_inner())
}

/// Apply configuration: initial locale and unknown-locale warnings.
///
/// Keeps the loaded table and the lookup counters collected so far.
pub fn init(config: &Config) {
    write().configure(config);
}

/// Set the active locale. Any string is accepted.
pub fn set_locale(locale: impl Into<Locale>) {
    write().set_locale(locale);
}

pub fn current_locale() -> Locale {
    read().locale().clone()
}

/// Resolve a key under the active locale. Never fails.
///
/// # Example
/// ```
/// bionic_i18n::i18n::set_locale("invalid-locale");
/// assert_eq!(bionic_i18n::i18n::t("model-loading"), "Loading model...");
/// ```
pub fn t(key: &str) -> String {
    read().t(key)
}

/// Resolve a key under the active locale and substitute `{$name}` arguments.
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    read().t_with_args(key, args)
}

/// Replace the global translation table.
pub fn load_translations(table: TranslationTable) {
    write().load_translations(table);
}

pub fn metrics() -> MetricsReport {
    read().metrics_report()
}

/// A copy of the global translator for request-scoped use.
///
/// Later `set_locale` calls on the global state don't affect the copy.
pub fn snapshot() -> Translator {
    read().clone()
}
