//! Internationalization (i18n) module: locale-aware message lookup.
//!
//! # Architecture
//!
//! - `locale`: opaque `Locale` identifier and the default locale
//! - `strings`: built-in translation content
//! - `table`: `TranslationTable` (locale → key → text)
//! - `translator`: explicit `Translator` instance with the fallback chain
//! - `global`: process-wide translator behind `set_locale` / `t`
//! - `interpolate`: `{$name}` argument substitution
//! - `metrics`: lookup counters
//! - `validator`: table consistency checks
//!
//! # Example
//!
//! ```rust
//! use bionic_i18n::i18n::{TranslationTable, Translator};
//!
//! let translator = Translator::new(TranslationTable::builtin()).with_locale("fr-FR");
//!
//! assert_eq!(translator.t("welcome-header"), "Bienvenue sur Bionic GPT");
//! assert_eq!(translator.t("model-loading"), "Loading model...");
//! assert_eq!(translator.t("nonexistent-key"), "nonexistent-key");
//! ```

mod global;
mod interpolate;
mod locale;
mod metrics;
mod strings;
mod table;
mod translator;
mod validator;

pub use global::{
    current_locale, init, load_translations, metrics, set_locale, snapshot, t, t_with_args,
};
pub use interpolate::{interpolate, placeholders};
pub use locale::{Locale, DEFAULT_LOCALE};
pub use metrics::{LookupMetrics, MetricsReport};
pub use strings::{LocaleStrings, BUILTIN_STRINGS};
pub use table::TranslationTable;
pub use translator::{Lookup, Translator};
pub use validator::{LocaleCoverage, TableValidator, ValidationReport};
