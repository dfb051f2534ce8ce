//! Locale-aware message lookup with a guaranteed fallback chain.
//!
//! A key resolves against the active locale, then the default locale
//! (`en-US`), then to the key itself, so a lookup always produces text.
//!
//! ```rust
//! bionic_i18n::set_locale("fr-FR");
//! assert_eq!(bionic_i18n::t("welcome-header"), "Bienvenue sur Bionic GPT");
//! assert_eq!(bionic_i18n::t("model-loading"), "Loading model...");
//! ```

pub mod config;
pub mod error;
pub mod i18n;

pub use config::Config;
pub use error::I18nError;
pub use i18n::{
    current_locale, load_translations, set_locale, t, t_with_args, Locale, TranslationTable,
    Translator, DEFAULT_LOCALE,
};

/// Translate a key with the process-wide translator.
///
/// ```rust
/// use bionic_i18n::t;
///
/// assert_eq!(t!("nonexistent-key"), "nonexistent-key");
/// assert_eq!(t!("nonexistent-{$name}", name = "key"), "nonexistent-{$name}");
/// ```
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::t($key)
    };
    ($key:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $crate::i18n::t_with_args(
            $key,
            &[$((stringify!($name), $value.to_string().as_str())),+],
        )
    };
}
