//! Built-in translation content.
//!
//! Stand-in for real resource files: hosts that ship their own content
//! replace it through `load_translations`.

/// Built-in strings for one locale as `(key, text)` pairs.
pub struct LocaleStrings {
    pub locale: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

// ==================== English Strings ====================

/// English (US) strings, the canonical fallback set
pub const EN_US_STRINGS: LocaleStrings = LocaleStrings {
    locale: "en-US",
    entries: &[
        ("model-loading", "Loading model..."),
        ("welcome-header", "Welcome to Bionic GPT"),
    ],
};

// ==================== French Strings ====================

/// French strings. Deliberately partial: missing keys fall back to English.
pub const FR_FR_STRINGS: LocaleStrings = LocaleStrings {
    locale: "fr-FR",
    entries: &[("welcome-header", "Bienvenue sur Bionic GPT")],
};

/// Every locale shipped with the crate.
pub const BUILTIN_STRINGS: &[LocaleStrings] = &[EN_US_STRINGS, FR_FR_STRINGS];
