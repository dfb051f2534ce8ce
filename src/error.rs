use thiserror::Error;

/// Errors from the optional, fallible parts of the crate.
///
/// Lookups themselves never fail; these only surface when a host builds a
/// table from text or asks for a strict locale check.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("invalid translation table: {0}")]
    InvalidTable(#[from] serde_json::Error),

    #[error("unknown locale: '{0}'")]
    UnknownLocale(String),
}
