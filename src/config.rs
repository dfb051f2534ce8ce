use crate::i18n::{Locale, DEFAULT_LOCALE};
use anyhow::{Context, Result};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Locale active before any `set_locale` call
    pub initial_locale: Locale,

    /// Log a warning when switching to a locale the table doesn't have.
    /// Off by default: unknown locales are accepted silently.
    pub warn_unknown_locale: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_locale: Locale::default_locale(),
            warn_unknown_locale: false,
        }
    }
}

impl Config {
    /// Load `.env` (if present) and then read the environment.
    pub fn load() -> Result<Self> {
        // Missing .env is fine; real deployments set variables directly
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Load variables from a specific env file, then read the environment.
    ///
    /// Variables already set in the process take precedence over the file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?;
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let warn_unknown_locale = match var("I18N_WARN_UNKNOWN_LOCALE") {
            Some(value) => value
                .trim()
                .parse::<bool>()
                .with_context(|| {
                    format!("I18N_WARN_UNKNOWN_LOCALE must be true or false, got '{}'", value)
                })?,
            None => false,
        };

        Ok(Self {
            initial_locale: var("APP_LOCALE")
                .filter(|v| !v.trim().is_empty())
                .map(|v| Locale::new(v.trim()))
                .unwrap_or_else(|| Locale::new(DEFAULT_LOCALE)),
            warn_unknown_locale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::TempDir;

    const VARS: [&str; 2] = ["APP_LOCALE", "I18N_WARN_UNKNOWN_LOCALE"];

    fn clear_env() {
        for name in VARS {
            std::env::remove_var(name);
        }
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.initial_locale, "en-US");
        assert!(!config.warn_unknown_locale);
    }

    #[test]
    fn test_app_locale() {
        let config = Config::from_lookup(lookup(&[("APP_LOCALE", "fr-FR")])).unwrap();
        assert_eq!(config.initial_locale, "fr-FR");
    }

    #[test]
    fn test_blank_app_locale_uses_default() {
        let config = Config::from_lookup(lookup(&[("APP_LOCALE", "  ")])).unwrap();
        assert_eq!(config.initial_locale, "en-US");
    }

    #[test]
    fn test_warn_unknown_locale_enabled() {
        let config =
            Config::from_lookup(lookup(&[("I18N_WARN_UNKNOWN_LOCALE", "true")])).unwrap();
        assert!(config.warn_unknown_locale);
    }

    #[test]
    fn test_warn_unknown_locale_invalid() {
        let result = Config::from_lookup(lookup(&[("I18N_WARN_UNKNOWN_LOCALE", "maybe")]));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("I18N_WARN_UNKNOWN_LOCALE"));
    }

    // ==================== Environment Tests ====================

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        clear_env();
        std::env::set_var("APP_LOCALE", "fr-FR");
        std::env::set_var("I18N_WARN_UNKNOWN_LOCALE", "true");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.initial_locale, "fr-FR");
        assert!(config.warn_unknown_locale);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_bool() {
        clear_env();
        std::env::set_var("I18N_WARN_UNKNOWN_LOCALE", "yes");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_load_without_env_file_uses_environment() {
        clear_env();
        std::env::set_var("APP_LOCALE", "de-DE");

        let config = Config::load().expect("Should load");
        clear_env();

        assert_eq!(config.initial_locale, "de-DE");
    }

    #[test]
    #[serial]
    fn test_load_from_env_file() {
        clear_env();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let env_path = temp_dir.path().join(".env");
        std::fs::write(
            &env_path,
            "APP_LOCALE=fr-FR\nI18N_WARN_UNKNOWN_LOCALE=true\n",
        )
        .expect("Failed to write env file");

        let config = Config::load_from(&env_path).expect("Should load");
        clear_env();

        assert_eq!(config.initial_locale, "fr-FR");
        assert!(config.warn_unknown_locale);
    }

    #[test]
    #[serial]
    fn test_load_from_does_not_override_environment() {
        clear_env();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let env_path = temp_dir.path().join(".env");
        std::fs::write(&env_path, "APP_LOCALE=fr-FR\n").expect("Failed to write env file");
        std::env::set_var("APP_LOCALE", "es-ES");

        let config = Config::load_from(&env_path).expect("Should load");
        clear_env();

        assert_eq!(config.initial_locale, "es-ES");
    }

    #[test]
    #[serial]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = Config::load_from(temp_dir.path().join("missing.env"));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing.env"));
    }
}
