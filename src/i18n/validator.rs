//! Translation table validation.
//!
//! Checks every non-default locale against the default locale: placeholders
//! must match, keys should exist in the default locale, and entries should
//! not be empty (an empty entry silently falls back).

use crate::i18n::interpolate::placeholders;
use crate::i18n::{TranslationTable, DEFAULT_LOCALE};
use serde::Serialize;

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that produce wrong output at runtime
    pub errors: Vec<String>,

    /// Problems that only degrade to fallback text
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// How much of the default locale a locale translates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleCoverage {
    pub locale: String,

    /// Default-locale keys with a non-empty entry in this locale
    pub translated: usize,

    /// Keys in the default locale
    pub total: usize,

    /// Coverage as a percentage (0-100); 100 when the default locale is empty
    pub percent: f64,
}

/// Validator for translation tables.
pub struct TableValidator;

impl TableValidator {
    /// Validate every non-default locale against the default locale.
    ///
    /// This function checks that:
    /// - every translation uses the same `{$name}` placeholders as its
    ///   default-locale entry (errors)
    /// - every translated key exists in the default locale (warnings)
    /// - no translated entry is empty (warnings)
    ///
    /// # Arguments
    /// * `table` - The table to check
    ///
    /// # Returns
    /// A `ValidationReport` with sorted errors and warnings.
    pub fn validate(table: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let defaults = table.default_strings();

        for (locale, strings) in table.iter().filter(|(locale, _)| *locale != DEFAULT_LOCALE) {
            for (key, text) in strings {
                if text.is_empty() {
                    report.warnings.push(format!(
                        "Empty entry for '{}' in {} will fall back to {}",
                        key, locale, DEFAULT_LOCALE
                    ));
                    continue;
                }

                let Some(default_text) = defaults.get(key) else {
                    report.warnings.push(format!(
                        "Key '{}' in {} has no {} entry",
                        key, locale, DEFAULT_LOCALE
                    ));
                    continue;
                };

                let expected = placeholders(default_text);
                let actual = placeholders(text);
                if expected != actual {
                    report.errors.push(format!(
                        "Placeholder mismatch for '{}' in {}: {} has {:?}, translation has {:?}",
                        key, locale, DEFAULT_LOCALE, expected, actual
                    ));
                }
            }
        }

        report.errors.sort();
        report.warnings.sort();
        report
    }

    /// Measure how many default-locale keys `locale` translates.
    ///
    /// # Arguments
    /// * `table` - The table to measure
    /// * `locale` - The locale to measure; an unknown locale has 0% coverage
    ///
    /// # Returns
    /// A `LocaleCoverage` counting only non-empty entries.
    pub fn coverage(table: &TranslationTable, locale: &str) -> LocaleCoverage {
        let defaults = table.default_strings();
        let total = defaults.len();
        let translated = match table.locale(locale) {
            Some(strings) => defaults
                .keys()
                .filter(|key| strings.get(*key).is_some_and(|text| !text.is_empty()))
                .count(),
            None => 0,
        };
        let percent = if total > 0 {
            (translated as f64 / total as f64) * 100.0
        } else {
            100.0
        };

        LocaleCoverage {
            locale: locale.to_string(),
            translated,
            total,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Validation Tests ====================

    #[test]
    fn test_builtin_table_is_clean() {
        let report = TableValidator::validate(&TranslationTable::builtin());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_placeholder_mismatch_is_error() {
        let mut table = TranslationTable::new();
        table.insert("en-US", "greeting", "Hello {$name}");
        table.insert("fr-FR", "greeting", "Bonjour {$nom}");

        let report = TableValidator::validate(&table);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("greeting"));
        assert!(report.errors[0].contains("fr-FR"));
    }

    #[test]
    fn test_placeholder_order_does_not_matter() {
        let mut table = TranslationTable::new();
        table.insert("en-US", "msg", "{$name} has {$count}");
        table.insert("fr-FR", "msg", "{$count} pour {$name}");

        assert!(TableValidator::validate(&table).is_clean());
    }

    #[test]
    fn test_orphan_key_is_warning() {
        let mut table = TranslationTable::new();
        table.insert("fr-FR", "only-french", "Seulement");

        let report = TableValidator::validate(&table);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("only-french"));
    }

    #[test]
    fn test_empty_entry_is_warning() {
        let mut table = TranslationTable::builtin();
        table.insert("fr-FR", "model-loading", "");

        let report = TableValidator::validate(&table);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("Empty entry"));
    }

    #[test]
    fn test_default_locale_not_checked_against_itself() {
        let mut table = TranslationTable::new();
        table.insert("en-US", "blank", "");
        assert!(TableValidator::validate(&table).is_clean());
    }

    // ==================== Coverage Tests ====================

    #[test]
    fn test_coverage_partial() {
        let coverage = TableValidator::coverage(&TranslationTable::builtin(), "fr-FR");
        assert_eq!(coverage.translated, 1);
        assert_eq!(coverage.total, 2);
        assert_eq!(coverage.percent, 50.0);
    }

    #[test]
    fn test_coverage_default_locale_full() {
        let coverage = TableValidator::coverage(&TranslationTable::builtin(), "en-US");
        assert_eq!(coverage.percent, 100.0);
    }

    #[test]
    fn test_coverage_unknown_locale() {
        let coverage = TableValidator::coverage(&TranslationTable::builtin(), "invalid-locale");
        assert_eq!(coverage.translated, 0);
        assert_eq!(coverage.percent, 0.0);
    }

    #[test]
    fn test_coverage_empty_default() {
        let coverage = TableValidator::coverage(&TranslationTable::new(), "fr-FR");
        assert_eq!(coverage.total, 0);
        assert_eq!(coverage.percent, 100.0);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_new_is_clean() {
        let report = ValidationReport::default();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }
}
