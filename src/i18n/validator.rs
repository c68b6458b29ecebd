//! Catalog completeness validation.
//!
//! Every key present in the default language's dictionary must be present
//! in every other enabled language; a miss means some page copy would
//! silently stay untranslated. Misses are reported, not fatal; the page
//! keeps working with the affected nodes left untouched.

use crate::i18n::{Catalog, Language, LanguageRegistry};
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys missing from a non-default dictionary
    pub errors: Vec<String>,

    /// Non-critical findings (e.g., keys only a non-default dictionary has)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation catalog completeness.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Check the global catalog against the registry's enabled languages.
    ///
    /// # Returns
    /// A `ValidationReport`: a key present in the default dictionary but
    /// absent from another language is an error; a key only present in a
    /// non-default dictionary is a warning.
    pub fn validate() -> ValidationReport {
        let catalog = Catalog::get();
        let default = Language::default_language();
        let default_keys: BTreeSet<_> = catalog.keys(default).into_iter().collect();

        let mut report = ValidationReport::new();

        for config in LanguageRegistry::get().list_enabled() {
            if config.code == default.code() {
                continue;
            }
            let language = match Language::from_code(config.code) {
                Ok(language) => language,
                Err(_) => continue,
            };
            let keys: BTreeSet<_> = catalog.keys(language).into_iter().collect();

            for missing in default_keys.difference(&keys) {
                report.errors.push(format!(
                    "Key '{}' is missing from the '{}' dictionary",
                    missing, config.code
                ));
            }

            for extra in keys.difference(&default_keys) {
                report.warnings.push(format!(
                    "Key '{}' exists only in the '{}' dictionary",
                    extra, config.code
                ));
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Catalog Validation Tests ====================

    #[test]
    fn test_shipped_catalog_is_complete() {
        let report = CatalogValidator::validate();
        assert!(
            report.is_clean(),
            "catalog validation found issues: {:?} {:?}",
            report.errors,
            report.warnings
        );
    }

    #[test]
    fn test_dictionaries_cover_identical_key_sets() {
        let catalog = Catalog::get();
        let en: BTreeSet<_> = catalog.keys(Language::ENGLISH).into_iter().collect();
        let sv: BTreeSet<_> = catalog.keys(Language::SWEDISH).into_iter().collect();
        assert_eq!(en, sv);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new_is_clean() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("missing key".to_string());
        assert!(report.has_errors());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("extra key".to_string());
        assert!(report.has_warnings());
        assert!(!report.has_errors());
        assert!(!report.is_clean());
    }
}
