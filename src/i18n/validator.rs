//! Catalog validation.
//!
//! Checks the completeness guarantee (the default language covers every key
//! the document references) and reports how much of the default language
//! each other language translates.

use crate::i18n::{Catalog, LanguageRegistry, TaggedElements};
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Problems that leave text untranslatable in the default language
    pub errors: Vec<String>,

    /// Partial translations and other non-fatal findings
    pub warnings: Vec<String>,

    /// Percentage of default-language keys each language translates
    pub coverage: BTreeMap<String, f64>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            coverage: BTreeMap::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CatalogValidator;

static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate `catalog` against the keys a document references.
    ///
    /// Errors:
    /// - a referenced key is missing from the default language
    /// - a key does not look like `lower_snake_case`
    ///
    /// Warnings:
    /// - a language lacks some default-language keys
    /// - a language defines keys the default language does not
    /// - a catalog language has no selector metadata, or is disabled
    /// - the default language is not the registry's canonical language
    ///
    /// Keys mapped to an empty string count as missing.
    pub fn validate<'a>(
        catalog: &Catalog,
        registry: &LanguageRegistry,
        referenced_keys: impl IntoIterator<Item = &'a str>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();
        let default = catalog.default_language().as_str();
        let default_keys: BTreeSet<&str> = catalog
            .translated_keys(default)
            .into_iter()
            .map(|key| key.as_str())
            .collect();

        if let Some(canonical) = registry.canonical() {
            if canonical.code != default {
                report.warnings.push(format!(
                    "Default language '{}' differs from the site's source language '{}'",
                    default, canonical.code
                ));
            }
        }

        let referenced: BTreeSet<&str> = referenced_keys.into_iter().collect();
        for key in &referenced {
            if !default_keys.contains(key) {
                report.errors.push(format!(
                    "Key '{}' is referenced by the document but missing from default language '{}'",
                    key, default
                ));
            }
        }

        for code in catalog.languages() {
            let code = code.as_str();
            for key in catalog.keys(code).into_iter().filter(|key| !Self::is_valid_key(key.as_str())) {
                report
                    .errors
                    .push(format!("Language '{}' has malformed key '{}'", code, key));
            }

            let keys: BTreeSet<&str> = catalog
                .translated_keys(code)
                .into_iter()
                .map(|key| key.as_str())
                .collect();

            if registry.get_by_code(code).is_none() {
                report
                    .warnings
                    .push(format!("Language '{}' has no selector metadata", code));
            } else if !registry.is_enabled(code) {
                report
                    .warnings
                    .push(format!("Language '{}' is disabled in the selector", code));
            }

            if code == default {
                report.coverage.insert(code.to_string(), 100.0);
                continue;
            }

            let missing = default_keys.difference(&keys).count();
            if missing > 0 {
                report.warnings.push(format!(
                    "Language '{}' is missing {} of {} keys",
                    code,
                    missing,
                    default_keys.len()
                ));
            }

            let orphans: Vec<_> = keys.difference(&default_keys).collect();
            if !orphans.is_empty() {
                report.warnings.push(format!(
                    "Language '{}' has keys not in default language: {:?}",
                    code, orphans
                ));
            }

            let coverage = if default_keys.is_empty() {
                100.0
            } else {
                ((default_keys.len() - missing) as f64 / default_keys.len() as f64) * 100.0
            };
            report.coverage.insert(code.to_string(), coverage);
        }

        report
    }

    /// Validate `catalog` against the elements collected from a document.
    pub fn validate_document(
        catalog: &Catalog,
        registry: &LanguageRegistry,
        elements: &TaggedElements,
    ) -> ValidationReport {
        Self::validate(
            catalog,
            registry,
            elements.keys().into_iter().map(|key| key.as_str()),
        )
    }

    fn is_valid_key(key: &str) -> bool {
        let regex = KEY_REGEX.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());
        regex.is_match(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LanguageConfig;

    fn catalog() -> Catalog {
        Catalog::builder("en")
            .language("en", [("greet", "Hello"), ("bye", "Goodbye")])
            .language("es", [("greet", "Hola")])
            .build()
            .unwrap()
    }

    // ==================== Key Format Tests ====================

    #[test]
    fn test_valid_keys() {
        assert!(CatalogValidator::is_valid_key("hero_title_1"));
        assert!(CatalogValidator::is_valid_key("greet"));
    }

    #[test]
    fn test_invalid_keys() {
        assert!(!CatalogValidator::is_valid_key(""));
        assert!(!CatalogValidator::is_valid_key("Hero"));
        assert!(!CatalogValidator::is_valid_key("1st"));
        assert!(!CatalogValidator::is_valid_key("nav-docs"));
    }

    // ==================== Completeness Tests ====================

    #[test]
    fn test_referenced_keys_present() {
        let report = CatalogValidator::validate(&catalog(), LanguageRegistry::builtin(), ["greet"]);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_referenced_key_missing_from_default() {
        let report = CatalogValidator::validate(&catalog(), LanguageRegistry::builtin(), ["welcome"]);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("welcome"));
    }

    #[test]
    fn test_malformed_key_is_error() {
        let catalog = Catalog::builder("en")
            .language("en", [("Bad-Key", "x")])
            .build()
            .unwrap();
        let report = CatalogValidator::validate(&catalog, LanguageRegistry::builtin(), []);
        assert!(report.errors.iter().any(|e| e.contains("Bad-Key")));
    }

    #[test]
    fn test_empty_default_string_is_missing() {
        let catalog = Catalog::builder("en")
            .language("en", [("greet", "")])
            .language("es", [("greet", "Hola")])
            .build()
            .unwrap();
        let report = CatalogValidator::validate(&catalog, LanguageRegistry::builtin(), ["greet"]);
        assert!(report.errors.iter().any(|e| e.contains("'greet'")));
        assert_eq!(catalog.lookup("en", "greet"), None);
    }

    // ==================== Coverage Tests ====================

    #[test]
    fn test_partial_language_warns_and_reports_coverage() {
        let report = CatalogValidator::validate(&catalog(), LanguageRegistry::builtin(), []);
        assert!(report.warnings.iter().any(|w| w.contains("'es' is missing 1 of 2")));
        assert_eq!(report.coverage["en"], 100.0);
        assert_eq!(report.coverage["es"], 50.0);
    }

    #[test]
    fn test_empty_translation_lowers_coverage() {
        let catalog = Catalog::builder("en")
            .language("en", [("greet", "Hello"), ("bye", "Goodbye")])
            .language("es", [("greet", "Hola"), ("bye", "")])
            .build()
            .unwrap();
        let report = CatalogValidator::validate(&catalog, LanguageRegistry::builtin(), []);
        assert_eq!(report.coverage["es"], 50.0);
        assert!(report.warnings.iter().any(|w| w.contains("'es' is missing 1 of 2")));
    }

    #[test]
    fn test_orphan_keys_warn() {
        let catalog = Catalog::builder("en")
            .language("en", [("greet", "Hello")])
            .language("es", [("greet", "Hola"), ("extra", "Extra")])
            .build()
            .unwrap();
        let report = CatalogValidator::validate(&catalog, LanguageRegistry::builtin(), []);
        assert!(report.warnings.iter().any(|w| w.contains("extra")));
    }

    #[test]
    fn test_language_without_metadata_warns() {
        let catalog = Catalog::builder("en")
            .language("en", [("greet", "Hello")])
            .language("xx", [("greet", "??")])
            .build()
            .unwrap();
        let report = CatalogValidator::validate(&catalog, LanguageRegistry::builtin(), []);
        assert!(report.warnings.iter().any(|w| w.contains("'xx' has no selector metadata")));
    }

    #[test]
    fn test_disabled_language_warns() {
        let registry = LanguageRegistry::new(vec![
            LanguageConfig {
                code: "en",
                name: "English",
                native_name: "English",
                glyph: "🇺🇸",
                is_canonical: true,
                enabled: true,
            },
            LanguageConfig {
                code: "es",
                name: "Spanish",
                native_name: "Español",
                glyph: "🇪🇸",
                is_canonical: false,
                enabled: false,
            },
        ]);
        let report = CatalogValidator::validate(&catalog(), &registry, []);
        assert!(report.warnings.iter().any(|w| w.contains("'es' is disabled")));
        assert!(!report.warnings.iter().any(|w| w.contains("'en' is disabled")));
    }

    #[test]
    fn test_non_canonical_default_warns() {
        let catalog = catalog().with_default_language("es").unwrap();
        let report = CatalogValidator::validate(&catalog, LanguageRegistry::builtin(), []);
        assert!(report.warnings.iter().any(|w| w.contains("source language 'en'")));
    }

    #[test]
    fn test_builtin_catalog_has_no_errors() {
        let report = CatalogValidator::validate(&Catalog::builtin(), LanguageRegistry::builtin(), []);
        assert!(!report.has_errors());
        assert_eq!(report.coverage["es"], 100.0);
        assert!(report.coverage["ko"] < 100.0);
    }

    #[test]
    fn test_clean_report() {
        let catalog = Catalog::builder("en")
            .language("en", [("greet", "Hello")])
            .language("es", [("greet", "Hola")])
            .build()
            .unwrap();
        let report = CatalogValidator::validate(&catalog, LanguageRegistry::builtin(), ["greet"]);
        assert!(report.is_clean());
    }
}
