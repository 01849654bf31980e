//! Translation catalog: language code → key → localized string.

use crate::i18n::strings;
use crate::i18n::{LanguageCode, TranslationKey};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("default language '{0}' has no strings in the catalog")]
    MissingDefaultLanguage(LanguageCode),

    #[error("language code must not be empty")]
    EmptyLanguageCode,
}

/// Localized strings for every supported language.
///
/// The default language is the one used when nothing else is known about the
/// user. Its mapping is expected to cover every key the document references;
/// other languages may be partial.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_language: LanguageCode,
    languages: BTreeMap<LanguageCode, HashMap<TranslationKey, String>>,
}

impl Catalog {
    /// Start building a catalog whose default language is `default_language`.
    pub fn builder(default_language: impl Into<LanguageCode>) -> CatalogBuilder {
        CatalogBuilder {
            default_language: default_language.into(),
            languages: BTreeMap::new(),
        }
    }

    /// The catalog bundled with the landing page (English default).
    pub fn builtin() -> Catalog {
        let languages: BTreeMap<_, _> = strings::ALL
            .iter()
            .map(|(code, table)| {
                let entries: HashMap<_, _> = table
                    .iter()
                    .map(|(key, text)| (TranslationKey::from(*key), text.to_string()))
                    .collect();
                (LanguageCode::from(*code), entries)
            })
            .collect();

        Catalog {
            default_language: LanguageCode::from(strings::ALL[0].0),
            languages,
        }
    }

    /// Return the same catalog with another default language.
    pub fn with_default_language(self, code: &str) -> Result<Catalog, CatalogError> {
        let default_language = self
            .recognize(code)
            .cloned()
            .ok_or_else(|| CatalogError::MissingDefaultLanguage(LanguageCode::from(code)))?;

        Ok(Catalog {
            default_language,
            ..self
        })
    }

    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    /// Map a raw code onto the catalog's own code, if supported.
    pub fn recognize(&self, code: &str) -> Option<&LanguageCode> {
        self.languages.get_key_value(code).map(|(code, _)| code)
    }

    /// All catalog languages, sorted by code.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.languages.keys()
    }

    /// Look up the localized text for `key` in `code`.
    ///
    /// Empty strings count as missing.
    pub fn lookup(&self, code: &str, key: &str) -> Option<&str> {
        self.languages
            .get(code)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Keys defined for `code`, sorted.
    pub fn keys(&self, code: &str) -> Vec<&TranslationKey> {
        let mut keys: Vec<_> = self
            .languages
            .get(code)
            .map(|strings| strings.keys().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    /// Keys of `code` that [`Catalog::lookup`] resolves, sorted. Keys mapped
    /// to an empty string are left out.
    pub fn translated_keys(&self, code: &str) -> Vec<&TranslationKey> {
        let mut keys: Vec<_> = self
            .languages
            .get(code)
            .map(|strings| {
                strings
                    .iter()
                    .filter(|(_, text)| !text.is_empty())
                    .map(|(key, _)| key)
                    .collect()
            })
            .unwrap_or_default();
        keys.sort();
        keys
    }
}

/// Builder for custom catalogs.
#[derive(Debug)]
pub struct CatalogBuilder {
    default_language: LanguageCode,
    languages: BTreeMap<LanguageCode, HashMap<TranslationKey, String>>,
}

impl CatalogBuilder {
    /// Add (or extend) the strings of one language.
    pub fn language<K, V>(
        mut self,
        code: impl Into<LanguageCode>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<TranslationKey>,
        V: Into<String>,
    {
        self.languages
            .entry(code.into())
            .or_default()
            .extend(entries.into_iter().map(|(key, text)| (key.into(), text.into())));
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        if self.default_language.as_str().is_empty()
            || self.languages.keys().any(|code| code.as_str().is_empty())
        {
            return Err(CatalogError::EmptyLanguageCode);
        }

        if !self.languages.contains_key(&self.default_language) {
            return Err(CatalogError::MissingDefaultLanguage(self.default_language));
        }

        Ok(Catalog {
            default_language: self.default_language,
            languages: self.languages,
        })
    }
}
