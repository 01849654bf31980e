//! Language codes and translation keys.
//!
//! Both are opaque string identifiers. They are kept as distinct newtypes so a
//! key can never be passed where a language is expected and vice versa.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of one supported language (e.g., "en", "es").
///
/// A `LanguageCode` by itself says nothing about support; whether a code is
/// recognized is decided by the [`Catalog`](crate::i18n::Catalog) it is
/// checked against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a language code from any string-like value.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stable identifier for one piece of translatable text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationKey(String);

impl TranslationKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_newtype_impls {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_newtype_impls!(LanguageCode);
string_newtype_impls!(TranslationKey);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ==================== LanguageCode Tests ====================

    #[test]
    fn test_language_code_as_str() {
        let code = LanguageCode::new("es");
        assert_eq!(code.as_str(), "es");
    }

    #[test]
    fn test_language_code_display() {
        let code = LanguageCode::from("zh");
        assert_eq!(format!("{}", code), "zh");
    }

    #[test]
    fn test_language_code_compares_with_str() {
        let code = LanguageCode::from("en");
        assert_eq!(code, "en");
        assert_ne!(code, "es");
    }

    #[test]
    fn test_language_code_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(LanguageCode::from("de"), 1);
        assert_eq!(map.get("de"), Some(&1));
        assert_eq!(map.get("fr"), None);
    }

    #[test]
    fn test_language_code_serializes_as_plain_string() {
        let code = LanguageCode::from("ja");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"ja\"");
        let parsed: LanguageCode = serde_json::from_str("\"pt\"").unwrap();
        assert_eq!(parsed, "pt");
    }

    // ==================== TranslationKey Tests ====================

    #[test]
    fn test_translation_key_roundtrip_string() {
        let key = TranslationKey::from(String::from("hero_cta"));
        assert_eq!(key.as_str(), "hero_cta");
        assert_eq!(key.to_string(), "hero_cta");
    }

    #[test]
    fn test_translation_key_ordering() {
        let mut keys = vec![TranslationKey::from("b"), TranslationKey::from("a")];
        keys.sort();
        assert_eq!(keys[0], "a");
    }
}
