//! Language registry: display metadata for the language selector.
//!
//! The registry is independent of the catalog. It only describes how a
//! language is presented in the selector widget (flag glyph, native name).
//! The built-in registry is a lazily initialized `OnceLock` singleton; custom
//! registries can be built with [`LanguageRegistry::new`].

use std::sync::OnceLock;

/// Presentation metadata for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Language code (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "Spanish")
    pub name: &'static str,

    /// Native name shown in the selector (e.g., "Español")
    pub native_name: &'static str,

    /// Glyph shown on the selector button, usually a flag
    pub glyph: &'static str,

    /// Whether this is the source language of the site copy
    pub is_canonical: bool,

    /// Whether this language is offered in the selector
    pub enabled: bool,
}

/// Set of languages the selector knows how to present.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Built-in registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Build a registry from an explicit list of languages.
    pub fn new(languages: Vec<LanguageConfig>) -> Self {
        Self { languages }
    }

    /// Get the built-in registry shared by the whole process.
    pub fn builtin() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry::new(default_languages()))
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in selector order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// Returns `None` unless exactly one language is marked canonical.
    pub fn canonical(&self) -> Option<&LanguageConfig> {
        let mut canonical = self.languages.iter().filter(|lang| lang.is_canonical);
        match (canonical.next(), canonical.next()) {
            (Some(config), None) => Some(config),
            _ => None,
        }
    }

    /// Check if a language code is known and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new(default_languages())
    }
}

/// Languages offered by the landing page selector.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
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
            enabled: true,
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            glyph: "🇨🇳",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            glyph: "🇰🇷",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            glyph: "🇩🇪",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            glyph: "🇯🇵",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            glyph: "🇧🇷",
            is_canonical: false,
            enabled: true,
        },
    ]
}
