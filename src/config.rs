use crate::i18n::FallbackPolicy;
use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Persistence
    pub store_path: PathBuf,
    pub storage_key: String,

    // Language selection
    pub default_language: String,
    pub fallback: FallbackPolicy,

    // Document contract
    pub marker_attribute: String,
    pub option_attribute: String,
    pub button_id: String,
    pub dropdown_id: String,
    pub selector_id: String,

    // Presentation
    pub hidden_class: String,
    pub name_class: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(".deadhand/preferences.json"),
            storage_key: "Deadhand_lang".to_string(),
            default_language: "en".to_string(),
            fallback: FallbackPolicy::KeepExisting,
            marker_attribute: "data-i18n".to_string(),
            option_attribute: "data-lang".to_string(),
            button_id: "lang-btn".to_string(),
            dropdown_id: "lang-dropdown".to_string(),
            selector_id: "lang-selector".to_string(),
            hidden_class: "hidden".to_string(),
            name_class: "hidden md:inline".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            // Persistence
            store_path: std::env::var("I18N_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            storage_key: non_empty_var("I18N_STORAGE_KEY").unwrap_or(defaults.storage_key),

            // Language selection
            default_language: non_empty_var("I18N_DEFAULT_LANGUAGE")
                .unwrap_or(defaults.default_language),
            fallback: match std::env::var("I18N_FALLBACK") {
                Ok(value) => parse_fallback(&value)?,
                Err(_) => defaults.fallback,
            },

            // Document contract
            marker_attribute: non_empty_var("I18N_MARKER_ATTRIBUTE")
                .unwrap_or(defaults.marker_attribute),
            ..defaults
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse `keep` / `default` into a fallback policy.
pub fn parse_fallback(value: &str) -> Result<FallbackPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "keep" => Ok(FallbackPolicy::KeepExisting),
        "default" => Ok(FallbackPolicy::DefaultLanguage),
        other => bail!("Invalid I18N_FALLBACK '{}'. Expected 'keep' or 'default'", other),
    }
}
