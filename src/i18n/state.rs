//! Current-language state and its persisted preference.

use crate::i18n::{Catalog, LanguageCode};
use crate::storage::PreferenceStore;
use tracing::{debug, info, warn};

/// Where the initial language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceSource {
    /// A recognized code was read from the store.
    Persisted,
    /// Nothing usable was stored; the catalog default was used.
    Default,
}

/// Result of [`LanguageState::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageChange {
    /// The code is not in the catalog; nothing changed.
    Rejected,
    /// The language was set. `persisted` is false if the store write failed.
    Accepted { persisted: bool },
}

impl LanguageChange {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LanguageChange::Accepted { .. })
    }
}

/// The single mutable piece of localization state.
pub struct LanguageState {
    current: LanguageCode,
    source: PreferenceSource,
    storage_key: String,
    store: Box<dyn PreferenceStore>,
    read_failed: bool,
}

impl LanguageState {
    /// Read the persisted preference and pick the starting language.
    ///
    /// A stored code the catalog does not recognize, a missing entry, and an
    /// unreadable store all fall back to the catalog default.
    pub fn initialize(
        catalog: &Catalog,
        store: Box<dyn PreferenceStore>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let mut read_failed = false;

        let stored = match store.get(&storage_key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read language preference '{}': {}", storage_key, e);
                read_failed = true;
                None
            }
        };

        let (current, source) = match stored.as_deref().and_then(|code| catalog.recognize(code)) {
            Some(code) => (code.clone(), PreferenceSource::Persisted),
            None => {
                if let Some(code) = stored.as_deref() {
                    debug!("Ignoring unrecognized stored language '{}'", code);
                }
                (catalog.default_language().clone(), PreferenceSource::Default)
            }
        };

        info!("Language initialized to '{}' ({:?})", current, source);

        Self {
            current,
            source,
            storage_key,
            store,
            read_failed,
        }
    }

    /// The current language.
    pub fn get(&self) -> &LanguageCode {
        &self.current
    }

    pub fn source(&self) -> PreferenceSource {
        self.source
    }

    /// Whether the initial read of the store failed.
    pub fn read_failed(&self) -> bool {
        self.read_failed
    }

    /// Switch to `code` and persist it.
    ///
    /// Codes outside the catalog are ignored. A failed write is logged and
    /// reported through the return value; the in-memory language still
    /// changes.
    pub fn set(&mut self, catalog: &Catalog, code: &str) -> LanguageChange {
        let Some(code) = catalog.recognize(code) else {
            debug!("Ignoring request for unsupported language '{}'", code);
            return LanguageChange::Rejected;
        };

        if *code != self.current {
            info!("Language changed from '{}' to '{}'", self.current, code);
        }
        self.current = code.clone();

        let persisted = match self.store.set(&self.storage_key, code.as_str()) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to persist language '{}': {}", code, e);
                false
            }
        };

        LanguageChange::Accepted { persisted }
    }
}
