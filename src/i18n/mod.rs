//! Internationalization (i18n) module for the landing page.
//!
//! Holds the translation catalog, the current-language state, and the
//! machinery that keeps a rendered document in sync with that state.
//!
//! # Architecture
//!
//! - `language`: `LanguageCode` and `TranslationKey` identifiers
//! - `strings`: built-in localized strings, one table per language
//! - `catalog`: language → key → string lookup with a default language
//! - `registry`: selector metadata (flag glyph, native name) per language
//! - `state`: current language, initialized from and persisted to a store
//! - `applicator`: rewrites tagged elements and the selector label
//! - `selector`: open/closed state machine for the language dropdown
//! - `service`: one object tying the above together for a page
//! - `validator`: completeness and coverage checks for a catalog
//! - `metrics`: counters for apply passes, changes and storage failures
//!
//! # Example
//!
//! ```rust,ignore
//! use deadhand_i18n::i18n::LocalizationService;
//!
//! let mut service = LocalizationService::builtin(store, &config)?;
//! service.attach(&mut document);
//! service.set_language(&mut document, "es");
//! ```

mod applicator;
mod catalog;
mod language;
mod metrics;
mod registry;
mod selector;
mod service;
mod state;
mod strings;
mod validator;

pub use applicator::{Applicator, ApplyOutcome, FallbackPolicy, TaggedElements};
pub use catalog::{Catalog, CatalogBuilder, CatalogError};
pub use language::{LanguageCode, TranslationKey};
pub use metrics::{LocalizationMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use selector::{SelectorController, SelectorState, SelectorWidget};
pub use service::{LocalizationService, Mount};
pub use state::{LanguageChange, LanguageState, PreferenceSource};
pub use validator::{CatalogValidator, ValidationReport};
