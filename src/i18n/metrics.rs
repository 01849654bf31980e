//! Localization metrics.
//!
//! Counters describing what the engine did during a page's lifetime: apply
//! passes, how many elements were rewritten or left alone, language changes,
//! and persistence failures that were otherwise swallowed.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters owned by one localization service.
#[derive(Debug, Default)]
pub struct LocalizationMetrics {
    /// Number of applicator passes
    apply_passes: AtomicUsize,

    /// Elements whose text was replaced with a catalog string
    elements_updated: AtomicUsize,

    /// Elements left with their previous text because no string was found
    elements_unchanged: AtomicUsize,

    /// Accepted language changes (including re-selecting the current one)
    language_changes: AtomicUsize,

    /// Language changes ignored because the code is not in the catalog
    rejected_changes: AtomicUsize,

    /// Preference reads or writes that failed
    storage_failures: AtomicUsize,
}

/// Point-in-time snapshot of [`LocalizationMetrics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub apply_passes: usize,
    pub elements_updated: usize,
    pub elements_unchanged: usize,
    /// Percentage of element lookups that found a string
    pub translation_hit_rate: f64,
    pub language_changes: usize,
    pub rejected_changes: usize,
    pub storage_failures: usize,
}

impl LocalizationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one applicator pass and its per-element results.
    pub fn record_apply(&self, updated: usize, unchanged: usize) {
        self.apply_passes.fetch_add(1, Ordering::Relaxed);
        self.elements_updated.fetch_add(updated, Ordering::Relaxed);
        self.elements_unchanged.fetch_add(unchanged, Ordering::Relaxed);
    }

    pub fn record_language_change(&self) {
        self.language_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected_change(&self) {
        self.rejected_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_storage_failure(&self) {
        self.storage_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn apply_passes(&self) -> usize {
        self.apply_passes.load(Ordering::Relaxed)
    }

    pub fn language_changes(&self) -> usize {
        self.language_changes.load(Ordering::Relaxed)
    }

    pub fn rejected_changes(&self) -> usize {
        self.rejected_changes.load(Ordering::Relaxed)
    }

    pub fn storage_failures(&self) -> usize {
        self.storage_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let updated = self.elements_updated.load(Ordering::Relaxed);
        let unchanged = self.elements_unchanged.load(Ordering::Relaxed);
        let lookups = updated + unchanged;
        let translation_hit_rate = if lookups > 0 {
            (updated as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            apply_passes: self.apply_passes(),
            elements_updated: updated,
            elements_unchanged: unchanged,
            translation_hit_rate,
            language_changes: self.language_changes(),
            rejected_changes: self.rejected_changes(),
            storage_failures: self.storage_failures(),
        }
    }
}
