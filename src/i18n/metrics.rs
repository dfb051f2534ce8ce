//! Lookup metrics.
//!
//! Counts which step of the fallback chain answered each lookup, so hosts
//! can spot locales that are falling back more than expected.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for translation lookups.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups answered by the current locale
    current_hits: AtomicUsize,

    /// Lookups answered by the default locale
    default_fallbacks: AtomicUsize,

    /// Lookups that returned the key itself
    key_fallbacks: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup answered by the current locale.
    pub fn record_current_hit(&self) {
        self.current_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup answered by the default locale.
    pub fn record_default_fallback(&self) {
        self.default_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the key.
    pub fn record_key_fallback(&self) {
        self.key_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn current_hits(&self) -> usize {
        self.current_hits.load(Ordering::Relaxed)
    }

    pub fn default_fallbacks(&self) -> usize {
        self.default_fallbacks.load(Ordering::Relaxed)
    }

    pub fn key_fallbacks(&self) -> usize {
        self.key_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.current_hits();
        let defaults = self.default_fallbacks();
        let keys = self.key_fallbacks();
        let total = hits + defaults + keys;
        let fallback_rate = if total > 0 {
            ((defaults + keys) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups: total,
            current_hits: hits,
            default_fallbacks: defaults,
            key_fallbacks: keys,
            fallback_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.current_hits.store(0, Ordering::Relaxed);
        self.default_fallbacks.store(0, Ordering::Relaxed);
        self.key_fallbacks.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total number of lookups
    pub lookups: usize,

    pub current_hits: usize,

    pub default_fallbacks: usize,

    pub key_fallbacks: usize,

    /// Share of lookups not answered by the current locale, as a percentage (0-100)
    pub fallback_rate: f64,
}
