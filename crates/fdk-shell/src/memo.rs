//! Bounded memoization for theme resolution.
//!
//! Resolution is cheap and idempotent, so memoization is purely a
//! render-efficiency optimization — correctness never depends on it. The
//! memo is keyed on a hash of the branding inputs and clears wholesale on
//! overflow rather than tracking eviction order.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use fdk_tenant::Branding;
use fdk_theme::{ResolvedTheme, resolve_theme};

/// Statistics for a [`ThemeMemo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoStats {
    /// Number of memo hits.
    pub hits: u64,
    /// Number of memo misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum number of entries before the memo clears.
    pub capacity: usize,
}

/// Bounded memo over [`resolve_theme`].
#[derive(Debug)]
pub struct ThemeMemo {
    max_entries: usize,
    map: HashMap<u64, ResolvedTheme>,
    hits: u64,
    misses: u64,
}

impl ThemeMemo {
    /// Create a memo with default capacity (64 entries).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a memo with the given maximum entry count.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            max_entries,
            map: HashMap::with_capacity(max_entries),
            hits: 0,
            misses: 0,
        }
    }

    /// Resolve through the memo, returning the cached theme when the
    /// branding inputs hash the same.
    pub fn resolve(&mut self, branding: &Branding) -> ResolvedTheme {
        let key = branding_key(branding);
        if let Some(theme) = self.map.get(&key) {
            self.hits += 1;
            return theme.clone();
        }
        self.misses += 1;
        let theme = resolve_theme(branding);
        if self.map.len() >= self.max_entries {
            self.map.clear();
        }
        self.map.insert(key, theme.clone());
        theme
    }

    /// Drop all cached entries, keeping counters.
    pub fn invalidate(&mut self) {
        self.map.clear();
    }

    /// Return current memo statistics.
    #[must_use]
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits,
            misses: self.misses,
            size: self.map.len(),
            capacity: self.max_entries,
        }
    }
}

impl Default for ThemeMemo {
    fn default() -> Self {
        Self::new()
    }
}

fn branding_key(branding: &Branding) -> u64 {
    let mut hasher = DefaultHasher::new();
    branding.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdk_tenant::SiteMode;

    fn branding(primary: &str) -> Branding {
        Branding {
            primary_color: Some(primary.to_string()),
            site_mode: Some(SiteMode::Dark),
            ..Branding::default()
        }
    }

    #[test]
    fn memo_agrees_with_direct_resolution() {
        let mut memo = ThemeMemo::new();
        let input = branding("#10b981");
        assert_eq!(memo.resolve(&input), resolve_theme(&input));
        // Second pass serves from cache and still agrees.
        assert_eq!(memo.resolve(&input), resolve_theme(&input));
    }

    #[test]
    fn memo_tracks_hits_and_misses() {
        let mut memo = ThemeMemo::new();
        let input = branding("#10b981");
        let _ = memo.resolve(&input);
        let _ = memo.resolve(&input);
        let _ = memo.resolve(&branding("#6366f1"));
        let stats = memo.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.size, 2);
    }

    #[test]
    fn memo_clears_on_overflow() {
        let mut memo = ThemeMemo::with_capacity(2);
        let _ = memo.resolve(&branding("#000001"));
        let _ = memo.resolve(&branding("#000002"));
        assert_eq!(memo.stats().size, 2);
        let _ = memo.resolve(&branding("#000003"));
        assert_eq!(memo.stats().size, 1);
    }

    #[test]
    fn invalidate_keeps_counters() {
        let mut memo = ThemeMemo::new();
        let _ = memo.resolve(&branding("#10b981"));
        memo.invalidate();
        let stats = memo.stats();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn minimum_capacity_is_one() {
        let memo = ThemeMemo::with_capacity(0);
        assert_eq!(memo.stats().capacity, 1);
    }

    #[test]
    fn different_overrides_key_differently() {
        let mut memo = ThemeMemo::new();
        let plain = branding("#10b981");
        let mut overridden = plain.clone();
        overridden.overrides.background = Some("#000000".to_string());

        let a = memo.resolve(&plain);
        let b = memo.resolve(&overridden);
        assert_ne!(a.background, b.background);
        assert_eq!(memo.stats().misses, 2);
    }
}
