//! Time-bounded memoization of compiled queries.
//!
//! Entries live for a fixed TTL measured from when they were stored; reads
//! do not extend it. Expired entries are replaced when their key is next
//! requested (or dropped by [`TtlCache::purge_expired`]); there is no
//! background sweeper and no size bound. A zero TTL stores nothing.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default time-to-live for compiled queries.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Source of the current time.
///
/// Injected so tests can advance time without sleeping.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Monotonic system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Statistics for a [`TtlCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Fresh entry returned.
    pub hits: u64,
    /// Value computed (no entry, or entry expired).
    pub misses: u64,
    /// Expired entries found on lookup.
    pub expirations: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let rate = (self.hits as f64 / total as f64) * 100.0;
            rate
        }
    }
}

/// A stored value and the instant it was computed.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// Cached value.
    pub value: V,
    /// When the value was stored.
    pub created_at: Instant,
}

impl<V> CacheEntry<V> {
    /// True while `now - created_at < ttl`.
    #[must_use]
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) < ttl
    }
}

/// Memoizes a fallible `&str -> V` function for a fixed TTL.
///
/// Thread-safe; concurrent misses on the same key may each compute the value.
/// That is wasted work only, since the compute function must be pure. Errors
/// are returned to the caller and never stored.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use nql_core::query::{Compiler, TtlCache};
///
/// let cache = TtlCache::new(Duration::from_secs(60), |text: &str| Compiler::compile_select(text));
/// let first = cache.get("SELECT * FROM Person").unwrap();
/// let second = cache.get("SELECT * FROM Person").unwrap();
/// assert_eq!(first, second);
/// assert_eq!(cache.stats().hits, 1);
/// ```
pub struct TtlCache<V, E, F, C = SystemClock> {
    entries: RwLock<FxHashMap<String, CacheEntry<V>>>,
    ttl: Duration,
    compute: F,
    clock: C,
    stats: RwLock<CacheStats>,
    _error: PhantomData<fn() -> E>,
}

impl<V, E, F> TtlCache<V, E, F, SystemClock>
where
    V: Clone,
    F: Fn(&str) -> Result<V, E>,
{
    /// Creates a cache over `compute` with the given TTL.
    #[must_use]
    pub fn new(ttl: Duration, compute: F) -> Self {
        Self::with_clock(ttl, compute, SystemClock)
    }
}

impl<V, E, F, C> TtlCache<V, E, F, C>
where
    V: Clone,
    F: Fn(&str) -> Result<V, E>,
    C: Clock,
{
    /// Creates a cache reading time from `clock`.
    #[must_use]
    pub fn with_clock(ttl: Duration, compute: F, clock: C) -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
            ttl,
            compute,
            clock,
            stats: RwLock::new(CacheStats::default()),
            _error: PhantomData,
        }
    }

    /// Returns the cached value for `key`, computing and storing it when
    /// absent or expired.
    ///
    /// # Errors
    ///
    /// Propagates the compute function's error; nothing is stored.
    pub fn get(&self, key: &str) -> Result<V, E> {
        let now = self.clock.now();

        {
            let entries = self.entries.read();
            if let Some(entry) = entries.get(key) {
                if entry.is_fresh(now, self.ttl) {
                    self.stats.write().hits += 1;
                    tracing::trace!(key, "query cache hit");
                    return Ok(entry.value.clone());
                }
                self.stats.write().expirations += 1;
                tracing::debug!(key, "query cache entry expired");
            }
        }

        self.stats.write().misses += 1;
        let value = (self.compute)(key)?;

        // Zero TTL: nothing would ever be fresh, so store nothing
        if self.ttl.is_zero() {
            return Ok(value);
        }

        let created_at = self.clock.now();
        self.entries.write().insert(
            key.to_string(),
            CacheEntry {
                value: value.clone(),
                created_at,
            },
        );
        tracing::debug!(key, "query cache store");

        Ok(value)
    }

    /// Removes every expired entry, returning how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_fresh(now, ttl));
        before - entries.len()
    }

    /// Drops the entry for `key`, returning true if one was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }
}

impl<V, E, F, C> TtlCache<V, E, F, C> {
    /// Configured time-to-live.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns current cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        *self.stats.read()
    }

    /// Number of stored entries, including expired ones not yet replaced.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Clears all entries and resets statistics.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        let mut stats = self.stats.write();

        entries.clear();
        *stats = CacheStats::default();
    }
}
