use std::{
    collections::HashMap,
    hash::Hash,
    time::{Duration, Instant},
};

use crate::geometry::arc::{ArcSpec, SolvedArc, solve_arc};

pub const DEFAULT_CAPACITY: usize = 200;
pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

/// Bounded memo table with time-based expiry.
///
/// Entries are stamped on insert and never refreshed by a hit. A lookup older than the TTL
/// recomputes. Inserting a new key at capacity drops the entry with the oldest stamp.
#[derive(Debug)]
pub struct Memoizer<K, V> {
    entries: HashMap<K, Entry<V>>,
    capacity: usize,
    ttl: Duration,
    next_seq: u64,
    stats: CacheStats,
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    stamp: Instant,
    seq: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Internal lookup outcome; callers only ever see computed values.
struct CacheMiss;

impl<K: Hash + Eq + Clone, V: Clone> Default for Memoizer<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Memoizer<K, V> {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            ttl,
            next_seq: 0,
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        self.get_or_compute_at(key, Instant::now(), compute)
    }

    /// Same as [`Memoizer::get_or_compute`] with an explicit clock reading.
    pub fn get_or_compute_at(&mut self, key: K, now: Instant, compute: impl FnOnce(&K) -> V) -> V {
        match self.lookup(&key, now) {
            Ok(value) => {
                self.stats.hits += 1;
                value
            }
            Err(CacheMiss) => {
                self.stats.misses += 1;
                let value = compute(&key);
                self.insert(key, value.clone(), now);
                value
            }
        }
    }

    fn lookup(&self, key: &K, now: Instant) -> Result<V, CacheMiss> {
        match self.entries.get(key) {
            Some(entry) if now.saturating_duration_since(entry.stamp) < self.ttl => {
                Ok(entry.value.clone())
            }
            _ => Err(CacheMiss),
        }
    }

    fn insert(&mut self, key: K, value: V, now: Instant) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            key,
            Entry {
                value,
                stamp: now,
                seq,
            },
        );
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| (e.stamp, e.seq))
            .map(|(k, _)| k.clone());
        if let Some(k) = oldest {
            self.entries.remove(&k);
            self.stats.evictions += 1;
        }
    }
}

/// Value-equality key for an [`ArcSpec`]: variant tag plus the raw bits of every coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArcKey {
    tag: u8,
    bits: [u64; 6],
}

impl From<&ArcSpec> for ArcKey {
    fn from(spec: &ArcSpec) -> Self {
        match *spec {
            ArcSpec::ThreePoint(a, b, c) => Self {
                tag: 0,
                bits: [a.x, a.y, b.x, b.y, c.x, c.y].map(key_bits),
            },
            ArcSpec::ChordAndAngle(a, b, sweep) => Self {
                tag: 1,
                bits: [a.x, a.y, b.x, b.y, sweep, 0.0].map(key_bits),
            },
        }
    }
}

fn key_bits(v: f64) -> u64 {
    // -0.0 and 0.0 solve identically.
    if v == 0.0 { 0 } else { v.to_bits() }
}

/// Shared arc solutions, keyed by control points.
pub type ArcCache = Memoizer<ArcKey, Option<SolvedArc>>;

pub fn solve_arc_cached(cache: &mut ArcCache, spec: &ArcSpec) -> Option<SolvedArc> {
    cache.get_or_compute(ArcKey::from(spec), |_| {
        tracing::debug!(?spec, "solving arc");
        solve_arc(spec)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/memo.rs"]
mod tests;
