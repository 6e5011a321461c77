//! Measurement collection: identity-keyed caching and the two-phase
//! measure-then-layout protocol.
//!
//! A wrapping stack cannot wrap until every child's extent is known. Callers
//! drive a [`MeasurementTracker`] through its `Measuring` phase by recording
//! sizes as they arrive, then read the collected sizes back in item order for
//! the layout pass. A [`MeasurementCache`] persists sizes across passes keyed
//! by a caller-supplied stable identity, with explicit invalidation when the
//! key set changes.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use wrapstack_core::Size;

/// Cache of measured sizes keyed by stable item identity.
#[derive(Debug, Clone)]
pub struct MeasurementCache<K> {
    entries: HashMap<K, Size>,
    hits: usize,
    misses: usize,
}

impl<K> Default for MeasurementCache<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: Eq + Hash> MeasurementCache<K> {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached size.
    #[must_use]
    pub fn get(&mut self, key: &K) -> Option<Size> {
        if let Some(size) = self.entries.get(key) {
            self.hits += 1;
            Some(*size)
        } else {
            self.misses += 1;
            None
        }
    }

    /// Insert a measured size.
    pub fn insert(&mut self, key: K, size: Size) {
        self.entries.insert(key, size);
    }

    /// Drop every entry whose key is not in `keys`.
    ///
    /// Call this when the item sequence changes so stale identities do not
    /// leak sizes into later passes.
    pub fn retain_keys(&mut self, keys: &HashSet<K>) {
        self.entries.retain(|key, _| keys.contains(key));
    }

    /// Clear the entire cache.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get the number of cache hits.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of cache misses.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Get the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Phase of the measure-then-layout protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurePhase {
    /// Some items still lack a recorded size.
    Measuring,
    /// Every item has a recorded size; layout may proceed.
    Ready,
}

/// Errors from recording measurements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasureError {
    /// The recorded key is not part of the tracked item sequence.
    UnknownKey(String),
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey(key) => {
                write!(f, "key {key} is not part of the tracked sequence")
            }
        }
    }
}

impl std::error::Error for MeasureError {}

/// Two-phase measurement state machine for one item sequence.
///
/// Starts in [`MeasurePhase::Measuring`] with every key pending and moves to
/// [`MeasurePhase::Ready`] once a size has been recorded for each. Replacing
/// the key set with [`MeasurementTracker::update_keys`] keeps sizes for
/// surviving keys and falls back to `Measuring` when new keys appear.
#[derive(Debug, Clone)]
pub struct MeasurementTracker<K> {
    keys: Vec<K>,
    sizes: HashMap<K, Size>,
    pending: HashSet<K>,
}

impl<K: Eq + Hash + Clone + fmt::Debug> MeasurementTracker<K> {
    /// Track the given keys, deduplicated, preserving first-seen order.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        let mut ordered = Vec::new();
        let mut seen = HashSet::new();
        for key in keys {
            if seen.insert(key.clone()) {
                ordered.push(key);
            }
        }
        Self {
            pending: seen,
            keys: ordered,
            sizes: HashMap::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MeasurePhase {
        if self.pending.is_empty() {
            MeasurePhase::Ready
        } else {
            MeasurePhase::Measuring
        }
    }

    /// Record a measured size for `key`, returning the resulting phase.
    pub fn record(&mut self, key: &K, size: Size) -> Result<MeasurePhase, MeasureError> {
        if !self.sizes.contains_key(key) && !self.pending.contains(key) {
            return Err(MeasureError::UnknownKey(format!("{key:?}")));
        }
        self.pending.remove(key);
        self.sizes.insert(key.clone(), size);
        Ok(self.phase())
    }

    /// Keys still awaiting a measurement, in item order.
    pub fn pending(&self) -> impl Iterator<Item = &K> {
        self.keys.iter().filter(|key| self.pending.contains(key))
    }

    /// Recorded size for a key, if any.
    #[must_use]
    pub fn size_of(&self, key: &K) -> Option<Size> {
        self.sizes.get(key).copied()
    }

    /// Recorded sizes in item order, `None` for still-pending keys.
    ///
    /// Feeds directly into partial layout: the splitter stops at the first
    /// `None`.
    #[must_use]
    pub fn sizes(&self) -> Vec<Option<Size>> {
        self.keys
            .iter()
            .map(|key| self.sizes.get(key).copied())
            .collect()
    }

    /// Replace the tracked key sequence.
    ///
    /// Sizes recorded for keys that survive are kept; sizes for removed keys
    /// are dropped; newly appearing keys become pending.
    pub fn update_keys(&mut self, keys: impl IntoIterator<Item = K>) {
        let mut ordered = Vec::new();
        let mut seen = HashSet::new();
        for key in keys {
            if seen.insert(key.clone()) {
                ordered.push(key);
            }
        }
        self.sizes.retain(|key, _| seen.contains(key));
        self.pending = seen
            .into_iter()
            .filter(|key| !self.sizes.contains_key(key))
            .collect();
        self.keys = ordered;
    }

    /// Number of tracked keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if no keys are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
