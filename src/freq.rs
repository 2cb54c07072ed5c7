//! Generic insertion-ordered frequency table.
//!
//! One counter abstraction backs all four statistics (words, emojis, hours,
//! days). Iteration order is first-occurrence order, which the top-N
//! extraction relies on to break ties deterministically.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Mapping from a discrete key to an occurrence count.
///
/// Counts are non-negative and monotonically non-decreasing while the
/// transcript is consumed. Keys iterate in first-insertion order.
#[derive(Debug, Clone)]
pub struct FreqTable<K> {
    counts: HashMap<K, u64>,
    order: Vec<K>,
}

impl<K> Default for FreqTable<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FreqTable<K> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, inserting it on first sight.
    pub fn bump(&mut self, key: K) {
        if let Some(count) = self.counts.get_mut(&key) {
            *count += 1;
        } else {
            self.counts.insert(key.clone(), 1);
            self.order.push(key);
        }
    }

    /// Current count for `key`, zero if never seen.
    #[must_use]
    pub fn count(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no key has been counted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.order.iter().map(|key| (key, self.count(key)))
    }

    /// The `n` highest-count entries, optionally excluding a key blocklist.
    ///
    /// Excluded keys are removed before ranking. The sort is stable, so
    /// entries with equal counts keep their first-occurrence order. Fewer
    /// than `n` survivors returns them all. The table is not mutated, so
    /// repeated extraction yields identical output.
    #[must_use]
    pub fn top_n(&self, n: usize, exclude: Option<&HashSet<K>>) -> Vec<(K, u64)> {
        let mut entries: Vec<(K, u64)> = self
            .iter()
            .filter(|(key, _)| !exclude.map_or(false, |set| set.contains(key)))
            .map(|(key, count)| (key.clone(), count))
            .collect();

        entries.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
        entries.truncate(n);
        entries
    }
}
