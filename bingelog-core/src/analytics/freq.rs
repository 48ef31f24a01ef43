//! Frequency ranking shared by the pattern, risk, and trend analyzers.
//!
//! Every analyzer follows the same count-then-sort idiom: tally occurrences,
//! rank descending by count, and break ties by first-encountered insertion
//! order so results stay deterministic for fixtures.

use std::collections::HashMap;
use std::hash::Hash;

/// An occurrence counter with stable, insertion-ordered ranking.
#[derive(Debug, Clone)]
pub struct FreqTable<K: Eq + Hash + Clone> {
    counts: HashMap<K, u32>,
    order: Vec<K>,
}

impl<K: Eq + Hash + Clone> FreqTable<K> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        let entry = self.counts.entry(key.clone()).or_insert(0);
        if *entry == 0 {
            self.order.push(key);
        }
        *entry += 1;
    }

    /// Count all items of an iterator.
    pub fn extend<I: IntoIterator<Item = K>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }

    /// Number of distinct keys seen.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Sum of all occurrence counts.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Count for a specific key, 0 if never seen.
    pub fn count(&self, key: &K) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Keys ranked by descending count; ties keep first-insertion order.
    pub fn ranked(&self) -> Vec<(K, u32)> {
        let mut out: Vec<(K, u32)> = self
            .order
            .iter()
            .map(|k| (k.clone(), self.counts[k]))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    /// The single most frequent key, if any.
    pub fn top(&self) -> Option<(K, u32)> {
        self.ranked().into_iter().next()
    }

    /// The `n` most frequent keys.
    pub fn top_n(&self, n: usize) -> Vec<(K, u32)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<K: Eq + Hash + Clone> Default for FreqTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FreqTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// Percentage share of `count` out of `total`, rounded; None when empty.
pub fn percent_share(count: u32, total: u32) -> Option<u32> {
    if total == 0 {
        return None;
    }
    Some(((count as f64 / total as f64) * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_descending() {
        let table: FreqTable<&str> =
            ["a", "b", "b", "c", "c", "c"].into_iter().collect();
        assert_eq!(table.ranked(), vec![("c", 3), ("b", 2), ("a", 1)]);
        assert_eq!(table.top(), Some(("c", 3)));
        assert_eq!(table.total(), 6);
        assert_eq!(table.distinct(), 3);
    }

    #[test]
    fn test_ties_keep_first_insertion_order() {
        let table: FreqTable<&str> =
            ["x", "y", "z", "y", "x", "z"].into_iter().collect();
        // All tied at 2; order of first appearance wins
        assert_eq!(table.ranked(), vec![("x", 2), ("y", 2), ("z", 2)]);
    }

    #[test]
    fn test_top_n_truncates() {
        let table: FreqTable<&str> = ["a", "a", "b", "c"].into_iter().collect();
        assert_eq!(table.top_n(2), vec![("a", 2), ("b", 1)]);
        assert_eq!(table.top_n(10).len(), 3);
    }

    #[test]
    fn test_empty_table() {
        let table: FreqTable<String> = FreqTable::new();
        assert!(table.is_empty());
        assert_eq!(table.top(), None);
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_percent_share() {
        assert_eq!(percent_share(3, 3), Some(100));
        assert_eq!(percent_share(1, 3), Some(33));
        assert_eq!(percent_share(2, 3), Some(67));
        assert_eq!(percent_share(0, 0), None);
    }
}
