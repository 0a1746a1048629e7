use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Counter that remembers the order in which keys were first seen.
///
/// Iteration follows insertion order, which keeps reports deterministic and
/// gives `most_frequent` its first-encountered tie-break.
#[derive(Debug, Clone)]
pub struct CountMap<K> {
    entries: Vec<(K, u64)>,
    index: HashMap<K, usize>,
}

impl<K: Hash + Eq + Clone> CountMap<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add one to `key`, creating it at zero first if absent.
    pub fn increment<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        self.add(key, 1);
    }

    pub fn add<Q>(&mut self, key: &Q, n: u64)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += n,
            None => {
                let owned = key.to_owned();
                self.index.insert(owned.clone(), self.entries.len());
                self.entries.push((owned, n));
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entry with the highest count.
    ///
    /// Only a strictly greater count replaces the running maximum, so on a tie
    /// the key seen first wins.
    pub fn most_frequent(&self) -> Option<(&K, u64)> {
        let mut best: Option<(&K, u64)> = None;
        for (key, count) in self.iter() {
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((key, count));
            }
        }
        best
    }

    /// Fold `other` into `self`; keys new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: CountMap<K>) {
        for (key, n) in other.entries {
            match self.index.get(&key) {
                Some(&slot) => self.entries[slot].1 += n,
                None => {
                    self.index.insert(key.clone(), self.entries.len());
                    self.entries.push((key, n));
                }
            }
        }
    }
}

impl<K: Hash + Eq + Clone> Default for CountMap<K> {
    fn default() -> Self {
        Self::new()
    }
}
