//! BTreeMultimap: ordered reference multimap
//!
//! ## Design
//!
//! A `BTreeMap<K, Vec<V>>` with one invariant: no key maps to an empty
//! value vector. Keys iterate in `Ord` order; values for a key keep
//! insertion order; duplicate key/value pairs are permitted.
//!
//! ## Semantics
//!
//! These are this implementation's choices, not requirements of the
//! abstraction — a delegate with different ordering or duplicate policy
//! is just as valid behind the forwarding layer.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::hash::{Hash, Hasher};

use plexmap_core::Multimap;
use xxhash_rust::xxh3::Xxh3;

/// Ordered multimap backed by a `BTreeMap<K, Vec<V>>`.
///
/// # Examples
///
/// ```ignore
/// use plexmap_collections::BTreeMultimap;
/// use plexmap_core::Multimap;
///
/// let mut map = BTreeMultimap::new();
/// map.insert("b", 2);
/// map.insert("a", 1);
/// map.insert("a", 1); // duplicates are kept
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.key_set(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct BTreeMultimap<K, V> {
    map: BTreeMap<K, Vec<V>>,
}

impl<K, V> BTreeMultimap<K, V> {
    /// Create an empty multimap
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V> Default for BTreeMultimap<K, V> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BTreeMultimap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BTreeMap::<K, Vec<V>>::new();
        for (key, value) in iter {
            map.entry(key).or_default().push(value);
        }
        Self { map }
    }
}

impl<K: Ord, V> Extend<(K, V)> for BTreeMultimap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.map.entry(key).or_default().push(value);
        }
    }
}

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for BTreeMultimap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for BTreeMultimap<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = BTreeMap::<K, Vec<V>>::deserialize(deserializer)?;
        // Restore the no-empty-groups invariant for hand-written input
        map.retain(|_, values| !values.is_empty());
        Ok(Self { map })
    }
}

impl<K, V> Multimap<K, V> for BTreeMultimap<K, V>
where
    K: Ord + Clone + Hash + std::fmt::Debug,
    V: PartialEq + Clone + Hash + std::fmt::Debug,
{
    fn len(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }

    fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn contains_value(&self, value: &V) -> bool {
        self.map.values().any(|values| values.contains(value))
    }

    fn contains_entry(&self, key: &K, value: &V) -> bool {
        self.map
            .get(key)
            .map_or(false, |values| values.contains(value))
    }

    fn insert(&mut self, key: K, value: V) -> bool {
        self.map.entry(key).or_default().push(value);
        true
    }

    fn remove(&mut self, key: &K, value: &V) -> bool {
        if let Some(values) = self.map.get_mut(key) {
            if let Some(idx) = values.iter().position(|v| v == value) {
                values.remove(idx);
                if values.is_empty() {
                    self.map.remove(key);
                }
                return true;
            }
        }
        false
    }

    fn insert_all(&mut self, key: K, values: &mut dyn Iterator<Item = V>) -> bool {
        let incoming: Vec<V> = values.collect();
        if incoming.is_empty() {
            return false;
        }
        self.map.entry(key).or_default().extend(incoming);
        true
    }

    fn merge(&mut self, other: &dyn Multimap<K, V>) -> bool {
        let mut changed = false;
        for (key, value) in other.entries() {
            changed |= self.insert(key, value);
        }
        changed
    }

    fn replace_values(&mut self, key: K, values: &mut dyn Iterator<Item = V>) -> Vec<V> {
        let previous = self.map.remove(&key).unwrap_or_default();
        let incoming: Vec<V> = values.collect();
        if !incoming.is_empty() {
            self.map.insert(key, incoming);
        }
        previous
    }

    fn remove_all(&mut self, key: &K) -> Vec<V> {
        self.map.remove(key).unwrap_or_default()
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    fn get(&self, key: &K) -> Vec<V> {
        self.map.get(key).cloned().unwrap_or_default()
    }

    fn key_set(&self) -> Vec<K> {
        self.map.keys().cloned().collect()
    }

    fn keys(&self) -> Vec<K> {
        self.map
            .iter()
            .flat_map(|(key, values)| std::iter::repeat(key.clone()).take(values.len()))
            .collect()
    }

    fn values(&self) -> Vec<V> {
        self.map.values().flatten().cloned().collect()
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.map
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key.clone(), value.clone())))
            .collect()
    }

    fn as_map(&self) -> Vec<(K, Vec<V>)> {
        self.map
            .iter()
            .map(|(key, values)| (key.clone(), values.clone()))
            .collect()
    }

    fn eq_map(&self, other: &dyn Multimap<K, V>) -> bool {
        // A foreign implementation's group order is unspecified
        let mut theirs = other.as_map();
        theirs.sort_by(|a, b| a.0.cmp(&b.0));
        self.as_map() == theirs
    }

    fn hash_value(&self) -> u64 {
        let mut hasher = Xxh3::new();
        for (key, values) in &self.map {
            key.hash(&mut hasher);
            values.hash(&mut hasher);
        }
        hasher.finish()
    }

    fn to_text(&self) -> String {
        let mut out = String::from("{");
        for (i, (key, values)) in self.map.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{:?}: {:?}", key, values);
        }
        out.push('}');
        out
    }
}
