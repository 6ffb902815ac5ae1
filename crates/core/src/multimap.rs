//! The multimap abstraction
//!
//! A multimap associates each key with a collection of values and permits
//! duplicate key/value pairs. This module defines the operation surface
//! only; semantics that vary between implementations — ordering,
//! duplicate policy, iteration guarantees — belong to the concrete type.
//!
//! The trait is object-safe and carries no bounds, so any implementation
//! can stand behind `&dyn Multimap<K, V>`: a real collection, a borrowed
//! backend, or a recording test double. Bounds live on impl blocks.
//!
//! Thread safety: implementations are not required to be `Send` or
//! `Sync`; callers that share a multimap across threads must pick an
//! implementation that supports it.

/// A key-to-many-values mapping supporting duplicate key/value pairs.
///
/// View-returning operations (`get`, `key_set`, `keys`, `values`,
/// `entries`, `as_map`) return owned snapshots; live views are out of
/// scope.
///
/// # Examples
///
/// ```ignore
/// use plexmap_core::Multimap;
/// use plexmap_collections::BTreeMultimap;
///
/// let mut map = BTreeMultimap::new();
/// map.insert("k", 1);
/// map.insert("k", 2);
/// assert_eq!(map.get(&"k"), vec![1, 2]);
/// ```
pub trait Multimap<K, V> {
    /// Total number of key/value pairs
    fn len(&self) -> usize;

    /// Whether the multimap holds no pairs at all
    fn is_empty(&self) -> bool;

    /// Whether at least one value is associated with `key`
    fn contains_key(&self, key: &K) -> bool;

    /// Whether `value` is associated with any key
    fn contains_value(&self, value: &V) -> bool;

    /// Whether the exact `key`/`value` pair is present
    fn contains_entry(&self, key: &K, value: &V) -> bool;

    /// Associate `value` with `key`.
    ///
    /// Returns `true` if the multimap changed.
    fn insert(&mut self, key: K, value: V) -> bool;

    /// Remove a single occurrence of the `key`/`value` pair.
    ///
    /// Returns `true` if a pair was removed.
    fn remove(&mut self, key: &K, value: &V) -> bool;

    /// Associate every value produced by `values` with `key`.
    ///
    /// Returns `true` if the multimap changed.
    fn insert_all(&mut self, key: K, values: &mut dyn Iterator<Item = V>) -> bool;

    /// Copy every entry of `other` into this multimap.
    ///
    /// Returns `true` if the multimap changed.
    fn merge(&mut self, other: &dyn Multimap<K, V>) -> bool;

    /// Replace the values associated with `key`, returning the previous
    /// ones.
    fn replace_values(&mut self, key: K, values: &mut dyn Iterator<Item = V>) -> Vec<V>;

    /// Remove every value associated with `key`, returning them.
    fn remove_all(&mut self, key: &K) -> Vec<V>;

    /// Remove every entry
    fn clear(&mut self);

    /// The values associated with `key`, empty if there are none
    fn get(&self, key: &K) -> Vec<V>;

    /// The distinct keys
    fn key_set(&self) -> Vec<K>;

    /// The keys, one occurrence per associated value
    fn keys(&self) -> Vec<K>;

    /// Every value, across all keys
    fn values(&self) -> Vec<V>;

    /// Every key/value pair
    fn entries(&self) -> Vec<(K, V)>;

    /// The key-grouped view: each distinct key with its values
    fn as_map(&self) -> Vec<(K, Vec<V>)>;

    /// Content equality against any other multimap
    fn eq_map(&self, other: &dyn Multimap<K, V>) -> bool;

    /// Content hash
    fn hash_value(&self) -> u64;

    /// Rendered text form
    fn to_text(&self) -> String;
}
