//! Forwarding layer for the multimap abstraction
//!
//! [`Forwarding`] is the decorator base: implement the two delegate
//! accessors and every multimap operation becomes a pass-through to the
//! backing instance. Each operation is a provided default method, so an
//! implementor can re-define any subset of them — validation, counting,
//! transformation — while the rest keep forwarding untouched. Overriding
//! one operation has no effect on any other.
//!
//! The delegate is fetched through the accessor on every call, never
//! cached. An implementor whose accessor picks between backends will see
//! each operation land on whichever backend the accessor returns at that
//! moment.
//!
//! The layer is a pure conduit: no validation, no logging, no state of
//! its own. Whatever the delegate returns comes back unchanged, and a
//! panic raised by the delegate unwinds through unchanged.

use crate::multimap::Multimap;

/// Delegating multimap with per-operation override support.
///
/// Implementors supply [`delegate`](Forwarding::delegate) and
/// [`delegate_mut`](Forwarding::delegate_mut); the provided methods
/// forward every operation to that delegate. The blanket impl below makes
/// every `Forwarding` type a [`Multimap`], routed through the possibly
/// overridden methods.
///
/// # Examples
///
/// A wrapper that refuses a sentinel key but forwards everything else:
///
/// ```ignore
/// use plexmap_core::{Forwarding, Multimap};
///
/// struct NoSentinel<'a> {
///     inner: &'a mut dyn Multimap<String, u32>,
/// }
///
/// impl Forwarding<String, u32> for NoSentinel<'_> {
///     fn delegate(&self) -> &dyn Multimap<String, u32> {
///         self.inner
///     }
///
///     fn delegate_mut(&mut self) -> &mut dyn Multimap<String, u32> {
///         self.inner
///     }
///
///     fn insert(&mut self, key: String, value: u32) -> bool {
///         if key == "reserved" {
///             return false;
///         }
///         self.delegate_mut().insert(key, value)
///     }
/// }
/// ```
pub trait Forwarding<K, V> {
    /// The backing instance for read operations.
    ///
    /// Called afresh on every operation.
    fn delegate(&self) -> &dyn Multimap<K, V>;

    /// The backing instance for mutating operations.
    ///
    /// Called afresh on every operation.
    fn delegate_mut(&mut self) -> &mut dyn Multimap<K, V>;

    /// Forward `len` to the delegate
    fn len(&self) -> usize {
        self.delegate().len()
    }

    /// Forward `is_empty` to the delegate
    fn is_empty(&self) -> bool {
        self.delegate().is_empty()
    }

    /// Forward `contains_key` to the delegate
    fn contains_key(&self, key: &K) -> bool {
        self.delegate().contains_key(key)
    }

    /// Forward `contains_value` to the delegate
    fn contains_value(&self, value: &V) -> bool {
        self.delegate().contains_value(value)
    }

    /// Forward `contains_entry` to the delegate
    fn contains_entry(&self, key: &K, value: &V) -> bool {
        self.delegate().contains_entry(key, value)
    }

    /// Forward `insert` to the delegate
    fn insert(&mut self, key: K, value: V) -> bool {
        self.delegate_mut().insert(key, value)
    }

    /// Forward `remove` to the delegate
    fn remove(&mut self, key: &K, value: &V) -> bool {
        self.delegate_mut().remove(key, value)
    }

    /// Forward `insert_all` to the delegate
    fn insert_all(&mut self, key: K, values: &mut dyn Iterator<Item = V>) -> bool {
        self.delegate_mut().insert_all(key, values)
    }

    /// Forward `merge` to the delegate
    fn merge(&mut self, other: &dyn Multimap<K, V>) -> bool {
        self.delegate_mut().merge(other)
    }

    /// Forward `replace_values` to the delegate
    fn replace_values(&mut self, key: K, values: &mut dyn Iterator<Item = V>) -> Vec<V> {
        self.delegate_mut().replace_values(key, values)
    }

    /// Forward `remove_all` to the delegate
    fn remove_all(&mut self, key: &K) -> Vec<V> {
        self.delegate_mut().remove_all(key)
    }

    /// Forward `clear` to the delegate
    fn clear(&mut self) {
        self.delegate_mut().clear();
    }

    /// Forward `get` to the delegate
    fn get(&self, key: &K) -> Vec<V> {
        self.delegate().get(key)
    }

    /// Forward `key_set` to the delegate
    fn key_set(&self) -> Vec<K> {
        self.delegate().key_set()
    }

    /// Forward `keys` to the delegate
    fn keys(&self) -> Vec<K> {
        self.delegate().keys()
    }

    /// Forward `values` to the delegate
    fn values(&self) -> Vec<V> {
        self.delegate().values()
    }

    /// Forward `entries` to the delegate
    fn entries(&self) -> Vec<(K, V)> {
        self.delegate().entries()
    }

    /// Forward `as_map` to the delegate
    fn as_map(&self) -> Vec<(K, Vec<V>)> {
        self.delegate().as_map()
    }

    /// Forward `eq_map` to the delegate.
    ///
    /// Equality follows the delegate's content semantics, including when
    /// `other` is not itself a wrapper.
    fn eq_map(&self, other: &dyn Multimap<K, V>) -> bool {
        self.delegate().eq_map(other)
    }

    /// Forward `hash_value` to the delegate
    fn hash_value(&self) -> u64 {
        self.delegate().hash_value()
    }

    /// Forward `to_text` to the delegate.
    ///
    /// The rendered form is exactly the delegate's; the wrapper never
    /// names itself.
    fn to_text(&self) -> String {
        self.delegate().to_text()
    }
}

impl<K, V, T> Multimap<K, V> for T
where
    T: Forwarding<K, V>,
{
    fn len(&self) -> usize {
        Forwarding::len(self)
    }

    fn is_empty(&self) -> bool {
        Forwarding::is_empty(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        Forwarding::contains_key(self, key)
    }

    fn contains_value(&self, value: &V) -> bool {
        Forwarding::contains_value(self, value)
    }

    fn contains_entry(&self, key: &K, value: &V) -> bool {
        Forwarding::contains_entry(self, key, value)
    }

    fn insert(&mut self, key: K, value: V) -> bool {
        Forwarding::insert(self, key, value)
    }

    fn remove(&mut self, key: &K, value: &V) -> bool {
        Forwarding::remove(self, key, value)
    }

    fn insert_all(&mut self, key: K, values: &mut dyn Iterator<Item = V>) -> bool {
        Forwarding::insert_all(self, key, values)
    }

    fn merge(&mut self, other: &dyn Multimap<K, V>) -> bool {
        Forwarding::merge(self, other)
    }

    fn replace_values(&mut self, key: K, values: &mut dyn Iterator<Item = V>) -> Vec<V> {
        Forwarding::replace_values(self, key, values)
    }

    fn remove_all(&mut self, key: &K) -> Vec<V> {
        Forwarding::remove_all(self, key)
    }

    fn clear(&mut self) {
        Forwarding::clear(self);
    }

    fn get(&self, key: &K) -> Vec<V> {
        Forwarding::get(self, key)
    }

    fn key_set(&self) -> Vec<K> {
        Forwarding::key_set(self)
    }

    fn keys(&self) -> Vec<K> {
        Forwarding::keys(self)
    }

    fn values(&self) -> Vec<V> {
        Forwarding::values(self)
    }

    fn entries(&self) -> Vec<(K, V)> {
        Forwarding::entries(self)
    }

    fn as_map(&self) -> Vec<(K, Vec<V>)> {
        Forwarding::as_map(self)
    }

    fn eq_map(&self, other: &dyn Multimap<K, V>) -> bool {
        Forwarding::eq_map(self, other)
    }

    fn hash_value(&self) -> u64 {
        Forwarding::hash_value(self)
    }

    fn to_text(&self) -> String {
        Forwarding::to_text(self)
    }
}

/// Plain forwarding wrapper around a borrowed delegate.
///
/// Holds the delegate by `&mut` borrow — the caller manages the
/// delegate's lifetime — and adds nothing: every operation is the default
/// pass-through.
pub struct ForwardingMultimap<'a, K, V> {
    inner: &'a mut dyn Multimap<K, V>,
}

impl<'a, K, V> ForwardingMultimap<'a, K, V> {
    /// Wrap a delegate
    pub fn new(inner: &'a mut dyn Multimap<K, V>) -> Self {
        Self { inner }
    }
}

impl<K, V> Forwarding<K, V> for ForwardingMultimap<'_, K, V> {
    fn delegate(&self) -> &dyn Multimap<K, V> {
        self.inner
    }

    fn delegate_mut(&mut self) -> &mut dyn Multimap<K, V> {
        self.inner
    }
}
