//! Recording multimap delegate
//!
//! `RecordingMultimap` implements the full `Multimap` surface by logging
//! and defaulting: each operation appends exactly one canonical signature
//! to the shared [`CallLog`] and returns the default for its declared
//! result kind — `false`, zero, an empty collection, an empty string.
//! Arguments are ignored entirely; the signature derives from the
//! declared parameter kinds, never from argument values.
//!
//! Rust has no runtime proxy generation, so the generic half of the
//! harness lives in the descriptor table and the log; the per-operation
//! bindings here are each a single record-and-default line.

use std::marker::PhantomData;
use std::rc::Rc;

use plexmap_core::{ops, Multimap, Result};

use crate::log::CallLog;

/// `Multimap` implementation that records calls and returns defaults.
///
/// Carries no bounds on `K` or `V`: no operation ever inspects a key or a
/// value. A test typically holds the [`CallLog`] handle from
/// [`log`](RecordingMultimap::log) while the proxy itself is mutably
/// borrowed by the wrapper under test.
///
/// # Examples
///
/// ```ignore
/// use plexmap_core::{ForwardingMultimap, Multimap};
/// use plexmap_harness::RecordingMultimap;
///
/// let mut proxy = RecordingMultimap::<String, bool>::new()?;
/// let log = proxy.log();
///
/// let mut forward = ForwardingMultimap::new(&mut proxy);
/// forward.insert("asdf".to_string(), true);
///
/// assert_eq!(log.render(), "[put(Object,Object)]");
/// ```
#[derive(Debug)]
pub struct RecordingMultimap<K, V> {
    log: Rc<CallLog>,
    _entry: PhantomData<(K, V)>,
}

impl<K, V> RecordingMultimap<K, V> {
    /// Create a recording delegate with a fresh, empty log.
    ///
    /// # Errors
    ///
    /// Returns an error when the operation table is malformed — a
    /// setup-time failure, never a runtime one.
    pub fn new() -> Result<Self> {
        ops::validate(ops::OPERATIONS)?;
        Ok(Self {
            log: Rc::new(CallLog::new()),
            _entry: PhantomData,
        })
    }

    /// Shared handle to the call log
    pub fn log(&self) -> Rc<CallLog> {
        Rc::clone(&self.log)
    }
}

impl<K, V> Multimap<K, V> for RecordingMultimap<K, V> {
    fn len(&self) -> usize {
        self.log.record(&ops::SIZE);
        0
    }

    fn is_empty(&self) -> bool {
        self.log.record(&ops::IS_EMPTY);
        false
    }

    fn contains_key(&self, _key: &K) -> bool {
        self.log.record(&ops::CONTAINS_KEY);
        false
    }

    fn contains_value(&self, _value: &V) -> bool {
        self.log.record(&ops::CONTAINS_VALUE);
        false
    }

    fn contains_entry(&self, _key: &K, _value: &V) -> bool {
        self.log.record(&ops::CONTAINS_ENTRY);
        false
    }

    fn insert(&mut self, _key: K, _value: V) -> bool {
        self.log.record(&ops::PUT);
        false
    }

    fn remove(&mut self, _key: &K, _value: &V) -> bool {
        self.log.record(&ops::REMOVE);
        false
    }

    fn insert_all(&mut self, _key: K, _values: &mut dyn Iterator<Item = V>) -> bool {
        self.log.record(&ops::PUT_ALL);
        false
    }

    fn merge(&mut self, _other: &dyn Multimap<K, V>) -> bool {
        self.log.record(&ops::PUT_ALL_MULTIMAP);
        false
    }

    fn replace_values(&mut self, _key: K, _values: &mut dyn Iterator<Item = V>) -> Vec<V> {
        self.log.record(&ops::REPLACE_VALUES);
        Vec::new()
    }

    fn remove_all(&mut self, _key: &K) -> Vec<V> {
        self.log.record(&ops::REMOVE_ALL);
        Vec::new()
    }

    fn clear(&mut self) {
        self.log.record(&ops::CLEAR);
    }

    fn get(&self, _key: &K) -> Vec<V> {
        self.log.record(&ops::GET);
        Vec::new()
    }

    fn key_set(&self) -> Vec<K> {
        self.log.record(&ops::KEY_SET);
        Vec::new()
    }

    fn keys(&self) -> Vec<K> {
        self.log.record(&ops::KEYS);
        Vec::new()
    }

    fn values(&self) -> Vec<V> {
        self.log.record(&ops::VALUES);
        Vec::new()
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.log.record(&ops::ENTRIES);
        Vec::new()
    }

    fn as_map(&self) -> Vec<(K, Vec<V>)> {
        self.log.record(&ops::AS_MAP);
        Vec::new()
    }

    fn eq_map(&self, _other: &dyn Multimap<K, V>) -> bool {
        self.log.record(&ops::EQUALS);
        false
    }

    fn hash_value(&self) -> u64 {
        self.log.record(&ops::HASH_CODE);
        0
    }

    fn to_text(&self) -> String {
        self.log.record(&ops::TO_STRING);
        String::new()
    }
}
