//! Pass-through identity properties
//!
//! Model-based check of the forwarding contract against a real delegate:
//! a plain wrapper over a `BTreeMultimap` must be observationally
//! indistinguishable from the `BTreeMultimap` itself, for every operation
//! and any argument. A second property drives random operations at a
//! recording delegate and checks the exactly-once, exact-signature
//! discipline for the whole surface.

use proptest::prelude::*;

use plexmap::{BTreeMultimap, ForwardingMultimap, Multimap, RecordingMultimap};

#[derive(Debug, Clone)]
enum Op {
    Len,
    IsEmpty,
    ContainsKey(u8),
    ContainsValue(u8),
    ContainsEntry(u8, u8),
    Insert(u8, u8),
    Remove(u8, u8),
    InsertAll(u8, Vec<u8>),
    Merge(Vec<(u8, u8)>),
    ReplaceValues(u8, Vec<u8>),
    RemoveAll(u8),
    Clear,
    Get(u8),
    KeySet,
    Keys,
    Values,
    Entries,
    AsMap,
    EqMap(Vec<(u8, u8)>),
    HashValue,
    ToText,
}

/// Normalized observation of one operation's result
#[derive(Debug, PartialEq)]
enum Observed {
    Unit,
    Flag(bool),
    Count(usize),
    Hash(u64),
    Text(String),
    Values(Vec<u8>),
    Keys(Vec<u8>),
    Entries(Vec<(u8, u8)>),
    Groups(Vec<(u8, Vec<u8>)>),
}

fn apply(target: &mut dyn Multimap<u8, u8>, op: &Op) -> Observed {
    match op {
        Op::Len => Observed::Count(target.len()),
        Op::IsEmpty => Observed::Flag(target.is_empty()),
        Op::ContainsKey(key) => Observed::Flag(target.contains_key(key)),
        Op::ContainsValue(value) => Observed::Flag(target.contains_value(value)),
        Op::ContainsEntry(key, value) => Observed::Flag(target.contains_entry(key, value)),
        Op::Insert(key, value) => Observed::Flag(target.insert(*key, *value)),
        Op::Remove(key, value) => Observed::Flag(target.remove(key, value)),
        Op::InsertAll(key, values) => {
            Observed::Flag(target.insert_all(*key, &mut values.clone().into_iter()))
        }
        Op::Merge(pairs) => {
            let other: BTreeMultimap<u8, u8> = pairs.iter().copied().collect();
            Observed::Flag(target.merge(&other))
        }
        Op::ReplaceValues(key, values) => {
            Observed::Values(target.replace_values(*key, &mut values.clone().into_iter()))
        }
        Op::RemoveAll(key) => Observed::Values(target.remove_all(key)),
        Op::Clear => {
            target.clear();
            Observed::Unit
        }
        Op::Get(key) => Observed::Values(target.get(key)),
        Op::KeySet => Observed::Keys(target.key_set()),
        Op::Keys => Observed::Keys(target.keys()),
        Op::Values => Observed::Values(target.values()),
        Op::Entries => Observed::Entries(target.entries()),
        Op::AsMap => Observed::Groups(target.as_map()),
        Op::EqMap(pairs) => {
            let other: BTreeMultimap<u8, u8> = pairs.iter().copied().collect();
            Observed::Flag(target.eq_map(&other))
        }
        Op::HashValue => Observed::Hash(target.hash_value()),
        Op::ToText => Observed::Text(target.to_text()),
    }
}

/// Canonical signature the recording delegate must log for `op`
fn expected_signature(op: &Op) -> &'static str {
    match op {
        Op::Len => "size",
        Op::IsEmpty => "isEmpty",
        Op::ContainsKey(_) => "containsKey(Object)",
        Op::ContainsValue(_) => "containsValue(Object)",
        Op::ContainsEntry(..) => "containsEntry(Object,Object)",
        Op::Insert(..) => "put(Object,Object)",
        Op::Remove(..) => "remove(Object,Object)",
        Op::InsertAll(..) => "putAll(Object,Iterable)",
        Op::Merge(_) => "putAll(Multimap)",
        Op::ReplaceValues(..) => "replaceValues(Object,Iterable)",
        Op::RemoveAll(_) => "removeAll(Object)",
        Op::Clear => "clear",
        Op::Get(_) => "get(Object)",
        Op::KeySet => "keySet",
        Op::Keys => "keys",
        Op::Values => "values",
        Op::Entries => "entries",
        Op::AsMap => "asMap",
        Op::EqMap(_) => "equals(Object)",
        Op::HashValue => "hashCode",
        Op::ToText => "toString",
    }
}

fn no_arg_op() -> impl Strategy<Value = Op> {
    proptest::sample::select(vec![
        Op::Len,
        Op::IsEmpty,
        Op::Clear,
        Op::KeySet,
        Op::Keys,
        Op::Values,
        Op::Entries,
        Op::AsMap,
        Op::HashValue,
        Op::ToText,
    ])
}

fn keyed_query_op() -> impl Strategy<Value = Op> {
    let key = 0u8..8;
    let value = 0u8..4;
    let pairs = proptest::collection::vec((0u8..8, 0u8..4), 0..6);
    prop_oneof![
        key.clone().prop_map(Op::ContainsKey),
        value.clone().prop_map(Op::ContainsValue),
        (key.clone(), value).prop_map(|(k, v)| Op::ContainsEntry(k, v)),
        key.prop_map(Op::Get),
        pairs.prop_map(Op::EqMap),
    ]
}

fn mutation_op() -> impl Strategy<Value = Op> {
    let key = 0u8..8;
    let value = 0u8..4;
    let values = proptest::collection::vec(0u8..4, 0..4);
    let pairs = proptest::collection::vec((0u8..8, 0u8..4), 0..6);
    prop_oneof![
        (key.clone(), value.clone()).prop_map(|(k, v)| Op::Insert(k, v)),
        (key.clone(), value).prop_map(|(k, v)| Op::Remove(k, v)),
        (key.clone(), values.clone()).prop_map(|(k, vs)| Op::InsertAll(k, vs)),
        pairs.prop_map(Op::Merge),
        (key.clone(), values).prop_map(|(k, vs)| Op::ReplaceValues(k, vs)),
        key.prop_map(Op::RemoveAll),
    ]
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![no_arg_op(), keyed_query_op(), mutation_op()]
}

proptest! {
    /// The wrapper's result equals the delegate's result, operation by
    /// operation, and the delegate ends up in the same state a bare
    /// multimap would.
    #[test]
    fn forwarded_operations_match_direct_operations(
        ops in proptest::collection::vec(any_op(), 0..48)
    ) {
        let mut bare = BTreeMultimap::new();
        let mut backing = BTreeMultimap::new();

        for op in &ops {
            let direct = apply(&mut bare, op);
            let mut wrapper = ForwardingMultimap::new(&mut backing);
            let forwarded = apply(&mut wrapper, op);
            prop_assert_eq!(direct, forwarded);
        }

        prop_assert!(bare.eq_map(&backing));
        prop_assert_eq!(bare.hash_value(), backing.hash_value());
        prop_assert_eq!(bare.to_text(), backing.to_text());
    }

    /// Any single operation through the wrapper records exactly one
    /// signature, and exactly the right one.
    #[test]
    fn every_operation_records_exactly_one_signature(op in any_op()) {
        let mut proxy = RecordingMultimap::<u8, u8>::new().expect("operation table is well formed");
        let log = proxy.log();

        let mut wrapper = ForwardingMultimap::new(&mut proxy);
        let _ = apply(&mut wrapper, &op);

        prop_assert_eq!(log.len(), 1);
        prop_assert_eq!(log.snapshot()[0].as_str(), expected_signature(&op));
    }
}
