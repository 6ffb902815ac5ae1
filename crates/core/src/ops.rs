//! Operation descriptors and canonical signatures
//!
//! The multimap surface is described declaratively: one [`OpSpec`] per
//! operation, carrying the operation name, the declared kind of each
//! parameter, and a coarse classification of the result. The canonical
//! signature rendered from a descriptor — `putAll(Object,Iterable)`,
//! `size`, ... — is the string a recording delegate logs and a
//! conformance test asserts against.
//!
//! Rendering is a pure function of the descriptor. Nothing in this module
//! touches a log or any other state, so the renderer is testable on its
//! own.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// Declared kind of an operation parameter.
///
/// Signatures are computed from the declared kind, never from a concrete
/// argument value: the two `putAll` overloads share a name and are told
/// apart solely by their parameter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A bare key or value
    Object,
    /// A sequence of values
    Iterable,
    /// Another multimap
    Multimap,
}

impl ParamKind {
    /// Stable label used in rendered signatures
    pub const fn label(self) -> &'static str {
        match self {
            ParamKind::Object => "Object",
            ParamKind::Iterable => "Iterable",
            ParamKind::Multimap => "Multimap",
        }
    }
}

/// Coarse classification of an operation's declared result.
///
/// A recording delegate uses this to pick the default it returns: `false`
/// for [`ResultKind::Bool`], zero for counts and hashes, an empty
/// collection or string otherwise. The value is irrelevant to the
/// protocol; only the recorded signature matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// No result
    Unit,
    /// A yes/no answer
    Bool,
    /// An entry count
    Count,
    /// A content hash
    Hash,
    /// A rendered text form
    Text,
    /// A sequence of values
    Values,
    /// A sequence of keys
    Keys,
    /// A sequence of key/value pairs
    Entries,
    /// Key-grouped value sequences
    Groups,
}

/// Descriptor for one operation of the multimap surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpSpec {
    /// Operation name as it appears in rendered signatures
    pub name: &'static str,
    /// Declared parameter kinds, in order
    pub params: &'static [ParamKind],
    /// Declared result classification
    pub result: ResultKind,
}

impl OpSpec {
    /// Create a descriptor
    pub const fn new(
        name: &'static str,
        params: &'static [ParamKind],
        result: ResultKind,
    ) -> Self {
        Self {
            name,
            params,
            result,
        }
    }

    /// Render the canonical signature.
    ///
    /// A no-argument operation renders as its bare name; otherwise the
    /// parameter kind labels are joined with `,` inside parentheses:
    /// `containsEntry(Object,Object)`.
    pub fn render(&self) -> String {
        if self.params.is_empty() {
            return self.name.to_string();
        }
        let kinds: Vec<&str> = self.params.iter().map(|p| p.label()).collect();
        format!("{}({})", self.name, kinds.join(","))
    }
}

/// `size`
pub const SIZE: OpSpec = OpSpec::new("size", &[], ResultKind::Count);
/// `isEmpty`
pub const IS_EMPTY: OpSpec = OpSpec::new("isEmpty", &[], ResultKind::Bool);
/// `containsKey(Object)`
pub const CONTAINS_KEY: OpSpec =
    OpSpec::new("containsKey", &[ParamKind::Object], ResultKind::Bool);
/// `containsValue(Object)`
pub const CONTAINS_VALUE: OpSpec =
    OpSpec::new("containsValue", &[ParamKind::Object], ResultKind::Bool);
/// `containsEntry(Object,Object)`
pub const CONTAINS_ENTRY: OpSpec = OpSpec::new(
    "containsEntry",
    &[ParamKind::Object, ParamKind::Object],
    ResultKind::Bool,
);
/// `put(Object,Object)`
pub const PUT: OpSpec = OpSpec::new(
    "put",
    &[ParamKind::Object, ParamKind::Object],
    ResultKind::Bool,
);
/// `remove(Object,Object)`
pub const REMOVE: OpSpec = OpSpec::new(
    "remove",
    &[ParamKind::Object, ParamKind::Object],
    ResultKind::Bool,
);
/// `putAll(Object,Iterable)` — the per-key overload
pub const PUT_ALL: OpSpec = OpSpec::new(
    "putAll",
    &[ParamKind::Object, ParamKind::Iterable],
    ResultKind::Bool,
);
/// `putAll(Multimap)` — the bulk overload
pub const PUT_ALL_MULTIMAP: OpSpec =
    OpSpec::new("putAll", &[ParamKind::Multimap], ResultKind::Bool);
/// `replaceValues(Object,Iterable)`
pub const REPLACE_VALUES: OpSpec = OpSpec::new(
    "replaceValues",
    &[ParamKind::Object, ParamKind::Iterable],
    ResultKind::Values,
);
/// `removeAll(Object)`
pub const REMOVE_ALL: OpSpec =
    OpSpec::new("removeAll", &[ParamKind::Object], ResultKind::Values);
/// `clear`
pub const CLEAR: OpSpec = OpSpec::new("clear", &[], ResultKind::Unit);
/// `get(Object)`
pub const GET: OpSpec = OpSpec::new("get", &[ParamKind::Object], ResultKind::Values);
/// `keySet`
pub const KEY_SET: OpSpec = OpSpec::new("keySet", &[], ResultKind::Keys);
/// `keys`
pub const KEYS: OpSpec = OpSpec::new("keys", &[], ResultKind::Keys);
/// `values`
pub const VALUES: OpSpec = OpSpec::new("values", &[], ResultKind::Values);
/// `entries`
pub const ENTRIES: OpSpec = OpSpec::new("entries", &[], ResultKind::Entries);
/// `asMap`
pub const AS_MAP: OpSpec = OpSpec::new("asMap", &[], ResultKind::Groups);
/// `equals(Object)`
pub const EQUALS: OpSpec = OpSpec::new("equals", &[ParamKind::Object], ResultKind::Bool);
/// `hashCode`
pub const HASH_CODE: OpSpec = OpSpec::new("hashCode", &[], ResultKind::Hash);
/// `toString`
pub const TO_STRING: OpSpec = OpSpec::new("toString", &[], ResultKind::Text);

/// The full multimap operation table, in surface order
pub const OPERATIONS: &[OpSpec] = &[
    SIZE,
    IS_EMPTY,
    CONTAINS_KEY,
    CONTAINS_VALUE,
    CONTAINS_ENTRY,
    PUT,
    REMOVE,
    PUT_ALL,
    PUT_ALL_MULTIMAP,
    REPLACE_VALUES,
    REMOVE_ALL,
    CLEAR,
    GET,
    KEY_SET,
    KEYS,
    VALUES,
    ENTRIES,
    AS_MAP,
    EQUALS,
    HASH_CODE,
    TO_STRING,
];

/// Validate an operation table.
///
/// A recording delegate runs this at construction: a malformed table is a
/// setup-time failure, not something discovered mid-test.
///
/// # Errors
///
/// Returns an error if the table is empty, a descriptor has a blank name,
/// or two descriptors render to the same canonical signature.
pub fn validate(table: &[OpSpec]) -> Result<()> {
    if table.is_empty() {
        return Err(Error::EmptyOperationTable);
    }
    let mut seen = HashSet::new();
    for op in table {
        if op.name.is_empty() {
            return Err(Error::EmptyOperationName);
        }
        let signature = op.render();
        if !seen.insert(signature.clone()) {
            return Err(Error::DuplicateOperation(signature));
        }
    }
    Ok(())
}

/// Look up a descriptor by name and parameter kinds.
///
/// # Errors
///
/// Returns [`Error::UnknownOperation`] when no descriptor matches.
pub fn find(name: &str, params: &[ParamKind]) -> Result<&'static OpSpec> {
    OPERATIONS
        .iter()
        .find(|op| op.name == name && op.params == params)
        .ok_or_else(|| Error::UnknownOperation(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arg_operation_renders_bare_name() {
        assert_eq!(SIZE.render(), "size");
        assert_eq!(IS_EMPTY.render(), "isEmpty");
        assert_eq!(CLEAR.render(), "clear");
        assert_eq!(AS_MAP.render(), "asMap");
        assert_eq!(HASH_CODE.render(), "hashCode");
        assert_eq!(TO_STRING.render(), "toString");
    }

    #[test]
    fn single_parameter_renders_in_parentheses() {
        assert_eq!(CONTAINS_KEY.render(), "containsKey(Object)");
        assert_eq!(REMOVE_ALL.render(), "removeAll(Object)");
        assert_eq!(GET.render(), "get(Object)");
    }

    #[test]
    fn multiple_parameters_join_without_spaces() {
        assert_eq!(PUT.render(), "put(Object,Object)");
        assert_eq!(CONTAINS_ENTRY.render(), "containsEntry(Object,Object)");
        assert_eq!(REPLACE_VALUES.render(), "replaceValues(Object,Iterable)");
    }

    #[test]
    fn put_all_overloads_render_distinct_signatures() {
        assert_eq!(PUT_ALL.render(), "putAll(Object,Iterable)");
        assert_eq!(PUT_ALL_MULTIMAP.render(), "putAll(Multimap)");
        assert_ne!(PUT_ALL.render(), PUT_ALL_MULTIMAP.render());
    }

    #[test]
    fn full_table_validates() {
        assert!(validate(OPERATIONS).is_ok());
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(validate(&[]), Err(Error::EmptyOperationTable));
    }

    #[test]
    fn blank_name_is_rejected() {
        let table = [OpSpec::new("", &[], ResultKind::Unit)];
        assert_eq!(validate(&table), Err(Error::EmptyOperationName));
    }

    #[test]
    fn duplicate_signature_is_rejected() {
        let table = [PUT, SIZE, PUT];
        assert_eq!(
            validate(&table),
            Err(Error::DuplicateOperation("put(Object,Object)".to_string()))
        );
    }

    #[test]
    fn same_name_different_kinds_is_not_a_duplicate() {
        let table = [PUT_ALL, PUT_ALL_MULTIMAP];
        assert!(validate(&table).is_ok());
    }

    #[test]
    fn find_resolves_overloads_by_parameter_kinds() {
        let per_key = find("putAll", &[ParamKind::Object, ParamKind::Iterable]).unwrap();
        assert_eq!(per_key.render(), "putAll(Object,Iterable)");

        let bulk = find("putAll", &[ParamKind::Multimap]).unwrap();
        assert_eq!(bulk.render(), "putAll(Multimap)");
    }

    #[test]
    fn find_rejects_unknown_operations() {
        let err = find("frobnicate", &[]).unwrap_err();
        assert_eq!(err, Error::UnknownOperation("frobnicate".to_string()));
    }

    #[test]
    fn table_covers_the_full_surface() {
        assert_eq!(OPERATIONS.len(), 21);
    }
}
