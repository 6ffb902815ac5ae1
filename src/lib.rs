//! Plexmap - forwarding multimap abstraction with a conformance harness
//!
//! Plexmap packages three pieces around one object-safe `Multimap` trait:
//!
//! - a forwarding layer (`Forwarding`, `ForwardingMultimap`) that
//!   delegates every operation to an interchangeable backing instance and
//!   lets an implementor override any subset of operations without
//!   touching the rest;
//! - a reference implementation (`BTreeMultimap`);
//! - a call-recording harness (`RecordingMultimap`, `CallLog`) that makes
//!   "exactly this operation reached the delegate, exactly once"
//!   mechanically checkable.
//!
//! # Quick Start
//!
//! ```ignore
//! use plexmap::{ForwardingMultimap, Multimap, RecordingMultimap};
//!
//! let mut proxy = RecordingMultimap::<String, bool>::new()?;
//! let log = proxy.log();
//!
//! let mut forward = ForwardingMultimap::new(&mut proxy);
//! forward.insert("asdf".to_string(), true);
//!
//! assert_eq!(log.render(), "[put(Object,Object)]");
//! ```

// Re-export the public API of the member crates
pub use plexmap_collections::BTreeMultimap;
pub use plexmap_core::{ops, Error, Forwarding, ForwardingMultimap, Multimap, Result};
pub use plexmap_harness::{CallLog, RecordingMultimap};
