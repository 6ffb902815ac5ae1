//! Core abstraction for plexmap
//!
//! This crate defines the foundational pieces every other crate builds on:
//! - `Multimap`: the object-safe key-to-many-values trait
//! - `Forwarding`: the delegating layer with per-operation override support
//! - `ops`: declarative operation descriptors and canonical signatures
//! - `Error`: error type for harness configuration failures
//!
//! The trait is deliberately bound-free so that delegates of any shape —
//! real collections, borrowed backends, test doubles — are interchangeable
//! behind `&dyn Multimap<K, V>`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod forwarding;
pub mod multimap;
pub mod ops;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use forwarding::{Forwarding, ForwardingMultimap};
pub use multimap::Multimap;
pub use ops::{OpSpec, ParamKind, ResultKind, OPERATIONS};
