//! Concrete multimap implementations for plexmap
//!
//! This crate provides the reference implementation of the core
//! `Multimap` trait:
//! - `BTreeMultimap`: ordered keys, insertion-ordered values per key
//!
//! Any implementation here is interchangeable with any other delegate
//! behind `&dyn Multimap<K, V>` — the forwarding layer and the recording
//! harness never depend on which one backs them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod btree;

pub use btree::BTreeMultimap;
