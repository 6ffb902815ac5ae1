//! Error types for plexmap
//!
//! Multimap operations themselves are infallible, so the only failure
//! domain here is harness configuration: a recording proxy built from a
//! malformed operation table fails at setup time, never mid-test.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use thiserror::Error;

/// Result type alias for plexmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for plexmap
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation table contains no descriptors
    #[error("operation table is empty")]
    EmptyOperationTable,

    /// A descriptor was declared with a blank operation name
    #[error("operation table contains a descriptor with an empty name")]
    EmptyOperationName,

    /// Two descriptors render to the same canonical signature
    #[error("duplicate operation signature: {0}")]
    DuplicateOperation(String),

    /// A lookup asked for an operation the table does not describe
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}
