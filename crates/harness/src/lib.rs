//! Call-recording test harness for the multimap forwarding contract
//!
//! The harness answers one question mechanically: when an operation is
//! invoked on a forwarding wrapper, does exactly that operation — same
//! name, same declared parameter kinds — reach the delegate, exactly
//! once?
//!
//! - `CallLog`: ordered log of rendered canonical signatures
//! - `RecordingMultimap`: a `Multimap` whose every operation appends one
//!   signature to the log and returns a default value
//!
//! A conformance test wires a `RecordingMultimap` behind the wrapper
//! under test, invokes a single operation, and asserts the log equals
//! `"[<signature>]"`. Any extra, missing, or differently shaped call is
//! a failure.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod log;
pub mod recording;

pub use log::CallLog;
pub use recording::RecordingMultimap;
