//! Ordered log of recorded call signatures
//!
//! The log is the harness's only state: an append-only sequence of
//! canonical signatures, rendered at record time from the operation
//! descriptors. It is private to one recording delegate and exclusively
//! owned by one single-threaded test at a time, so interior mutability is
//! a `RefCell`, not a lock.

use std::cell::RefCell;

use plexmap_core::OpSpec;
use tracing::trace;

/// Append-only log of canonical call signatures.
///
/// `render` produces the bracketed, call-ordered form tests assert
/// against: `"[put(Object,Object)]"`, `"[size, clear]"`.
#[derive(Debug, Default)]
pub struct CallLog {
    calls: RefCell<Vec<String>>,
}

impl CallLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the canonical signature of `op`
    pub fn record(&self, op: &OpSpec) {
        let signature = op.render();
        trace!(%signature, "recorded call");
        self.calls.borrow_mut().push(signature);
    }

    /// Render the full log in call order
    pub fn render(&self) -> String {
        format!("[{}]", self.calls.borrow().join(", "))
    }

    /// Copy of the recorded signatures, in call order
    pub fn snapshot(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls
    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Drop every recorded call
    pub fn reset(&self) {
        trace!("call log reset");
        self.calls.borrow_mut().clear();
    }
}
