//! Seal bit: the point after which a shadow node becomes immutable.

use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether the owning object has been published to a committed tree.
///
/// Every mutation of a shadow node must pass through [`Seal::ensure_unsealed`]
/// first. Mutating a sealed node is a renderer bug, never recoverable input.
#[derive(Debug, Default)]
pub struct Seal {
    sealed: AtomicBool,
}

impl Seal {
    pub fn new() -> Self {
        Self {
            sealed: AtomicBool::new(false),
        }
    }

    /// Marks the owner immutable. Idempotent.
    pub fn seal(&self) {
        self.sealed.store(true, Ordering::Release);
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    /// Fatal assert guarding pre-seal-only operations. `what` names the
    /// mutation for the diagnostic message.
    pub fn ensure_unsealed(&self, what: &str) {
        assert!(
            !self.is_sealed(),
            "attempted to mutate a sealed shadow node: {what}"
        );
    }
}
