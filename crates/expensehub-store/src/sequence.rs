//! Monotonic id generation.

use std::sync::atomic::{AtomicI64, Ordering};

use expensehub_entity::Id;

/// Hands out increasing ids starting at 1.
#[derive(Debug)]
pub struct IdSequence(AtomicI64);

impl IdSequence {
    /// Creates a sequence whose first id is 1.
    pub fn new() -> Self {
        Self(AtomicI64::new(0))
    }

    /// Returns the next id.
    pub fn next_id(&self) -> Id {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
