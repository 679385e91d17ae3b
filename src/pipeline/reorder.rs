//! Reorder buffer restoring sequence order of out-of-order results.
//!
//! Results are held back until every result with a lower sequence number has
//! been released, so output order never depends on which worker finished first.

use std::collections::BTreeMap;

/// Buffers items keyed by sequence number and releases them in order.
#[derive(Debug)]
pub struct ReorderBuffer<T> {
    /// Completed but not yet released items.
    pending: BTreeMap<u64, T>,
    /// Next sequence number to release.
    next: u64,
}

impl<T> Default for ReorderBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReorderBuffer<T> {
    /// Creates a buffer expecting sequence 0 first.
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
            next: 0,
        }
    }

    /// Adds a completed item.
    ///
    /// Items for sequence numbers that were already released, or that are
    /// already buffered, are rejected and returned.
    pub fn insert(&mut self, sequence: u64, item: T) -> Result<(), T> {
        if sequence < self.next || self.pending.contains_key(&sequence) {
            return Err(item);
        }
        self.pending.insert(sequence, item);
        Ok(())
    }

    /// Releases every item that is next in sequence.
    pub fn drain_ready(&mut self) -> Vec<T> {
        let mut ready = Vec::new();
        while let Some(item) = self.pending.remove(&self.next) {
            ready.push(item);
            self.next += 1;
        }
        ready
    }

    /// Number of buffered items waiting for an earlier sequence.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Next sequence number to be released.
    pub fn next_sequence(&self) -> u64 {
        self.next
    }
}
