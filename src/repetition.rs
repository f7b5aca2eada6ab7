//! Occurrence counts for visited positions.
//!
//! The game loop owns one [`RepetitionTable`] per game and bumps it each
//! time a move is committed. The search reads it through the evaluator's
//! repetition penalty and, at the root, increments and decrements it around
//! each speculative candidate so the subsearch sees an immediate repeat as
//! already counted. Net effect on the table after any search call is zero.

use std::collections::HashMap;

use crate::rules::Signature;

/// Signature-to-occurrence-count map. Absent keys count as zero and
/// zero-count entries are removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepetitionTable {
    counts: HashMap<Signature, u32>,
}

impl RepetitionTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    /// Times `signature` has been counted.
    #[must_use]
    pub fn get(&self, signature: &Signature) -> u32 {
        self.counts.get(signature).copied().unwrap_or(0)
    }

    /// Set the count for `signature`; a count of zero removes the entry.
    pub fn set(&mut self, signature: Signature, count: u32) {
        if count == 0 {
            self.counts.remove(&signature);
        } else {
            self.counts.insert(signature, count);
        }
    }

    /// Count one more occurrence of `signature`, returning the new count.
    pub fn increment(&mut self, signature: Signature) -> u32 {
        let next = self.get(&signature).saturating_add(1);
        self.set(signature, next);
        next
    }

    /// Count one less occurrence of `signature`, returning the new count.
    /// Saturates at zero, at which point the entry is removed.
    pub fn decrement(&mut self, signature: &Signature) -> u32 {
        let next = self.get(signature).saturating_sub(1);
        if next == 0 {
            self.counts.remove(signature);
        } else if let Some(count) = self.counts.get_mut(signature) {
            *count = next;
        }
        next
    }

    /// Number of signatures with a nonzero count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no signature has a nonzero count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
