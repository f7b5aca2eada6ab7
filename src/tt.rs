//! Transposition table for caching search results.
//!
//! Maps position signatures to previously computed scores so identical
//! subtrees are evaluated once. The table is unbounded and never evicted:
//! it lives for one game and is discarded (or [`clear`](TranspositionTable::clear)ed)
//! afterwards.
//!
//! Entries carry no depth tag or bound type. A score stored when few plies
//! remained can satisfy a probe made with many plies remaining, and the
//! placement-only signature conflates positions that differ in side to move
//! or castling/en-passant rights. Both behaviors are intentional and
//! callers rely on them staying as they are.

use std::collections::HashMap;

use crate::rules::Signature;

/// Unbounded signature-to-score cache.
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<Signature, i32>,
}

impl TranspositionTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        TranspositionTable {
            entries: HashMap::new(),
        }
    }

    /// Look up the cached score for `signature`, if any.
    #[must_use]
    pub fn probe(&self, signature: &Signature) -> Option<i32> {
        self.entries.get(signature).copied()
    }

    /// Record `score` for `signature`, replacing any previous entry.
    pub fn store(&mut self, signature: Signature, score: i32) {
        self.entries.insert(signature, score);
    }

    /// Number of cached positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. Callers do this between games; the search itself
    /// never evicts.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
