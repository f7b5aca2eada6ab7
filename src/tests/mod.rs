//! Engine core tests.
//!
//! Tests are organized into separate files by category:
//! - `scripted.rs` - The scripted game tree the search tests run on
//! - `search.rs` - Minimax, pruning, caching and root selection
//! - `proptest.rs` - Property-based tests
