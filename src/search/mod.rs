//! Move search.
//!
//! [`search`] is a fixed-depth minimax over any [`Rules`](crate::rules::Rules)
//! implementation, with alpha-beta pruning and a shared
//! [`TranspositionTable`](crate::tt::TranspositionTable). [`best_move`] drives
//! it from the root and picks uniformly among the candidates that tie for the
//! best score.

mod minimax;
mod root;

pub use minimax::search;
pub use root::{best_move, best_move_with_rng};

/// Sentinel bound for alpha-beta windows. Larger in magnitude than any
/// reachable evaluation.
pub const INFINITY: i32 = 1_000_000;

/// Search depth used by callers that do not pick their own.
pub const DEFAULT_DEPTH: u32 = 5;
