pub mod chess_rules;
pub mod eval;
pub mod repetition;
pub mod rules;
pub mod search;
pub mod tt;

#[cfg(test)]
mod tests;

// Public API - collaborator contract and value types
pub use rules::{Color, Piece, PieceKind, Rules, Signature, TrialMove, BOARD_SQUARES};

// Public API - engine core
pub use eval::{evaluate, piece_value, REPETITION_PENALTY};
pub use repetition::RepetitionTable;
pub use search::{best_move, best_move_with_rng, search, DEFAULT_DEPTH, INFINITY};
pub use tt::TranspositionTable;

// Public API - shipped rules engine
pub use chess_rules::{ChessRules, InvalidFenError};
