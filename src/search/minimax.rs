//! Depth-limited minimax with alpha-beta pruning.

use crate::eval::evaluate;
use crate::repetition::RepetitionTable;
use crate::rules::{Rules, TrialMove};
use crate::search::INFINITY;
use crate::tt::TranspositionTable;

/// Minimax score of the position in `rules`, searched `depth` plies deep
/// within the `(alpha, beta)` window.
///
/// `maximizing` is true when the side to move prefers higher scores. Scores
/// are cached in `table` keyed by position signature; a hit answers the
/// probe whatever depth produced it, so the cache is consulted before the
/// depth and game-over checks. Candidate moves are tried in ascending
/// notation order.
pub fn search<R: Rules>(
    rules: &mut R,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    table: &mut TranspositionTable,
    counts: &RepetitionTable,
) -> i32 {
    let signature = rules.signature();
    if let Some(score) = table.probe(&signature) {
        return score;
    }

    if depth == 0 || rules.is_game_over() {
        let score = evaluate(rules, counts);
        table.store(signature, score);
        return score;
    }

    let mut moves = rules.legal_moves();
    moves.sort_by_cached_key(|mv| rules.move_text(mv));

    let value = if maximizing {
        let mut value = -INFINITY;
        for mv in &moves {
            let score = {
                let mut trial = TrialMove::new(rules, mv);
                search(&mut *trial, depth - 1, alpha, beta, false, table, counts)
            };
            value = value.max(score);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        value
    } else {
        let mut value = INFINITY;
        for mv in &moves {
            let score = {
                let mut trial = TrialMove::new(rules, mv);
                search(&mut *trial, depth - 1, alpha, beta, true, table, counts)
            };
            value = value.min(score);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        value
    };

    // Stored under the signature seen at entry, not the last trial position.
    table.store(signature, value);
    value
}
