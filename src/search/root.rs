//! Root move selection.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::repetition::RepetitionTable;
use crate::rules::{Rules, TrialMove};
use crate::search::{search, INFINITY};
use crate::tt::TranspositionTable;

/// Pick a move for the side to move, searching `depth` plies.
///
/// Every legal move is scored by [`search`], with the position reached by
/// the move counted once more in `counts` for the duration of its
/// subsearch. The candidates tied for the highest score are collected and
/// one is returned uniformly at random. `None` means there was no legal
/// move.
pub fn best_move<R: Rules>(
    rules: &mut R,
    depth: u32,
    table: &mut TranspositionTable,
    counts: &mut RepetitionTable,
) -> Option<R::Move> {
    best_move_with_rng(rules, depth, table, counts, &mut rand::thread_rng())
}

/// [`best_move`] drawing the tie-break from a caller-supplied generator.
pub fn best_move_with_rng<R: Rules, G: Rng + ?Sized>(
    rules: &mut R,
    depth: u32,
    table: &mut TranspositionTable,
    counts: &mut RepetitionTable,
    rng: &mut G,
) -> Option<R::Move> {
    let moves = rules.legal_moves();
    if moves.is_empty() {
        debug!("no legal moves");
        return None;
    }
    debug!("scoring {} candidates at depth {depth}", moves.len());

    let mut best_score = -INFINITY;
    let mut best = Vec::new();

    for mv in &moves {
        let score = {
            let mut trial = TrialMove::new(rules, mv);
            let signature = trial.signature();
            counts.increment(signature.clone());
            let score = search(
                &mut *trial,
                depth.saturating_sub(1),
                -INFINITY,
                INFINITY,
                false,
                table,
                counts,
            );
            counts.decrement(&signature);
            score
        };
        trace!("{} scored {score}", rules.move_text(mv));

        if score > best_score {
            best_score = score;
            best.clear();
            best.push(mv.clone());
        } else if score == best_score {
            best.push(mv.clone());
        }
    }

    debug!("best score {best_score}, {} tied", best.len());
    best.choose(rng).cloned()
}
