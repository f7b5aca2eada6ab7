//! Static position evaluation.
//!
//! Material counting in plain pawn units plus a repetition penalty. Scores
//! are always from White's point of view: positive favors White no matter
//! which side is to move.

use crate::repetition::RepetitionTable;
use crate::rules::{Color, PieceKind, Rules, BOARD_SQUARES};

/// Points subtracted from the score for each time the current position's
/// signature has already been counted.
pub const REPETITION_PENALTY: i32 = 10;

/// Get material value for a piece kind (in pawn units)
#[inline]
#[must_use]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Score the current position: White material minus Black material, minus
/// [`REPETITION_PENALTY`] for every prior count of this position's signature.
///
/// The penalty is subtracted unconditionally, so it always debits the White
/// side of the ledger regardless of which player is repeating. No side
/// effects: the position and counts are only read.
#[must_use]
pub fn evaluate<R: Rules>(rules: &R, counts: &RepetitionTable) -> i32 {
    let mut material = 0;
    for square in 0..BOARD_SQUARES {
        if let Some(piece) = rules.piece_at(square) {
            let value = piece_value(piece.kind);
            match piece.color {
                Color::White => material += value,
                Color::Black => material -= value,
            }
        }
    }

    let repetitions = counts.get(&rules.signature()) as i32;
    material - repetitions * REPETITION_PENALTY
}
