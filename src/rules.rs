//! The rules-engine contract consumed by evaluation and search.
//!
//! The engine core never implements chess itself. Legal moves, applying and
//! unwinding them, terminal detection and piece placement all arrive through
//! the [`Rules`] trait, so the same search runs over the shipped
//! [`ChessRules`](crate::ChessRules) binding or over scripted positions in
//! tests.

use std::fmt;
use std::ops::{Deref, DerefMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Piece color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Every piece kind, pawns first.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Convert to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Convert to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// A colored piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }
}

/// Number of board squares; [`Rules::piece_at`] accepts `0..BOARD_SQUARES`.
pub const BOARD_SQUARES: usize = 64;

/// Canonical text for a position's piece placement.
///
/// This is the first FEN field and nothing else: side to move, castling
/// rights and en-passant are deliberately absent, so positions that differ
/// only in those fields share a signature. Both the repetition counts and
/// the transposition cache key on this conflated identity.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature(String);

impl Signature {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Signature {
        Signature(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Signature {
    fn from(text: &str) -> Signature {
        Signature(text.to_owned())
    }
}

/// What the engine needs from a rules engine.
///
/// Implementations own the position and mutate it in place; `make_move`
/// returns an undo token and `unmake_move` consumes it. Tokens are used in
/// strict LIFO order: speculative lines unwind through [`TrialMove`] before
/// the next sibling is tried.
pub trait Rules {
    /// A legal move in the implementation's own representation.
    type Move: Clone;
    /// Whatever `unmake_move` needs to restore the previous position.
    type Undo;

    /// Legal moves for the side to move, in the engine's natural order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply `mv` to the position, returning the token that undoes it.
    fn make_move(&mut self, mv: &Self::Move) -> Self::Undo;

    /// Restore the position from before the matching `make_move`.
    fn unmake_move(&mut self, undo: Self::Undo);

    /// Whether the game has ended in this position.
    fn is_game_over(&self) -> bool;

    /// Placement-only signature of the current position.
    fn signature(&self) -> Signature;

    /// Piece on `square` (0 = a1 .. 63 = h8), if any.
    fn piece_at(&self, square: usize) -> Option<Piece>;

    /// Canonical text for `mv` ("e2e4" in standard chess). Search sorts
    /// moves by this key.
    fn move_text(&self, mv: &Self::Move) -> String;
}

/// A speculatively applied move that unwinds itself.
///
/// Construction applies the move; drop restores the position. Search scopes
/// hold the guard for exactly the lifetime of the subtree, so the position
/// is whole again on every exit path, including pruning cutoffs.
pub struct TrialMove<'a, R: Rules> {
    rules: &'a mut R,
    undo: Option<R::Undo>,
}

impl<'a, R: Rules> TrialMove<'a, R> {
    /// Apply `mv` to `rules` until the guard is dropped.
    pub fn new(rules: &'a mut R, mv: &R::Move) -> TrialMove<'a, R> {
        let undo = rules.make_move(mv);
        TrialMove {
            rules,
            undo: Some(undo),
        }
    }
}

impl<R: Rules> Deref for TrialMove<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.rules
    }
}

impl<R: Rules> DerefMut for TrialMove<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.rules
    }
}

impl<R: Rules> Drop for TrialMove<'_, R> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.rules.unmake_move(undo);
        }
    }
}
