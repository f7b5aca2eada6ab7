//! Chess rules backed by the `chess` crate.
//!
//! [`ChessRules`] is the rules engine the crate ships with: move generation,
//! legality and game-over detection come from [`chess::Board`], adapted to
//! the [`Rules`] contract the search is written against. Undo is a board
//! snapshot, which `chess::Board` makes cheap by being `Copy`.

use std::fmt;
use std::str::FromStr;

use chess::{Board, BoardStatus, ChessMove, MoveGen};

use crate::rules::{Color, Piece, PieceKind, Rules, Signature};

/// Error type for FEN parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFenError {
    /// The rejected FEN string.
    pub fen: String,
}

impl fmt::Display for InvalidFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid FEN '{}'", self.fen)
    }
}

impl std::error::Error for InvalidFenError {}

/// A chess position implementing [`Rules`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessRules {
    board: Board,
}

impl ChessRules {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> ChessRules {
        ChessRules {
            board: Board::default(),
        }
    }

    /// Build a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<ChessRules, InvalidFenError> {
        let board = Board::from_str(fen).map_err(|_| InvalidFenError {
            fen: fen.to_string(),
        })?;
        Ok(ChessRules { board })
    }

    /// The underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for ChessRules {
    fn default() -> ChessRules {
        ChessRules::new()
    }
}

impl Rules for ChessRules {
    type Move = ChessMove;
    type Undo = Board;

    fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn make_move(&mut self, mv: &ChessMove) -> Board {
        let undo = self.board;
        self.board = self.board.make_move_new(*mv);
        undo
    }

    fn unmake_move(&mut self, undo: Board) {
        self.board = undo;
    }

    fn is_game_over(&self) -> bool {
        self.board.status() != BoardStatus::Ongoing
    }

    fn signature(&self) -> Signature {
        // Placement field only, built rank 8 down to rank 1 with empty
        // squares run-length encoded.
        let mut text = String::with_capacity(71);
        for rank in (0..8).rev() {
            if rank < 7 {
                text.push('/');
            }
            let mut empty: u8 = 0;
            for file in 0..8 {
                match self.piece_at(rank * 8 + file) {
                    Some(piece) => {
                        if empty > 0 {
                            text.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        text.push(piece.kind.to_fen_char(piece.color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push(char::from(b'0' + empty));
            }
        }
        Signature::new(text)
    }

    fn piece_at(&self, square: usize) -> Option<Piece> {
        let sq = *chess::ALL_SQUARES.get(square)?;
        let kind = match self.board.piece_on(sq)? {
            chess::Piece::Pawn => PieceKind::Pawn,
            chess::Piece::Knight => PieceKind::Knight,
            chess::Piece::Bishop => PieceKind::Bishop,
            chess::Piece::Rook => PieceKind::Rook,
            chess::Piece::Queen => PieceKind::Queen,
            chess::Piece::King => PieceKind::King,
        };
        let color = match self.board.color_on(sq)? {
            chess::Color::White => Color::White,
            chess::Color::Black => Color::Black,
        };
        Some(Piece::new(color, kind))
    }

    fn move_text(&self, mv: &ChessMove) -> String {
        mv.to_string()
    }
}
