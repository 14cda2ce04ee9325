//! FEN import and export.
//!
//! The board has no castling-rights field: rights are read into the
//! "has moved" flags of kings and corner rooks and derived back from them.
//! Halfmove and fullmove counters are not tracked.

use super::error::FenError;
use super::{Board, Color, Occupant, Piece, Square};

/// The standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Castling letter, king-side flag and color, in FEN order.
const CASTLING: [(char, bool, Color); 4] = [
    ('K', true, Color::White),
    ('Q', false, Color::White),
    ('k', true, Color::Black),
    ('q', false, Color::Black),
];

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        let mut king_count = [0usize; 2];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::BadFileCount {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::at(file as u8, rank);
                let moved = match piece {
                    Piece::Pawn => rank != color.pawn_start_rank(),
                    // kings and rooks are marked unmoved below from the castling field
                    Piece::King | Piece::Rook => true,
                    _ => false,
                };
                board.put(sq, color, Occupant::new(piece, moved));
                if piece == Piece::King {
                    king_count[color.index()] += 1;
                    board.kings[color.index()] = sq;
                }
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadFileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }
        if king_count != [1, 1] {
            return Err(FenError::KingCount {
                white: king_count[0],
                black: king_count[1],
            });
        }

        // Parse side to move
        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        if parts[2] != "-" {
            for c in parts[2].chars() {
                let &(_, king_side, color) = CASTLING
                    .iter()
                    .find(|(letter, _, _)| *letter == c)
                    .ok_or(FenError::InvalidCastling { char: c })?;
                board.grant_castling(color, king_side);
            }
        }

        // Parse en passant target
        board.en_passant_target = match parts[3] {
            "-" => None,
            text => {
                let invalid = || FenError::InvalidEnPassant {
                    found: text.to_string(),
                };
                let sq: Square = text.parse().map_err(|_| invalid())?;
                // the target sits behind a pawn of the side that just moved
                let mover = board.side_to_move;
                let target_rank = match mover {
                    Color::White => 5,
                    Color::Black => 2,
                };
                let victim = Self::en_passant_victim(sq, mover);
                if sq.rank() != target_rank
                    || !board.is_empty(sq)
                    || board.piece_at(victim) != Some((mover.opponent(), Piece::Pawn))
                {
                    return Err(invalid());
                }
                Some(sq)
            }
        };

        if board.king_attacked(board.side_to_move.opponent()) {
            return Err(FenError::OpponentInCheck);
        }

        board.refresh_pins();
        board.refresh_checks(false);
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Clear the moved flags of a king on its home square and the matching
    /// corner rook. A right with either piece missing is silently dropped.
    fn grant_castling(&mut self, color: Color, king_side: bool) {
        let rank = color.back_rank();
        let king_sq = Square::at(4, rank);
        let rook_sq = Square::at(if king_side { 7 } else { 0 }, rank);
        let is = |board: &Board, sq: Square, piece: Piece| {
            board.piece_at(sq) == Some((color, piece))
        };
        if is(self, king_sq, Piece::King) && is(self, rook_sq, Piece::Rook) {
            self.pieces[king_sq.index()] = Some(Occupant::new(Piece::King, false));
            self.pieces[rook_sq.index()] = Some(Occupant::new(Piece::Rook, false));
        }
    }

    fn has_castling_right(&self, color: Color, king_side: bool) -> bool {
        let rank = color.back_rank();
        let unmoved = |sq: Square, piece: Piece| {
            self.piece_at(sq) == Some((color, piece))
                && self.pieces[sq.index()].is_some_and(|occ| !occ.moved)
        };
        unmoved(Square::at(4, rank), Piece::King)
            && unmoved(Square::at(if king_side { 7 } else { 0 }, rank), Piece::Rook)
    }

    /// Convert the board position to FEN notation.
    ///
    /// The clocks are always written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::at(file, rank)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling: String = CASTLING
            .iter()
            .filter(|(_, king_side, color)| self.has_castling_right(*color, *king_side))
            .map(|(letter, _, _)| *letter)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }
}
