//! Legal move generation.
//!
//! Candidates are produced by walking each piece's rays and are filtered
//! one by one through [`Board::is_legal`]. Cheap structural tests run first;
//! attack queries only happen for king moves, castling and en passant.

use super::geometry::{direction, distance, is_between};
use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// All legal moves for `color`, in source-square order.
    ///
    /// For the side not to move, check and en-passant state (which belong to
    /// the side to move) are ignored; the result is that side's mobility.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for from in self.squares_of(color) {
            let Some(occ) = self.pieces[from.index()] else {
                continue;
            };
            let pin = self.pins[from.index()];
            for ray in occ.piece.rays() {
                let dir = if occ.piece == Piece::Pawn && color == Color::Black {
                    ray.dir.mirrored()
                } else {
                    ray.dir
                };
                if let Some(pin) = pin {
                    if dir != pin && dir != pin.reverse() {
                        continue;
                    }
                }
                let step = dir.delta();
                let mut to = from;
                loop {
                    to = to.offset(step);
                    if !to.is_on_board() || distance(from, to) > ray.range {
                        break;
                    }
                    let occupied = self.pieces[to.index()].is_some();
                    if occupied && self.colors[to.index()] == color {
                        break;
                    }
                    if self.is_legal(from, to) {
                        moves.push(Move::new(from, to));
                    }
                    if occupied {
                        break;
                    }
                }
            }
        }
        moves
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        self.legal_moves(self.side_to_move)
    }

    #[must_use]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from(), mv.to())
    }

    /// Full legality test for moving whatever stands on `from` to `to`.
    ///
    /// The moving piece may belong to either side; see [`Board::legal_moves`].
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        if !from.is_on_board() || !to.is_on_board() || from == to {
            return false;
        }
        let Some(occ) = self.pieces[from.index()] else {
            return false;
        };
        let color = self.colors[from.index()];
        let target = self.pieces[to.index()];
        if target.is_some() && self.colors[to.index()] == color {
            return false;
        }

        let dir = direction(from, to);
        let dist = distance(from, to);

        if let Some(pin) = self.pins[from.index()] {
            if dir != pin && dir != pin.reverse() {
                return false;
            }
        }

        if !occ.piece.reaches(color, dir, dist) {
            return false;
        }

        let step = dir.delta();
        let mut cur = from.offset(step);
        while cur != to {
            if self.pieces[cur.index()].is_some() {
                return false;
            }
            cur = cur.offset(step);
        }

        let to_move = color == self.side_to_move;
        let mut en_passant = false;

        if occ.piece == Piece::Pawn {
            let rank_diff = from.rank().abs_diff(to.rank());
            let file_diff = from.file().abs_diff(to.file());
            if rank_diff == 2 {
                if target.is_some() || from.rank() != color.pawn_start_rank() {
                    return false;
                }
            } else if file_diff == 1 {
                if target.is_none() {
                    if !to_move || self.en_passant_target != Some(to) {
                        return false;
                    }
                    en_passant = true;
                }
            } else if target.is_some() {
                return false;
            }
        }

        if occ.piece == Piece::King {
            if from.file().abs_diff(to.file()) == 2 && !self.can_castle(from, to, color) {
                return false;
            }
            return self.square_control(to, color.opponent()) == 0;
        }

        if to_move && self.is_in_check() {
            if self.is_double_check() {
                return false;
            }
            let king = self.king_square(color);
            let checker = self.direct_check.or(self.discovered_check);
            if let Some(checker) = checker {
                let captures_checker =
                    en_passant && Self::en_passant_victim(to, color) == checker;
                if !captures_checker && !is_between(king, to, checker) {
                    return false;
                }
            }
        }

        if en_passant && self.en_passant_exposes_king(from, to, color) {
            return false;
        }

        true
    }

    /// Square of the pawn removed by an en-passant capture landing on `to`.
    #[inline]
    pub(crate) fn en_passant_victim(to: Square, capturer: Color) -> Square {
        to.offset(capturer.pawn_step().wrapping_neg())
    }

    fn can_castle(&self, from: Square, to: Square, color: Color) -> bool {
        let Some(king) = self.pieces[from.index()] else {
            return false;
        };
        if king.moved || from != Square::at(4, color.back_rank()) || from.rank() != to.rank() {
            return false;
        }
        let in_check = if color == self.side_to_move {
            self.is_in_check()
        } else {
            self.king_attacked(color)
        };
        if in_check {
            return false;
        }

        let rook_file = if to.file() > from.file() { 7 } else { 0 };
        let rook_sq = Square::at(rook_file, from.rank());
        match self.pieces[rook_sq.index()] {
            Some(rook)
                if rook.piece == Piece::Rook
                    && !rook.moved
                    && self.colors[rook_sq.index()] == color => {}
            _ => return false,
        }

        let (lo, hi) = if rook_sq < from {
            (rook_sq, from)
        } else {
            (from, rook_sq)
        };
        let mut cur = lo.offset(1);
        while cur != hi {
            if self.pieces[cur.index()].is_some() {
                return false;
            }
            cur = cur.offset(1);
        }

        // the square the king passes over; the landing square is checked by the caller
        let transit = Square(from.0.min(to.0) + 1);
        self.square_control(transit, color.opponent()) == 0
    }

    /// Would this en-passant capture leave the capturer's own king attacked?
    ///
    /// Two pawns leave the same rank at once, which the pin records cannot
    /// express, so the capture is tried on a scratch copy.
    fn en_passant_exposes_king(&self, from: Square, to: Square, color: Color) -> bool {
        let mut probe = self.clone();
        let victim = Self::en_passant_victim(to, color);
        if let Some(occ) = probe.pieces[from.index()] {
            probe.clear(from);
            probe.clear(victim);
            probe.put(to, color, occ);
        }
        probe.king_attacked(color)
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && self.generate_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.generate_moves().is_empty()
    }
}
