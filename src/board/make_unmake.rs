//! Reversible move application.
//!
//! After a non-king move only the lines from each king through the touched
//! squares can change, so pins and checks are patched ray by ray. King
//! moves (castling included) rebuild both from scratch.

use super::error::PlayError;
use super::geometry::direction;
use super::{Board, Color, Move, MoveMeta, Occupant, Piece, Square};

impl Board {
    /// Everything [`Board::unmake_move`] will need to reverse `mv`.
    ///
    /// Must be called on the position before the move is made.
    #[must_use]
    pub fn move_metadata(&self, mv: Move) -> MoveMeta {
        let (from, to) = (mv.from(), mv.to());
        let mover = self.pieces[from.index()];
        let color = self.colors[from.index()];
        let is_pawn = mover.is_some_and(|occ| occ.piece == Piece::Pawn);

        let en_passant = is_pawn
            && from.file() != to.file()
            && self.pieces[to.index()].is_none()
            && self.en_passant_target == Some(to);
        let captured = if en_passant {
            self.pieces[Self::en_passant_victim(to, color).index()]
        } else {
            self.pieces[to.index()]
        };
        let promotion = is_pawn && to.rank() == color.pawn_promotion_rank();

        MoveMeta::encode(
            mv,
            captured,
            mover.is_some_and(|occ| occ.moved),
            promotion,
            en_passant,
            self.checks_swapped(),
            self.en_passant_target,
        )
    }

    /// Apply a legal move in place and return the data needed to undo it.
    ///
    /// # Panics
    ///
    /// Panics if the source square is empty.
    pub fn make_move(&mut self, mv: Move) -> MoveMeta {
        let meta = self.move_metadata(mv);
        let (from, to) = (mv.from(), mv.to());
        let occ = self.pieces[from.index()].expect("make_move: source square is empty");
        let color = self.colors[from.index()];

        let victim = meta
            .is_en_passant()
            .then(|| Self::en_passant_victim(to, color));
        if let Some(victim) = victim {
            self.clear(victim);
        }

        let piece = if meta.is_promotion() {
            Piece::Queen
        } else {
            occ.piece
        };
        self.clear(from);
        self.clear(to);
        self.put(to, color, Occupant::new(piece, true));

        self.en_passant_target = (occ.piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2)
            .then(|| Square((from.0 + to.0) / 2));
        self.side_to_move = color.opponent();

        if occ.piece == Piece::King {
            self.kings[color.index()] = to;
            if from.file().abs_diff(to.file()) == 2 {
                let (corner, beside) = Self::castle_rook_squares(from, to);
                self.clear(corner);
                self.put(beside, color, Occupant::new(Piece::Rook, true));
            }
            self.refresh_pins();
            self.refresh_checks(false);
            return meta;
        }

        self.update_rays(color, [Some(to), Some(from), victim]);
        let king = self.king_square(color.opponent());
        let direct = self.update_pin_ray(king, direction(king, to));
        let mut discovered = None;
        for sq in [Some(from), victim].into_iter().flatten() {
            if direction(king, sq) == direction(king, to) {
                continue;
            }
            let hit = self.update_pin_ray(king, direction(king, sq));
            discovered = discovered.or(hit);
        }
        self.direct_check = direct;
        self.discovered_check = discovered;
        meta
    }

    /// Reverse a move made by [`Board::make_move`]. Moves must be undone in
    /// the reverse order they were made.
    ///
    /// # Panics
    ///
    /// Panics if the destination square of the recorded move is empty.
    pub fn unmake_move(&mut self, meta: MoveMeta) {
        let mv = meta.mv();
        let (from, to) = (mv.from(), mv.to());
        let occ = self.pieces[to.index()].expect("unmake_move: destination square is empty");
        let color = self.colors[to.index()];

        let piece = if meta.is_promotion() {
            Piece::Pawn
        } else {
            occ.piece
        };
        self.clear(to);
        self.put(from, color, Occupant::new(piece, meta.mover_had_moved()));

        let victim = meta
            .is_en_passant()
            .then(|| Self::en_passant_victim(to, color));
        if let Some(captured) = meta.captured() {
            self.put(victim.unwrap_or(to), color.opponent(), captured);
        }

        self.en_passant_target = meta.previous_en_passant();
        self.side_to_move = color;

        if piece == Piece::King {
            self.kings[color.index()] = from;
            if from.file().abs_diff(to.file()) == 2 {
                let (corner, beside) = Self::castle_rook_squares(from, to);
                self.clear(beside);
                self.put(corner, color, Occupant::new(Piece::Rook, false));
            }
            self.refresh_pins();
            self.refresh_checks(meta.check_swap());
            return;
        }

        self.update_rays(color.opponent(), [Some(to), Some(from), victim]);
        let king = self.king_square(color);
        let mut checkers = [None; 2];
        let mut found = 0;
        for sq in [Some(to), Some(from), victim].into_iter().flatten() {
            let Some(checker) = self.update_pin_ray(king, direction(king, sq)) else {
                continue;
            };
            if found < 2 && !checkers.contains(&Some(checker)) {
                checkers[found] = Some(checker);
                found += 1;
            }
        }
        self.assign_checks(checkers, meta.check_swap());
    }

    /// Re-walk the lines from `color`'s king through each touched square.
    fn update_rays(&mut self, color: Color, touched: [Option<Square>; 3]) {
        let king = self.king_square(color);
        for sq in touched.into_iter().flatten() {
            if sq != king {
                self.update_pin_ray(king, direction(king, sq));
            }
        }
    }

    /// Corner square of the castling rook and the square it lands on.
    fn castle_rook_squares(from: Square, to: Square) -> (Square, Square) {
        let corner_file = if to.file() > from.file() { 7 } else { 0 };
        (
            Square::at(corner_file, from.rank()),
            Square((from.0 + to.0) / 2),
        )
    }

    /// Parse `e2-e4` style text, check it, and play it.
    ///
    /// The board is left untouched on any error.
    pub fn play(&mut self, notation: &str) -> Result<MoveMeta, PlayError> {
        let mv: Move = notation.trim().parse()?;
        if self.color_on(mv.from()) != Some(self.side_to_move) {
            return Err(PlayError::WrongSide {
                notation: notation.to_string(),
            });
        }
        if !self.is_legal_move(mv) {
            return Err(PlayError::IllegalMove {
                notation: notation.to_string(),
            });
        }
        Ok(self.make_move(mv))
    }
}
