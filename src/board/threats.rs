//! Attack counting plus the ray primitive behind pin and check tracking.

use super::geometry::{distance, Direction};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Number of `attacker` pieces that could move to `sq`, ignoring pins.
    ///
    /// The defending king never blocks a ray, so a square behind the king
    /// on a checking line counts as attacked.
    #[must_use]
    pub fn square_control(&self, sq: Square, attacker: Color) -> usize {
        self.square_control_by(sq, attacker, |_| true)
    }

    /// Like [`Board::square_control`], restricted to piece kinds accepted by `filter`.
    pub fn square_control_by(
        &self,
        sq: Square,
        attacker: Color,
        mut filter: impl FnMut(Piece) -> bool,
    ) -> usize {
        let mut controllers = 0;
        for piece in Piece::ALL {
            if !filter(piece) {
                continue;
            }
            for ray in piece.rays() {
                let dir = if piece == Piece::Pawn && attacker == Color::Black {
                    ray.dir.mirrored()
                } else {
                    ray.dir
                };
                // walk from the target back towards where an attacker would stand
                let step = dir.delta().wrapping_neg();
                let mut cur = sq;
                loop {
                    cur = cur.offset(step);
                    if !cur.is_on_board() {
                        break;
                    }
                    let dist = distance(cur, sq);
                    if dist > ray.range {
                        break;
                    }
                    let Some(occ) = self.pieces[cur.index()] else {
                        continue;
                    };
                    let color = self.colors[cur.index()];
                    if occ.piece == Piece::King && color != attacker {
                        continue;
                    }
                    if color == attacker && occ.piece == piece && piece.attacks(color, dir, dist)
                    {
                        controllers += 1;
                    }
                    break;
                }
            }
        }
        controllers
    }

    /// Is `color`'s king currently attacked?
    #[must_use]
    pub fn king_attacked(&self, color: Color) -> bool {
        self.square_control(self.king_square(color), color.opponent()) > 0
    }

    /// Re-derive the pin and check facts along one ray leaving a king.
    ///
    /// The first piece met decides: an enemy piece that attacks back along
    /// the ray is returned as a checker; a friendly piece followed by such
    /// an attacker is marked pinned along `dir`. Every other friendly piece
    /// on the ray loses its pin record.
    pub(crate) fn update_pin_ray(&mut self, king: Square, dir: Direction) -> Option<Square> {
        if self.piece_on(king) != Some(Piece::King) {
            return None;
        }
        let step = dir.delta();
        if step == 0 {
            return None;
        }
        let king_color = self.colors[king.index()];
        let mut candidate: Option<Square> = None;
        let mut pinned: Option<Square> = None;
        let mut checker: Option<Square> = None;
        let mut settled = false;
        let mut cur = king;
        loop {
            cur = cur.offset(step);
            if !cur.is_on_board() {
                break;
            }
            let Some(occ) = self.pieces[cur.index()] else {
                continue;
            };
            let color = self.colors[cur.index()];
            if color == king_color {
                self.pins[cur.index()] = None;
            }
            if settled {
                continue;
            }
            if color == king_color {
                if candidate.is_some() {
                    settled = true;
                } else {
                    candidate = Some(cur);
                }
                continue;
            }
            settled = true;
            if occ.piece.attacks(color, dir.reverse(), distance(king, cur)) {
                match candidate {
                    Some(sq) => pinned = Some(sq),
                    None => checker = Some(cur),
                }
            }
        }
        if let Some(sq) = pinned {
            self.pins[sq.index()] = Some(dir);
        }
        checker
    }

    /// Rebuild every pin from scratch by scanning all lines out of both kings.
    pub(crate) fn refresh_pins(&mut self) {
        self.pins = [None; super::SQUARE_SLOTS];
        for color in Color::BOTH {
            let king = self.king_square(color);
            for dir in Direction::COMPASS {
                self.update_pin_ray(king, dir);
            }
        }
    }

    /// Rebuild the check slots for the side to move from a full scan.
    pub(crate) fn refresh_checks(&mut self, swapped: bool) {
        let king = self.king_square(self.side_to_move);
        let mut checkers = [None; 2];
        let mut found = 0;
        for dir in Direction::COMPASS.into_iter().chain(Direction::KNIGHT) {
            if let Some(sq) = self.update_pin_ray(king, dir) {
                if found < 2 {
                    checkers[found] = Some(sq);
                }
                found += 1;
            }
        }
        self.assign_checks(checkers, swapped);
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, Direction, Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_position_control() {
        let board = Board::new();
        // f3 is covered by the g1 knight and the e2 and g2 pawns
        assert_eq!(board.square_control(sq("f3"), Color::White), 3);
        // e4 is covered by nothing yet
        assert_eq!(board.square_control(sq("e4"), Color::White), 0);
        assert_eq!(board.square_control(sq("e4"), Color::Black), 0);
        // d2 is defended by the bishop, knight, queen and king
        assert_eq!(board.square_control(sq("d2"), Color::White), 4);
        assert_eq!(board.square_control(sq("f6"), Color::Black), 3);
    }

    #[test]
    fn test_pawn_push_does_not_control() {
        let board = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert_eq!(board.square_control(sq("e3"), Color::White), 0);
        assert_eq!(board.square_control(sq("d3"), Color::White), 1);
        assert_eq!(board.square_control(sq("f3"), Color::White), 1);
    }

    #[test]
    fn test_defending_king_is_transparent() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        // the rook's line runs through the white king onto f1
        assert_eq!(board.square_control(sq("f1"), Color::Black), 1);
        assert!(board.king_attacked(Color::White));
    }

    #[test]
    fn test_attacking_king_counts_adjacent_only() {
        let board = Board::from_fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1");
        assert_eq!(board.square_control(sq("e4"), Color::Black), 1);
        assert_eq!(board.square_control(sq("e3"), Color::Black), 0);
    }

    #[test]
    fn test_filtered_control() {
        let board = Board::from_fen("3qk3/8/8/8/8/8/8/3NK3 w - - 0 1");
        let heavy = |p: Piece| p >= Piece::Rook && p != Piece::King;
        assert_eq!(board.square_control_by(sq("d4"), Color::Black, heavy), 1);
        assert_eq!(board.square_control_by(sq("d4"), Color::White, heavy), 0);
    }

    #[test]
    fn test_pin_detected_on_rank() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/K1N4r w - - 0 1");
        assert_eq!(board.pin(sq("c1")), Some(Direction::EAST));
        assert!(!board.is_in_check());
    }

    #[test]
    fn test_two_blockers_mean_no_pin() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/K1NB3r w - - 0 1");
        assert_eq!(board.pin(sq("c1")), None);
        assert_eq!(board.pin(sq("d1")), None);
    }

    #[test]
    fn test_black_pawn_gives_check() {
        let board = Board::from_fen("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1");
        assert_eq!(board.direct_check(), Some(sq("d2")));
    }

    #[test]
    fn test_pawn_in_front_is_no_check() {
        let board = Board::from_fen("4k3/8/8/8/8/8/4p3/4K3 w - - 0 1");
        assert!(!board.is_in_check());
    }
}
