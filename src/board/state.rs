use super::geometry::Direction;
use super::{Color, Occupant, Piece, Square, SQUARE_SLOTS};

/// A chess position on a 0x88 board.
///
/// Besides piece placement the board tracks, incrementally, where both
/// kings stand, which pieces are pinned to their own king (and along which
/// line), and which enemy pieces give check to the side to move. A check
/// given by the piece that just moved is the *direct* check; one revealed
/// by moving a blocker off a line is the *discovered* check. Both set at
/// once is a double check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [Option<Occupant>; SQUARE_SLOTS],
    /// Empty squares always record `Color::White`.
    pub(crate) colors: [Color; SQUARE_SLOTS],
    /// Direction from the owner's king towards the pinned piece.
    pub(crate) pins: [Option<Direction>; SQUARE_SLOTS],
    pub(crate) side_to_move: Color,
    pub(crate) kings: [Square; 2],
    pub(crate) direct_check: Option<Square>,
    pub(crate) discovered_check: Option<Square>,
    pub(crate) en_passant_target: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in (0u8..).zip(back_rank) {
            board.put(Square::at(file, 0), Color::White, Occupant::new(piece, false));
            board.put(Square::at(file, 7), Color::Black, Occupant::new(piece, false));
            board.put(
                Square::at(file, 1),
                Color::White,
                Occupant::new(Piece::Pawn, false),
            );
            board.put(
                Square::at(file, 6),
                Color::Black,
                Occupant::new(Piece::Pawn, false),
            );
        }
        board.kings = [Square::at(4, 0), Square::at(4, 7)];
        board.refresh_pins();
        board.refresh_checks(false);
        board
    }

    /// A board with no pieces. Kings and check state must be filled in by
    /// the caller before the board is used.
    pub(crate) fn empty() -> Self {
        Board {
            pieces: [None; SQUARE_SLOTS],
            colors: [Color::White; SQUARE_SLOTS],
            pins: [None; SQUARE_SLOTS],
            side_to_move: Color::White,
            kings: [Square::NONE; 2],
            direct_check: None,
            discovered_check: None,
            en_passant_target: None,
        }
    }

    pub(crate) fn put(&mut self, sq: Square, color: Color, occupant: Occupant) {
        self.pieces[sq.index()] = Some(occupant);
        self.colors[sq.index()] = color;
    }

    pub(crate) fn clear(&mut self, sq: Square) {
        self.pieces[sq.index()] = None;
        self.colors[sq.index()] = Color::White;
        self.pins[sq.index()] = None;
    }

    /// Whose turn it is.
    #[inline]
    #[must_use]
    pub fn active_player(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Square of the piece that gave check with the last move, if any.
    #[inline]
    #[must_use]
    pub fn direct_check(&self) -> Option<Square> {
        self.direct_check
    }

    /// Square of a checking piece uncovered by the last move, if any.
    #[inline]
    #[must_use]
    pub fn discovered_check(&self) -> Option<Square> {
        self.discovered_check
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Is the side to move in check?
    #[inline]
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.direct_check.is_some() || self.discovered_check.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_double_check(&self) -> bool {
        self.direct_check.is_some() && self.discovered_check.is_some()
    }

    #[must_use]
    pub fn occupant(&self, sq: Square) -> Option<Occupant> {
        if sq.is_on_board() {
            self.pieces[sq.index()]
        } else {
            None
        }
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.occupant(sq)
            .map(|occ| (self.colors[sq.index()], occ.piece))
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.occupant(sq).map(|occ| occ.piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.pieces[sq.index()].is_none()
    }

    /// The line a piece is pinned along, measured from its own king.
    #[must_use]
    pub fn pin(&self, sq: Square) -> Option<Direction> {
        if sq.is_on_board() {
            self.pins[sq.index()]
        } else {
            None
        }
    }

    /// Every occupied square of one color, in index order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| {
            self.pieces[sq.index()].is_some() && self.colors[sq.index()] == color
        })
    }

    /// Sets the check slots from a freshly collected checker list.
    ///
    /// Canonical order puts the lower square index in the direct slot;
    /// `swapped` reverses that, which is how unmake restores the exact
    /// pre-move slot assignment.
    pub(crate) fn assign_checks(&mut self, mut checkers: [Option<Square>; 2], swapped: bool) {
        if let [Some(a), Some(b)] = checkers {
            if b < a {
                checkers = [Some(b), Some(a)];
            }
        } else if checkers[0].is_none() {
            checkers = [checkers[1], None];
        }
        if swapped {
            checkers.swap(0, 1);
        }
        self.direct_check = checkers[0];
        self.discovered_check = checkers[1];
    }

    /// Do the current check slots differ from canonical order?
    pub(crate) fn checks_swapped(&self) -> bool {
        match (self.direct_check, self.discovered_check) {
            (None, Some(_)) => true,
            (Some(a), Some(b)) => b < a,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_layout() {
        let board = Board::new();
        assert_eq!(board.active_player(), Color::White);
        assert_eq!(board.king_square(Color::White), Square::at(4, 0));
        assert_eq!(board.king_square(Color::Black), Square::at(4, 7));
        assert_eq!(
            board.piece_at(Square::at(3, 7)),
            Some((Color::Black, Piece::Queen))
        );
        assert_eq!(board.squares_of(Color::White).count(), 16);
        assert_eq!(board.squares_of(Color::Black).count(), 16);
        assert!(!board.is_in_check());
        assert_eq!(board.direct_check(), None);
        assert_eq!(board.discovered_check(), None);
    }

    #[test]
    fn test_empty_squares_are_white() {
        let board = Board::new();
        for rank in 2..6 {
            for file in 0..8 {
                let sq = Square::at(file, rank);
                assert!(board.is_empty(sq));
                assert_eq!(board.colors[sq.index()], Color::White);
            }
        }
    }

    #[test]
    fn test_assign_checks_canonical_and_swapped() {
        let mut board = Board::new();
        let (lo, hi) = (Square::at(1, 1), Square::at(5, 5));
        board.assign_checks([Some(hi), Some(lo)], false);
        assert_eq!(board.direct_check(), Some(lo));
        assert_eq!(board.discovered_check(), Some(hi));
        assert!(!board.checks_swapped());

        board.assign_checks([Some(lo), Some(hi)], true);
        assert_eq!(board.direct_check(), Some(hi));
        assert!(board.checks_swapped());

        board.assign_checks([None, Some(lo)], true);
        assert_eq!(board.direct_check(), None);
        assert_eq!(board.discovered_check(), Some(lo));
        assert!(board.checks_swapped());
    }
}
