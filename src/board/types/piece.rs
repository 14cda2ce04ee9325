//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::geometry::{Direction, Ray};

/// Chess piece kinds. An empty square is `None` in the board's piece array.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

const PAWN_RAYS: [Ray; 3] = [Ray::new(45, 1), Ray::new(90, 2), Ray::new(135, 1)];

const KNIGHT_RAYS: [Ray; 8] = [
    Ray::new(27, 2),
    Ray::new(63, 2),
    Ray::new(117, 2),
    Ray::new(153, 2),
    Ray::new(207, 2),
    Ray::new(243, 2),
    Ray::new(297, 2),
    Ray::new(333, 2),
];

const BISHOP_RAYS: [Ray; 4] = [
    Ray::new(45, 7),
    Ray::new(135, 7),
    Ray::new(225, 7),
    Ray::new(315, 7),
];

const ROOK_RAYS: [Ray; 4] = [
    Ray::new(0, 7),
    Ray::new(90, 7),
    Ray::new(180, 7),
    Ray::new(270, 7),
];

const QUEEN_RAYS: [Ray; 8] = [
    Ray::new(0, 7),
    Ray::new(45, 7),
    Ray::new(90, 7),
    Ray::new(135, 7),
    Ray::new(180, 7),
    Ray::new(225, 7),
    Ray::new(270, 7),
    Ray::new(315, 7),
];

// The two-square sideways entries are castling steps, never attacks.
const KING_RAYS: [Ray; 8] = [
    Ray::new(0, 2),
    Ray::new(45, 1),
    Ray::new(90, 1),
    Ray::new(135, 1),
    Ray::new(180, 2),
    Ray::new(225, 1),
    Ray::new(270, 1),
    Ray::new(315, 1),
];

impl Piece {
    /// All piece kinds in code order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Numeric code used in move metadata (1..=6, 0 is reserved for "none").
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Piece::Pawn => 1,
            Piece::Knight => 2,
            Piece::Bishop => 3,
            Piece::Rook => 4,
            Piece::Queen => 5,
            Piece::King => 6,
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Piece> {
        match code {
            1 => Some(Piece::Pawn),
            2 => Some(Piece::Knight),
            3 => Some(Piece::Bishop),
            4 => Some(Piece::Rook),
            5 => Some(Piece::Queen),
            6 => Some(Piece::King),
            _ => None,
        }
    }

    /// Parse a piece from a FEN character, either case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
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

    /// Unicode chess glyph for this piece.
    #[must_use]
    pub const fn glyph(self, color: Color) -> char {
        match (color, self) {
            (Color::White, Piece::Pawn) => '\u{2659}',
            (Color::White, Piece::Knight) => '\u{2658}',
            (Color::White, Piece::Bishop) => '\u{2657}',
            (Color::White, Piece::Rook) => '\u{2656}',
            (Color::White, Piece::Queen) => '\u{2655}',
            (Color::White, Piece::King) => '\u{2654}',
            (Color::Black, Piece::Pawn) => '\u{265F}',
            (Color::Black, Piece::Knight) => '\u{265E}',
            (Color::Black, Piece::Bishop) => '\u{265D}',
            (Color::Black, Piece::Rook) => '\u{265C}',
            (Color::Black, Piece::Queen) => '\u{265B}',
            (Color::Black, Piece::King) => '\u{265A}',
        }
    }

    /// Movement rays for this kind, as seen by White.
    ///
    /// Black pawns use the mirrored rays; every other kind is symmetric.
    #[inline]
    #[must_use]
    pub const fn rays(self) -> &'static [Ray] {
        match self {
            Piece::Pawn => &PAWN_RAYS,
            Piece::Knight => &KNIGHT_RAYS,
            Piece::Bishop => &BISHOP_RAYS,
            Piece::Rook => &ROOK_RAYS,
            Piece::Queen => &QUEEN_RAYS,
            Piece::King => &KING_RAYS,
        }
    }

    /// Can a `color` piece of this kind move `dist` squares along `dir`?
    ///
    /// Only the direction/distance shape is checked; occupancy, pins and
    /// pawn capture rules live in the legality checker.
    #[must_use]
    pub fn reaches(self, color: Color, dir: Direction, dist: u8) -> bool {
        if dist == 0 {
            return false;
        }
        let dir = if self == Piece::Pawn && color == Color::Black {
            dir.mirrored()
        } else {
            dir
        };
        self.rays()
            .iter()
            .any(|ray| ray.dir == dir && dist <= ray.range)
    }

    /// Does a `color` piece of this kind attack the square `dist` away along `dir`?
    ///
    /// Differs from [`Piece::reaches`] for pawns (forward pushes never
    /// attack) and kings (castling steps never attack).
    #[must_use]
    pub fn attacks(self, color: Color, dir: Direction, dist: u8) -> bool {
        match self {
            Piece::Pawn => {
                let dir = if color == Color::Black {
                    dir.mirrored()
                } else {
                    dir
                };
                dist == 1 && (dir == Direction::NORTH_EAST || dir == Direction::NORTH_WEST)
            }
            Piece::King => dist == 1 && dir.is_compass(),
            _ => self.reaches(color, dir, dist),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Pawn => "pawn",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::King => "king",
        };
        f.write_str(name)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// Also the color recorded for empty squares.
    #[default]
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Square-index delta of one pawn step forward.
    #[inline]
    #[must_use]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::White => 16,
            Color::Black => -16,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on the board together with its "has moved" bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Occupant {
    pub piece: Piece,
    pub moved: bool,
}

impl Occupant {
    #[inline]
    #[must_use]
    pub const fn new(piece: Piece, moved: bool) -> Self {
        Occupant { piece, moved }
    }

    /// 4-bit metadata form: piece code in bits 0-2, moved flag in bit 3.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.piece.code() | if self.moved { 0x08 } else { 0 }
    }

    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Occupant> {
        match Piece::from_code(bits & 0x07) {
            Some(piece) => Some(Occupant {
                piece,
                moved: bits & 0x08 != 0,
            }),
            None => None,
        }
    }
}
