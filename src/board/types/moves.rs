//! Move and move-metadata encodings.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Occupant;
use super::square::Square;
use crate::board::error::MoveParseError;

/// Compact 16-bit move.
///
/// Encoding:
/// - bits 0-7:  source square (0x88)
/// - bits 8-15: destination square (0x88)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move(from.0 as u16 | ((to.0 as u16) << 8))
    }

    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Move(raw)
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square((self.0 & 0xff) as u8)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square((self.0 >> 8) as u8)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from(), self.to())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse `<file><rank>-<file><rank>`, e.g. `e2-e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 5 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        if s.as_bytes()[2] != b'-' {
            return Err(MoveParseError::MissingSeparator {
                notation: s.to_string(),
            });
        }
        let square = |part: &str| {
            part.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        Ok(Move::new(square(&s[0..2])?, square(&s[3..5])?))
    }
}

const CAPTURED_SHIFT: u32 = 16;
const CAPTURED_MASK: u32 = 0x0f;
const MOVER_MOVED_BIT: u32 = 1 << 20;
const PROMOTION_BIT: u32 = 1 << 21;
const EN_PASSANT_BIT: u32 = 1 << 22;
const CHECK_SWAP_BIT: u32 = 1 << 23;
const PREV_EP_SHIFT: u32 = 24;

/// A move plus everything needed to undo it exactly.
///
/// Encoding:
/// - bits 0-15:  the move
/// - bits 16-19: captured piece (code in 16-18, its "has moved" flag in 19)
/// - bit 20:     the moving piece had already moved
/// - bit 21:     the move promoted a pawn
/// - bit 22:     the capture was en passant
/// - bit 23:     pre-move check slots were not in ascending-square order
/// - bits 24-31: previous en-passant target (0x80 = none)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveMeta(u32);

impl MoveMeta {
    #[allow(clippy::fn_params_excessive_bools)]
    #[must_use]
    pub(crate) fn encode(
        mv: Move,
        captured: Option<Occupant>,
        mover_moved: bool,
        promotion: bool,
        en_passant: bool,
        check_swap: bool,
        previous_en_passant: Option<Square>,
    ) -> Self {
        let mut bits = u32::from(mv.raw());
        bits |= u32::from(captured.map_or(0, Occupant::bits)) << CAPTURED_SHIFT;
        if mover_moved {
            bits |= MOVER_MOVED_BIT;
        }
        if promotion {
            bits |= PROMOTION_BIT;
        }
        if en_passant {
            bits |= EN_PASSANT_BIT;
        }
        if check_swap {
            bits |= CHECK_SWAP_BIT;
        }
        let ep = previous_en_passant.unwrap_or(Square::NONE);
        bits |= u32::from(ep.0) << PREV_EP_SHIFT;
        MoveMeta(bits)
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn mv(self) -> Move {
        Move::from_raw((self.0 & 0xffff) as u16)
    }

    /// The captured piece and its "has moved" flag, if any.
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Occupant> {
        Occupant::from_bits(((self.0 >> CAPTURED_SHIFT) & CAPTURED_MASK) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn mover_had_moved(self) -> bool {
        self.0 & MOVER_MOVED_BIT != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.0 & PROMOTION_BIT != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.0 & EN_PASSANT_BIT != 0
    }

    #[inline]
    #[must_use]
    pub(crate) const fn check_swap(self) -> bool {
        self.0 & CHECK_SWAP_BIT != 0
    }

    #[inline]
    #[must_use]
    pub const fn previous_en_passant(self) -> Option<Square> {
        let sq = Square((self.0 >> PREV_EP_SHIFT) as u8);
        if sq.is_on_board() {
            Some(sq)
        } else {
            None
        }
    }
}

impl fmt::Debug for MoveMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveMeta")
            .field("mv", &self.mv())
            .field("captured", &self.captured())
            .field("mover_had_moved", &self.mover_had_moved())
            .field("promotion", &self.is_promotion())
            .field("en_passant", &self.is_en_passant())
            .field("previous_en_passant", &self.previous_en_passant())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn test_move_layout() {
        let mv = Move::new(Square::at(4, 1), Square::at(4, 3));
        assert_eq!(mv.raw(), 0x3414);
        assert_eq!(mv.from(), Square::at(4, 1));
        assert_eq!(mv.to(), Square::at(4, 3));
        assert_eq!(mv.to_string(), "e2-e4");
    }

    #[test]
    fn test_parse_move() {
        let mv: Move = "b2-g7".parse().unwrap();
        assert_eq!(mv.from(), Square::at(1, 1));
        assert_eq!(mv.to(), Square::at(6, 6));
    }

    #[test]
    fn test_parse_move_rejects_bad_text() {
        assert_eq!(
            "e2e4".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 4 })
        );
        assert!(matches!(
            "e2-e44".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 6 })
        ));
        assert!(matches!(
            "e2_e4".parse::<Move>(),
            Err(MoveParseError::MissingSeparator { .. })
        ));
        assert!(matches!(
            "e9-e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "z2-e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_meta_fields() {
        let mv = Move::new(Square::at(3, 0), Square::at(3, 6));
        let meta = MoveMeta::encode(
            mv,
            Some(Occupant::new(Piece::Knight, true)),
            true,
            false,
            false,
            true,
            Some(Square::at(2, 5)),
        );
        assert_eq!(meta.mv(), mv);
        assert_eq!(meta.captured(), Some(Occupant::new(Piece::Knight, true)));
        assert!(meta.mover_had_moved());
        assert!(!meta.is_promotion());
        assert!(!meta.is_en_passant());
        assert!(meta.check_swap());
        assert_eq!(meta.previous_en_passant(), Some(Square::at(2, 5)));
        // captured code sits in bits 16-19, the mover flag in bit 20
        assert_eq!((meta.raw() >> 16) & 0x0f, 0x0a);
        assert_ne!(meta.raw() & (1 << 20), 0);
    }

    #[test]
    fn test_meta_quiet_move() {
        let mv = Move::new(Square::at(6, 0), Square::at(5, 2));
        let meta = MoveMeta::encode(mv, None, false, false, false, false, None);
        assert_eq!(meta.captured(), None);
        assert!(!meta.mover_had_moved());
        assert_eq!(meta.previous_en_passant(), None);
    }
}
