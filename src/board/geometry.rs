//! Precomputed square-to-square geometry.
//!
//! Every pair of on-board squares is separated by a compass angle (whole
//! degrees, 0 = east, 90 = north) and a Chebyshev distance. Both are looked
//! up by the signed 0x88 index difference, so legality and attack checks
//! never need trigonometry after start-up. The inverse table maps an angle
//! back to the smallest 0x88 step that travels along it.

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Square;

/// A compass angle in whole degrees, 0-359.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction(pub u16);

impl Direction {
    pub const EAST: Direction = Direction(0);
    pub const NORTH_EAST: Direction = Direction(45);
    pub const NORTH: Direction = Direction(90);
    pub const NORTH_WEST: Direction = Direction(135);
    pub const WEST: Direction = Direction(180);
    pub const SOUTH_WEST: Direction = Direction(225);
    pub const SOUTH: Direction = Direction(270);
    pub const SOUTH_EAST: Direction = Direction(315);

    /// The eight queen directions.
    pub const COMPASS: [Direction; 8] = [
        Direction::EAST,
        Direction::NORTH_EAST,
        Direction::NORTH,
        Direction::NORTH_WEST,
        Direction::WEST,
        Direction::SOUTH_WEST,
        Direction::SOUTH,
        Direction::SOUTH_EAST,
    ];

    /// The eight knight-jump angles.
    pub const KNIGHT: [Direction; 8] = [
        Direction(27),
        Direction(63),
        Direction(117),
        Direction(153),
        Direction(207),
        Direction(243),
        Direction(297),
        Direction(333),
    ];

    /// The opposite sense along the same line.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Direction {
        Direction((self.0 + 180) % 360)
    }

    /// Reflect across the east-west axis (maps White's pawn rays to Black's).
    #[inline]
    #[must_use]
    pub const fn mirrored(self) -> Direction {
        if self.0 == 0 {
            self
        } else {
            Direction(360 - self.0)
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_compass(self) -> bool {
        self.0 % 45 == 0
    }

    /// Smallest 0x88 step along this angle, or 0 if no square pair lies on it.
    #[inline]
    #[must_use]
    pub fn delta(self) -> i8 {
        GEOMETRY.delta.get(self.0 as usize).copied().unwrap_or(0)
    }
}

/// One movement line of a piece: an angle and how far along it the piece may go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ray {
    pub dir: Direction,
    pub range: u8,
}

impl Ray {
    #[must_use]
    pub const fn new(degrees: u16, range: u8) -> Self {
        Ray {
            dir: Direction(degrees),
            range,
        }
    }
}

/// Offset keeping `to - from` non-negative for any pair of on-board squares.
const DIFF_OFFSET: i16 = 0x77;
const DIFF_SLOTS: usize = 2 * DIFF_OFFSET as usize + 1;

pub(crate) struct Geometry {
    direction: [Direction; DIFF_SLOTS],
    distance: [u8; DIFF_SLOTS],
    delta: [i8; 360],
}

pub(crate) static GEOMETRY: Lazy<Geometry> = Lazy::new(Geometry::build);

#[inline]
fn diff_index(from: Square, to: Square) -> usize {
    (DIFF_OFFSET + i16::from(to.0) - i16::from(from.0)) as usize
}

fn gcd(a: i16, b: i16) -> i16 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}

fn angle(df: i16, dr: i16) -> Direction {
    if df == 0 && dr == 0 {
        return Direction(0);
    }
    let degrees = f64::from(dr).atan2(f64::from(df)).to_degrees().round() as i32;
    Direction(degrees.rem_euclid(360) as u16)
}

impl Geometry {
    fn build() -> Self {
        let mut geometry = Geometry {
            direction: [Direction(0); DIFF_SLOTS],
            distance: [0; DIFF_SLOTS],
            delta: [0; 360],
        };

        // Differences towards the four corners cover every signed offset.
        let corners = [
            Square::at(0, 0),
            Square::at(0, 7),
            Square::at(7, 0),
            Square::at(7, 7),
        ];
        for sq in Square::all() {
            for corner in corners {
                let df = i16::from(corner.file()) - i16::from(sq.file());
                let dr = i16::from(corner.rank()) - i16::from(sq.rank());
                let dir = angle(df, dr);
                let idx = diff_index(sq, corner);
                geometry.direction[idx] = dir;
                geometry.distance[idx] = df.abs().max(dr.abs()) as u8;
                if gcd(df, dr) == 1 {
                    geometry.delta[dir.0 as usize] = (dr * 16 + df) as i8;
                }
            }
        }
        geometry
    }
}

/// Angle from `from` towards `to`. Both squares must be on the board.
#[inline]
#[must_use]
pub fn direction(from: Square, to: Square) -> Direction {
    GEOMETRY.direction[diff_index(from, to)]
}

/// Chebyshev (king-move) distance. Both squares must be on the board.
#[inline]
#[must_use]
pub fn distance(from: Square, to: Square) -> u8 {
    GEOMETRY.distance[diff_index(from, to)]
}

/// True when `middle` is an endpoint or lies strictly on the segment between them.
#[must_use]
pub fn is_between(end: Square, middle: Square, other_end: Square) -> bool {
    end == middle || other_end == middle || direction(end, middle) == direction(middle, other_end)
}
