//! Core chess types.
//!
//! This module contains the fundamental types used throughout the chess engine:
//! - `Piece`, `Color` and `Occupant` - piece kinds, colors, and placed pieces
//! - `Square` - 0x88 board square index (u8)
//! - `Move` and `MoveMeta` - move and reversible move-metadata encodings

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveMeta};
pub use piece::{Color, Occupant, Piece};
pub use square::{Square, SQUARE_SLOTS};
