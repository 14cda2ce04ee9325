//! Search and evaluation constants.

use crate::board::Piece;

// ============================================================================
// SCORES
// ============================================================================

/// Larger than any reachable score; the root searches in `(-INFINITY, INFINITY)`.
pub const INFINITY: i32 = 1_000_000;

/// Score for being checkmated at the root. A mate found `ply` plies down is
/// worth `-(MATE - ply)` to the mated side, so shorter mates score higher.
pub const MATE: i32 = 100_000;

/// Quiescence gives up when stand-pat trails alpha by more than this.
pub const DELTA_MARGIN: i32 = 20;

// ============================================================================
// MATERIAL
// ============================================================================

/// Material value per piece, indexed in `Piece::ALL` order.
pub const PIECE_VALUES: [i32; 6] = [10, 30, 30, 50, 90, 0];

#[inline]
#[must_use]
pub const fn piece_value(piece: Piece) -> i32 {
    PIECE_VALUES[piece.code() as usize - 1]
}

// ============================================================================
// DEFAULTS
// ============================================================================

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u32 = 4;

/// Environment variable overriding the search depth.
pub const DEPTH_ENV: &str = "CHESS_AI_DEPTH";

/// Environment variable overriding the worker count.
pub const THREADS_ENV: &str = "CHESS_AI_THREADS";
