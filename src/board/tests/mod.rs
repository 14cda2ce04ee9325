//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts against known positions
//! - `checks.rs` - Check, double check and pin handling
//! - `castling.rs` - Each condition that forbids castling
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `proptest.rs` - Property-based tests
//! - `search.rs` - Quiescence, negamax and root search behaviour

mod make_unmake;
mod perft;

use crate::board::{Board, Move, Square};

pub(crate) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub(crate) fn mv(s: &str) -> Move {
    s.parse().expect("valid move")
}

/// Rebuild pins and checks from scratch on a copy.
pub(crate) fn refreshed(board: &Board) -> Board {
    let mut fresh = board.clone();
    fresh.refresh_pins();
    fresh.refresh_checks(false);
    fresh
}

/// Checking squares of the side to move, in ascending order.
pub(crate) fn checkers(board: &Board) -> Vec<Square> {
    let mut found: Vec<Square> = [board.direct_check(), board.discovered_check()]
        .into_iter()
        .flatten()
        .collect();
    found.sort();
    found
}
