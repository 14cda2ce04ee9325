//! Move ordering utilities for search.

use super::constants::piece_value;
use crate::board::{Board, Move};

/// Sort captures first, most valuable victim first and, among equal
/// victims, least valuable attacker first. Quiet moves keep their
/// generation order after the captures.
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|&mv| mvv_lva_key(board, mv));
}

fn mvv_lva_key(board: &Board, mv: Move) -> (bool, i32, i32) {
    match (board.piece_on(mv.to()), board.piece_on(mv.from())) {
        (Some(victim), Some(attacker)) => (false, -piece_value(victim), piece_value(attacker)),
        _ => (true, 0, 0),
    }
}
