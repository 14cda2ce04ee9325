//! Static evaluation: material plus a mobility term.

use super::constants::piece_value;
use crate::board::{Board, Color, Piece};

/// Score the position from the side to move's point of view.
///
/// Material uses [`super::constants::PIECE_VALUES`]. Mobility is each side's
/// legal move count, less one for every move landing on a square an enemy
/// rook or queen covers.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let mut white_score = 0;
    for color in Color::BOTH {
        let material: i32 = board
            .squares_of(color)
            .filter_map(|sq| board.piece_on(sq))
            .map(piece_value)
            .sum();
        white_score += color.sign() * (material + mobility(board, color));
    }
    board.active_player().sign() * white_score
}

fn mobility(board: &Board, color: Color) -> i32 {
    let heavy = |piece: Piece| piece >= Piece::Rook && piece != Piece::King;
    board
        .legal_moves(color)
        .into_iter()
        .map(|mv| {
            if board.square_control_by(mv.to(), color.opponent(), heavy) > 0 {
                0
            } else {
                1
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_score_flips_with_side_to_move() {
        let white = Board::from_fen("4k3/8/8/8/8/8/8/QN2K3 w - - 0 1");
        let black = Board::from_fen("4k3/8/8/8/8/8/8/QN2K3 b - - 0 1");
        assert!(evaluate(&white) > 0);
        assert_eq!(evaluate(&white), -evaluate(&black));
    }

    #[test]
    fn test_moves_into_heavy_cover_do_not_count() {
        // the knight may go to d2, but the d8 rook covers it
        let board = Board::from_fen("3rk3/8/8/8/8/8/8/1N2K3 w - - 0 1");
        assert_eq!(board.legal_moves(Color::White).len(), 6);
        assert_eq!(mobility(&board, Color::White), 5);
    }
}
