//! Chess board representation and game logic.
//!
//! Uses a 0x88 mailbox with a precomputed direction/distance table. Pins
//! and checks are tracked incrementally by make/unmake. Supports castling,
//! en passant and (queen-only) promotion.
//!
//! # Example
//! ```
//! use chess_ai::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! board.play("e2-e4").unwrap();
//! assert_eq!(board.active_player(), Color::Black);
//! ```

mod display;
mod error;
mod fen;
pub mod geometry;
mod make_unmake;
mod movegen;
mod perft;
pub mod search;
mod state;
mod threats;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError, PlayError, SquareError};
pub use fen::START_FEN;
pub use geometry::{direction, distance, is_between, Direction};
pub use state::Board;
pub use types::{Color, Move, MoveMeta, Occupant, Piece, Square, SQUARE_SLOTS};

// Public API - search functions and configuration
pub use search::{
    evaluate, find_best_move, negamax, quiescence, AlphaBetaAi, ChessAi, RandomAi, RootMove,
    SearchConfig, SearchResult,
};
