//! Search module implementing fixed-depth negamax.
//!
//! Features:
//! - Alpha-beta search (fail-hard) with mate-distance scoring
//! - Quiescence search over captures with stand-pat and delta pruning
//! - MVV-LVA move ordering
//! - Root-parallel search over a shared root move queue

mod constants;
mod eval;
mod move_order;
mod negamax;
mod random;
pub mod smp;

use std::env;
use std::num::NonZeroUsize;
use std::thread;

use super::{Board, Move};

pub use constants::{piece_value, DEFAULT_DEPTH, DELTA_MARGIN, INFINITY, MATE, PIECE_VALUES};
pub use eval::evaluate;
pub use move_order::order_moves;
pub use negamax::{negamax, quiescence};
pub use random::RandomAi;
pub use smp::find_best_move;

/// Configuration for a root search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root before quiescence takes over
    pub depth: u32,
    /// Threads working the root queue, the calling thread included
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            threads: thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}

impl SearchConfig {
    /// Create config with specified thread count
    #[must_use]
    pub fn with_threads(threads: usize) -> Self {
        SearchConfig {
            threads: threads.max(1),
            ..Default::default()
        }
    }

    /// Set search depth
    #[must_use]
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth.max(1);
        self
    }

    /// Defaults overridden by `CHESS_AI_DEPTH` and `CHESS_AI_THREADS`.
    ///
    /// Unparsable values are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = SearchConfig::default();
        if let Some(depth) = read_env::<u32>(constants::DEPTH_ENV) {
            config = config.depth(depth);
        }
        if let Some(threads) = read_env::<usize>(constants::THREADS_ENV) {
            config.threads = threads.max(1);
        }
        config
    }
}

fn read_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {name}={raw:?}: not a number");
            None
        }
    }
}

/// Outcome of searching one root move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMove {
    pub mv: Move,
    /// Score from the root side's point of view
    pub score: i32,
    /// Expected continuation, starting with `mv`
    pub line: Vec<Move>,
    pub nodes: u64,
}

/// Result of a root search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    pub score: i32,
    /// Principal variation starting with `best_move`
    pub line: Vec<Move>,
    pub nodes: u64,
    /// Every root move in generation order
    pub root_moves: Vec<RootMove>,
}

/// A move-choosing player.
pub trait ChessAi {
    fn name(&self) -> &str;

    /// Pick a move for the side to move, or `None` if there is none.
    fn choose_move(&mut self, board: &Board) -> Option<Move>;
}

/// The alpha-beta searcher as a player.
#[derive(Clone, Debug, Default)]
pub struct AlphaBetaAi {
    config: SearchConfig,
}

impl AlphaBetaAi {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        AlphaBetaAi { config }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl ChessAi for AlphaBetaAi {
    fn name(&self) -> &str {
        "alpha-beta"
    }

    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        find_best_move(board, &self.config).best_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_clamps() {
        let config = SearchConfig::with_threads(0).depth(0);
        assert_eq!(config.threads, 1);
        assert_eq!(config.depth, 1);

        let config = SearchConfig::with_threads(3).depth(5);
        assert_eq!(config.threads, 3);
        assert_eq!(config.depth, 5);
    }

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, DEFAULT_DEPTH);
        assert!(config.threads >= 1);
    }

    #[test]
    fn test_piece_values() {
        use crate::board::Piece;
        assert_eq!(piece_value(Piece::Pawn), 10);
        assert_eq!(piece_value(Piece::Queen), 90);
        assert_eq!(piece_value(Piece::King), 0);
    }
}
