//! Fail-hard negamax with alpha-beta pruning and a capture-only quiescence
//! extension at the horizon.

use super::constants::{DELTA_MARGIN, INFINITY, MATE};
use super::eval::evaluate;
use super::move_order::order_moves;
use crate::board::{Board, Move, MoveMeta};

/// Search context for one thread. Owns exclusive access to its board for
/// the duration of the search.
pub(crate) struct Searcher<'a> {
    pub(crate) board: &'a mut Board,
    /// Distance from the position the search was started on.
    pub(crate) ply: i32,
    pub(crate) nodes: u64,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(board: &'a mut Board) -> Self {
        Searcher {
            board,
            ply: 0,
            nodes: 0,
        }
    }

    /// Score for a side to move with no legal moves, kept inside the window.
    ///
    /// An inverted window (`alpha > beta`) yields `beta`.
    fn terminal_score(&self, alpha: i32, beta: i32) -> i32 {
        let score = if self.board.is_in_check() {
            -MATE + self.ply
        } else {
            0
        };
        score.max(alpha).min(beta)
    }

    fn make(&mut self, mv: Move) -> MoveMeta {
        self.nodes += 1;
        self.ply += 1;
        self.board.make_move(mv)
    }

    fn unmake(&mut self, meta: MoveMeta) {
        self.board.unmake_move(meta);
        self.ply -= 1;
    }

    /// Returns the score and the line that produced it.
    pub(crate) fn negamax(&mut self, mut alpha: i32, beta: i32, depth: u32) -> (i32, Vec<Move>) {
        if depth == 0 {
            return self.quiescence(alpha, beta);
        }

        let mut moves = self.board.generate_moves();
        if moves.is_empty() {
            return (self.terminal_score(alpha, beta), Vec::new());
        }
        order_moves(self.board, &mut moves);

        let mut line = Vec::new();
        for mv in moves {
            let meta = self.make(mv);
            let (score, mut child) = self.negamax(-beta, -alpha, depth - 1);
            let score = -score;
            self.unmake(meta);

            if score >= beta {
                child.insert(0, mv);
                return (beta, child);
            }
            if score > alpha {
                alpha = score;
                child.insert(0, mv);
                line = child;
            }
        }
        (alpha, line)
    }

    pub(crate) fn quiescence(&mut self, mut alpha: i32, beta: i32) -> (i32, Vec<Move>) {
        let mut moves = self.board.generate_moves();
        if moves.is_empty() {
            return (self.terminal_score(alpha, beta), Vec::new());
        }

        let stand_pat = evaluate(self.board);
        if stand_pat >= beta {
            return (beta, Vec::new());
        }
        if stand_pat < alpha - DELTA_MARGIN {
            return (alpha, Vec::new());
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        moves.retain(|mv| !self.board.is_empty(mv.to()));
        order_moves(self.board, &mut moves);

        let mut line = Vec::new();
        for mv in moves {
            let meta = self.make(mv);
            let (score, mut child) = self.quiescence(-beta, -alpha);
            let score = -score;
            self.unmake(meta);

            if score >= beta {
                child.insert(0, mv);
                return (beta, child);
            }
            if score > alpha {
                alpha = score;
                child.insert(0, mv);
                line = child;
            }
        }
        (alpha, line)
    }

    /// Play one root move and search the reply with a full window.
    pub(crate) fn search_root_move(&mut self, mv: Move, depth: u32) -> (i32, Vec<Move>) {
        let meta = self.make(mv);
        let (score, mut line) = self.negamax(-INFINITY, INFINITY, depth.saturating_sub(1));
        self.unmake(meta);
        line.insert(0, mv);
        (-score, line)
    }
}

/// Negamax score of `board` for the side to move, searched `depth` plies.
///
/// The board is restored before returning.
pub fn negamax(board: &mut Board, alpha: i32, beta: i32, depth: u32) -> i32 {
    Searcher::new(board).negamax(alpha, beta, depth).0
}

/// Quiescence score of `board` for the side to move.
///
/// The board is restored before returning.
pub fn quiescence(board: &mut Board, alpha: i32, beta: i32) -> i32 {
    Searcher::new(board).quiescence(alpha, beta).0
}
