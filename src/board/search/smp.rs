//! Root-parallel search.
//!
//! The root move list is a shared work queue. Each worker owns a clone of
//! the position and claims the next unsearched root move by bumping a
//! cursor under a lock, so no root move is searched twice. The calling
//! thread works the queue too, then joins every helper before the scores
//! are aggregated.

use std::panic;
use std::thread;

use parking_lot::Mutex;

use super::constants::{INFINITY, MATE};
use super::negamax::Searcher;
use super::{RootMove, SearchConfig, SearchResult};
use crate::board::{Board, Move};

/// Search every legal root move to `config.depth` plies and pick the best.
///
/// Ties go to the move generated last; moves are generated in ascending
/// source-square order (a1, b1, ... h8). With no legal moves the result
/// carries no move and the score of the terminal position.
#[must_use]
pub fn find_best_move(board: &Board, config: &SearchConfig) -> SearchResult {
    let moves = board.generate_moves();
    if moves.is_empty() {
        let score = if board.is_in_check() { -MATE } else { 0 };
        log::info!("no legal moves, score {score}");
        return SearchResult {
            best_move: None,
            score,
            line: Vec::new(),
            nodes: 0,
            root_moves: Vec::new(),
        };
    }

    let depth = config.depth.max(1);
    let helpers = config.threads.max(1).min(moves.len()) - 1;
    let cursor = Mutex::new(0usize);

    let mut scored: Vec<(usize, RootMove)> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(helpers);
        for id in 1..=helpers {
            let spawned = thread::Builder::new()
                .name(format!("root-{id}"))
                .spawn_scoped(scope, || drain_root_moves(board, &moves, &cursor, depth));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    log::warn!("could not spawn root search worker {id}: {err}");
                    break;
                }
            }
        }

        let mut scored = drain_root_moves(board, &moves, &cursor, depth);
        for handle in handles {
            match handle.join() {
                Ok(part) => scored.extend(part),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        scored
    });

    scored.sort_by_key(|(idx, _)| *idx);
    let root_moves: Vec<RootMove> = scored.into_iter().map(|(_, rm)| rm).collect();

    let mut best: Option<&RootMove> = None;
    for rm in &root_moves {
        if best.map_or(true, |b| rm.score >= b.score) {
            best = Some(rm);
        }
    }

    let nodes = root_moves.iter().map(|rm| rm.nodes).sum();
    let (best_move, score, line) = match best {
        Some(rm) => (Some(rm.mv), rm.score, rm.line.clone()),
        None => (None, -INFINITY, Vec::new()),
    };
    if let Some(mv) = best_move {
        log::info!(
            "best move {mv} score {score} depth {depth} nodes {nodes} line {}",
            format_line(&line)
        );
    }

    SearchResult {
        best_move,
        score,
        line,
        nodes,
        root_moves,
    }
}

/// Claim and search root moves until the queue is empty.
fn drain_root_moves(
    board: &Board,
    moves: &[Move],
    cursor: &Mutex<usize>,
    depth: u32,
) -> Vec<(usize, RootMove)> {
    let mut board = board.clone();
    let mut done = Vec::new();
    loop {
        let idx = {
            let mut next = cursor.lock();
            if *next >= moves.len() {
                break;
            }
            let idx = *next;
            *next += 1;
            idx
        };

        let mv = moves[idx];
        let mut searcher = Searcher::new(&mut board);
        let (score, line) = searcher.search_root_move(mv, depth);
        log::debug!("{mv}: score {score} line {}", format_line(&line));
        done.push((
            idx,
            RootMove {
                mv,
                score,
                line,
                nodes: searcher.nodes,
            },
        ));
    }
    done
}

pub(crate) fn format_line(line: &[Move]) -> String {
    line.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
