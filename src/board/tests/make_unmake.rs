//! Make/unmake move tests.

use super::{checkers, mv, refreshed, sq};
use crate::board::{Board, Color, MoveMeta, Piece};
use rand::prelude::*;

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
];

#[test]
fn test_every_move_round_trips() {
    for fen in POSITIONS {
        let mut board = Board::from_fen(fen);
        let before = board.clone();
        for m in board.generate_moves() {
            let meta = board.make_move(m);
            board.unmake_move(meta);
            assert_eq!(board, before, "{fen}: {m}");
        }
    }
}

#[test]
fn test_two_ply_round_trips_keep_check_slots() {
    for fen in POSITIONS {
        let mut board = Board::from_fen(fen);
        let before = board.clone();
        for first in board.generate_moves() {
            let outer = board.make_move(first);
            let middle = board.clone();
            for second in board.generate_moves() {
                let inner = board.make_move(second);
                board.unmake_move(inner);
                assert_eq!(board, middle, "{fen}: {first} {second}");
            }
            board.unmake_move(outer);
            assert_eq!(board, before, "{fen}: {first}");
        }
    }
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let before = board.clone();
    assert!(board.is_legal_move(mv("e5-f6")));
    let meta = board.make_move(mv("e5-f6"));
    assert!(meta.is_en_passant());
    assert_eq!(meta.captured().map(|occ| occ.piece), Some(Piece::Pawn));
    assert_eq!(meta.previous_en_passant(), Some(sq("f6")));
    assert!(board.is_empty(sq("f5")));
    assert_eq!(board.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.en_passant_target(), None);
    board.unmake_move(meta);
    assert_eq!(board, before);
}

#[test]
fn test_en_passant_only_right_after_double_push() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    board.play("g1-f3").unwrap();
    board.play("b8-c6").unwrap();
    assert!(!board.is_legal_move(mv("e5-f6")));
    assert!(!board.is_legal_move(mv("e5-d6")));
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    // both pawns leave the fifth rank, opening it for the h5 rook
    let board = Board::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 1");
    assert!(!board.is_legal_move(mv("b5-c6")));
    assert!(board.is_legal_move(mv("b5-b6")));
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let before = board.clone();
    let meta = board.make_move(mv("a7-a8"));
    assert!(meta.is_promotion());
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
    board.unmake_move(meta);
    assert_eq!(board, before);
    assert_eq!(board.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_promotion_with_capture_gives_check() {
    let mut board = Board::from_fen("1n5k/P7/8/8/8/8/8/K7 w - - 0 1");
    let before = board.clone();
    let meta = board.make_move(mv("a7-b8"));
    assert_eq!(meta.captured().map(|occ| occ.piece), Some(Piece::Knight));
    assert_eq!(board.direct_check(), Some(sq("b8")));
    board.unmake_move(meta);
    assert_eq!(board, before);
}

#[test]
fn test_castle_metadata_restores_rook() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let before = board.clone();
    let meta = board.make_move(mv("e8-c8"));
    assert!(!meta.mover_had_moved());
    assert_eq!(board.piece_on(sq("d8")), Some(Piece::Rook));
    assert_eq!(board.to_fen(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    board.unmake_move(meta);
    assert_eq!(board, before);
}

#[test]
fn test_random_playouts_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..40 {
        let mut board = Board::new();
        let start = board.clone();
        let mut history: Vec<MoveMeta> = Vec::new();

        for _ in 0..60 {
            let moves = board.generate_moves();
            let Some(&m) = moves.choose(&mut rng) else {
                break;
            };
            history.push(board.make_move(m));

            let fresh = refreshed(&board);
            assert_eq!(board.pins, fresh.pins, "pins after {m}");
            assert_eq!(checkers(&board), checkers(&fresh), "checks after {m}");
            assert_eq!(board.king_attacked(board.active_player()), board.is_in_check());
            assert!(!board.king_attacked(board.active_player().opponent()));
        }

        while let Some(meta) = history.pop() {
            board.unmake_move(meta);
        }
        assert_eq!(board, start);
    }
}
