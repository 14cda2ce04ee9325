use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::ChessAi;
use crate::board::{Board, Move};

/// Plays a uniformly random legal move.
pub struct RandomAi {
    rng: StdRng,
}

impl RandomAi {
    /// A reproducible player driven by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        RandomAi {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        RandomAi {
            rng: StdRng::from_entropy(),
        }
    }
}

impl ChessAi for RandomAi {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        board.generate_moves().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_moves_are_legal_and_reproducible() {
        let board = Board::new();
        let mut a = RandomAi::new(7);
        let mut b = RandomAi::new(7);
        for _ in 0..10 {
            let mv = a.choose_move(&board).unwrap();
            assert!(board.is_legal_move(mv));
            assert_eq!(Some(mv), b.choose_move(&board));
        }
    }

    #[test]
    fn test_no_move_when_mated() {
        let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(RandomAi::new(1).choose_move(&board), None);
    }
}
