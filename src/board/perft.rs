use super::{Board, Move};

impl Board {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let meta = self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(meta);
        }

        nodes
    }

    /// Perft split by root move, for tracking down generator bugs.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        let mut split = Vec::new();
        for m in self.generate_moves() {
            let meta = self.make_move(m);
            let nodes = if depth > 1 { self.perft(depth - 1) } else { 1 };
            self.unmake_move(meta);
            split.push((m, nodes));
        }
        split
    }
}
