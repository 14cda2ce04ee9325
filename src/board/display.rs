use std::fmt;

use super::{Board, Square};

const LIGHT_BG: &str = "\x1b[107m";
const DARK_BG: &str = "\x1b[47m";
const RESET: &str = "\x1b[0m";
const FILES: &str = "   A  B  C  D  E  F  G  H";

impl Board {
    /// Draw the position rank 8 down to rank 1 with Unicode glyphs.
    ///
    /// With `colored` set, squares get alternating ANSI backgrounds; otherwise
    /// empty squares are drawn as `.` so the grid reads in plain logs.
    #[must_use]
    pub fn render(&self, colored: bool) -> String {
        let mut out = String::with_capacity(if colored { 1024 } else { 256 });
        out.push_str(FILES);
        out.push('\n');
        for rank in (0..8u8).rev() {
            out.push_str(&format!("{} ", rank + 1));
            for file in 0..8u8 {
                let glyph = self
                    .piece_at(Square::at(file, rank))
                    .map(|(color, piece)| piece.glyph(color));
                if colored {
                    let bg = if (file + rank) % 2 == 1 { LIGHT_BG } else { DARK_BG };
                    out.push_str(bg);
                    out.push(' ');
                    out.push(glyph.unwrap_or(' '));
                    out.push(' ');
                    out.push_str(RESET);
                } else {
                    out.push(' ');
                    out.push(glyph.unwrap_or('.'));
                    out.push(' ');
                }
            }
            out.push_str(&format!(" {}\n", rank + 1));
        }
        out.push_str(FILES);
        out.push('\n');
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}
