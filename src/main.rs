use std::io::{self, BufRead, Write};

use chess_ai::board::{AlphaBetaAi, ChessAi, MoveMeta, SearchConfig};
use chess_ai::{Board, Color};

/// The console player always has the white pieces.
const HUMAN: Color = Color::White;

fn print_status(board: &Board) {
    println!("{board}");
    if board.is_checkmate() {
        println!("Checkmate, {} wins.", board.active_player().opponent());
    } else if board.is_stalemate() {
        println!("Stalemate.");
    } else if board.is_in_check() {
        println!("{} is in check.", board.active_player());
    } else {
        println!("{} to move.", board.active_player());
    }
}

fn game_over(board: &Board) -> bool {
    board.generate_moves().is_empty()
}

/// Take back plies until it is `human`'s turn again. Returns the number of
/// plies undone.
fn undo_turn(board: &mut Board, history: &mut Vec<MoveMeta>, human: Color) -> usize {
    let mut undone = 0;
    while let Some(meta) = history.pop() {
        board.unmake_move(meta);
        undone += 1;
        if board.active_player() == human {
            break;
        }
    }
    undone
}

fn main() {
    env_logger::init();

    let mut ai = AlphaBetaAi::new(SearchConfig::from_env());
    log::info!(
        "search depth {} on {} threads",
        ai.config().depth,
        ai.config().threads
    );
    let mut board = Board::new();
    let mut history: Vec<MoveMeta> = Vec::new();

    print_status(&board);
    print!("> ");
    let _ = io::stdout().flush();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let command = line.trim();

        match command {
            "" => {}
            "quit" => break,
            "ai" => match ai.choose_move(&board) {
                Some(mv) => println!("{} suggests {mv}", ai.name()),
                None => println!("No legal moves."),
            },
            "u" => {
                if undo_turn(&mut board, &mut history, HUMAN) == 0 {
                    println!("Nothing to undo.");
                } else {
                    print_status(&board);
                }
            }
            notation if game_over(&board) => {
                println!("The game is over; '{notation}' was not played. Use 'u' or 'quit'.");
            }
            notation => match board.play(notation) {
                Ok(meta) => {
                    history.push(meta);
                    print_status(&board);
                    if !game_over(&board) {
                        if let Some(reply) = ai.choose_move(&board) {
                            println!("{} plays {reply}", ai.name());
                            history.push(board.make_move(reply));
                            print_status(&board);
                        }
                    }
                }
                Err(err) => println!("{err}"),
            },
        }

        print!("> ");
        let _ = io::stdout().flush();
    }
}
