use anyhow::{anyhow, Result};

use std::io::{stdin, stdout};

use connect4_minimax::*;

mod terminal;
use terminal::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = stdin();
    let mut input = stdin.lock();
    let mut output = stdout();

    let mut game = Game::with_random_first();
    let mut searcher = Searcher::new(DEFAULT_DEPTH).with_parallel(true);

    print_board(&mut output, game.board())?;

    // game loop
    loop {
        match game.state() {
            GameState::AwaitingPlayerMove => {
                let column = read_column(&mut input, &mut output, game.board())?
                    .ok_or_else(|| anyhow!("input closed before the game ended"))?;

                if let Err(err) = game.play_player(column) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
                print_board(&mut output, game.board())?;
            }
            GameState::AwaitingAiMove => {
                let spinner = thinking_spinner();
                let column = game.play_ai(&mut searcher);
                spinner.finish_and_clear();

                println!("best move is to drop in column {}", column?);
                print_board(&mut output, game.board())?;
            }
            GameState::GameOver(outcome) => {
                announce(&mut output, outcome)?;
                break;
            }
        }
    }
    Ok(())
}
