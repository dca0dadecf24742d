//! Turn order and game end detection

use anyhow::{anyhow, Result};
use log::info;

use std::fmt::{self, Display, Formatter};

use crate::board::{Board, MoveError, Piece};
use crate::search::Searcher;

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn piece(self) -> Piece {
        match self {
            Side::Player => Piece::Player,
            Side::Ai => Piece::Ai,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    fn to_move(self) -> GameState {
        match self {
            Side::Player => GameState::AwaitingPlayerMove,
            Side::Ai => GameState::AwaitingAiMove,
        }
    }
}

/// How a finished game ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    PlayerWin,
    AiWin,
    Draw,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerWin => write!(f, "Player 1 wins!!"),
            Outcome::AiWin => write!(f, "Player 2 wins!!"),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    AwaitingPlayerMove,
    AwaitingAiMove,
    GameOver(Outcome),
}

/// A single game between the human player and the computer
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Game {
    /// Starts a game on an empty board with `first` to move
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            state: first.to_move(),
        }
    }

    /// Resumes a game from `board` with `to_move` to play next
    ///
    /// A board that is already won or full gives a finished game.
    pub fn from_position(board: Board, to_move: Side) -> Self {
        let state = if board.winning_move(Piece::Player) {
            GameState::GameOver(Outcome::PlayerWin)
        } else if board.winning_move(Piece::Ai) {
            GameState::GameOver(Outcome::AiWin)
        } else if board.is_full() {
            GameState::GameOver(Outcome::Draw)
        } else {
            to_move.to_move()
        };
        Self { board, state }
    }

    /// Starts a game with a coin toss deciding who moves first
    pub fn with_random_first() -> Self {
        let first = if fastrand::bool() { Side::Player } else { Side::Ai };
        info!("{:?} moves first", first);
        Self::new(first)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Applies the human player's move
    ///
    /// A rejected move leaves the game untouched so the caller can ask again.
    pub fn play_player(&mut self, column: usize) -> Result<GameState> {
        self.apply(Side::Player, column)
    }

    /// Lets `searcher` pick the computer's move and applies it
    ///
    /// Returns the column that was played.
    pub fn play_ai(&mut self, searcher: &mut Searcher) -> Result<usize> {
        self.expect_turn(Side::Ai)?;
        let (score, column) = searcher.solve(&self.board)?;
        self.apply(Side::Ai, column)?;
        info!("AI played column {} (score {})", column, score);
        Ok(column)
    }

    fn expect_turn(&self, side: Side) -> Result<(), MoveError> {
        match self.state {
            GameState::GameOver(_) => Err(MoveError::GameOver),
            state if state == side.to_move() => Ok(()),
            _ => Err(MoveError::NotYourTurn),
        }
    }

    fn apply(&mut self, side: Side, column: usize) -> Result<GameState> {
        self.expect_turn(side)?;
        self.board.play(column, side.piece())?;

        self.state = if self.board.winning_move(side.piece()) {
            GameState::GameOver(match side {
                Side::Player => Outcome::PlayerWin,
                Side::Ai => Outcome::AiWin,
            })
        } else if self.board.is_full() {
            GameState::GameOver(Outcome::Draw)
        } else {
            side.other().to_move()
        };

        if let GameState::GameOver(outcome) = self.state {
            info!("game over: {}", outcome);
        }
        Ok(self.state)
    }
}

/// Parses a column index typed by the player
pub fn parse_column(input: &str) -> Result<usize> {
    let input = input.trim();
    input
        .parse::<usize>()
        .map_err(|_| anyhow!("Invalid number: {}", input))
}
