//! A computer opponent for the board game 'Connect 4'
//!
//! The agent picks its moves with a depth-limited minimax search using
//! alpha-beta pruning over a hand-tuned heuristic that scores every
//! 4-cell window of the board.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{Board, Piece, Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! for column in 0..3 {
//!     board.play(column, Piece::Player)?;
//! }
//!
//! let mut searcher = Searcher::new(4);
//! let (_score, best_move) = searcher.solve(&board)?;
//!
//! assert_eq!(best_move, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluation;

pub mod search;

pub mod game;


pub use board::{Board, MoveError, Piece};
pub use evaluation::{evaluate_window, score_position};
pub use game::{parse_column, Game, GameState, Outcome, Side};
pub use search::{pick_best_move, Score, Searcher};

/// The number of rows of the game board, counted from the bottom
pub const ROWS: usize = 6;

/// The number of columns of the game board
pub const COLS: usize = 7;

/// The number of same-coloured cells in a line needed to win
pub const WINDOW_LENGTH: usize = 4;

/// The column that earns the positional bonus in the heuristic
pub const CENTER_COLUMN: usize = COLS / 2;

/// The search depth used by the interactive game
pub const DEFAULT_DEPTH: u32 = 5;

// every line direction must fit at least one window
const_assert!(ROWS >= WINDOW_LENGTH);
const_assert!(COLS >= WINDOW_LENGTH);
