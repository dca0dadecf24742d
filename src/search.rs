//! Depth-limited minimax search with alpha-beta pruning

use anyhow::{anyhow, Result};
use log::debug;
use rayon::prelude::*;
use static_assertions::const_assert;

use crate::board::{Board, Piece, WINDOW_COUNT};
use crate::evaluation::{score_position, CENTER_BONUS};
use crate::{COLS, ROWS};

/// Desirability of a position from the AI's point of view
pub type Score = i64;

/// Value of a position the AI has won
pub const AI_WIN_SCORE: Score = 100_000_000_000_000;
/// Value of a position the player has won
pub const PLAYER_WIN_SCORE: Score = -10_000_000_000_000;

pub const NEG_INFINITY: Score = Score::MIN;
pub const POS_INFINITY: Score = Score::MAX;

/// Best score a greedy pick starts from
const GREEDY_FLOOR: Score = -10_000;

// a decided game must outweigh any sum of window scores
const_assert!(-PLAYER_WIN_SCORE > 100 * WINDOW_COUNT as Score + CENTER_BONUS * ROWS as Score);
const_assert!(AI_WIN_SCORE > -PLAYER_WIN_SCORE);

/// Value of a position where the search stops
fn leaf_value(board: &Board, is_terminal: bool) -> Score {
    if !is_terminal {
        score_position(board, Piece::Ai)
    } else if board.winning_move(Piece::Ai) {
        AI_WIN_SCORE
    } else if board.winning_move(Piece::Player) {
        PLAYER_WIN_SCORE
    } else {
        // draw
        0
    }
}

/// Lowest empty row of a column already known to be playable
fn open_row(board: &Board, col: usize) -> usize {
    match board.next_open_row(col) {
        Ok(row) => row,
        Err(err) => unreachable!("searched an unplayable column: {}", err),
    }
}

/// The computer opponent
///
/// # Notes
/// The AI is always the maximizing side. Positions are scored with
/// [`score_position`] once the depth runs out, while won, lost and drawn
/// positions get fixed scores that dominate every heuristic value.
///
/// Sibling moves are tried on the same board: a piece is dropped, the
/// subtree searched and the cell emptied again before the next column.
#[derive(Clone, Debug)]
pub struct Searcher {
    depth: u32,
    parallel: bool,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` looking `depth` plies ahead
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            parallel: false,
            node_count: 0,
        }
    }

    /// Searches the root moves on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Performs game tree search
    ///
    /// Returns the best column for the side to move (`None` when the search
    /// stops at this node) and the backed-up score. Columns are tried in
    /// ascending order and only a strictly better score replaces the current
    /// best, so ties go to the lowest column. `board` is left unchanged.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Option<usize>, Score) {
        self.node_count += 1;

        let is_terminal = board.is_terminal();
        if depth == 0 || is_terminal {
            return (None, leaf_value(board, is_terminal));
        }

        let piece = if maximizing { Piece::Ai } else { Piece::Player };
        let mut value = if maximizing { NEG_INFINITY } else { POS_INFINITY };
        let mut best_column = None;

        for column in 0..COLS {
            if !board.is_valid_location(column) {
                continue;
            }
            // fallback, any real score beats the starting sentinel
            if best_column.is_none() {
                best_column = Some(column);
            }

            let row = open_row(board, column);
            board.drop_piece(row, column, piece);
            let (_, score) = self.minimax(board, depth - 1, alpha, beta, !maximizing);
            board.remove_piece(row, column);

            if maximizing {
                if score > value {
                    value = score;
                    best_column = Some(column);
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best_column = Some(column);
                }
                beta = beta.min(value);
            }

            // the other side will never allow this line, stop looking
            if alpha >= beta {
                break;
            }
        }

        (best_column, value)
    }

    /// Searches every root move on its own board copy with a full window
    ///
    /// Exact child scores make the first strictly best column the same one
    /// the sequential search picks.
    fn parallel_root(&mut self, board: &Board) -> (Option<usize>, Score) {
        self.node_count += 1;
        let depth = self.depth;

        let results: Vec<(usize, Score, usize)> = board
            .valid_locations()
            .into_par_iter()
            .map(|column| {
                let mut next = Searcher::new(depth);
                let mut board = *board;
                let row = open_row(&board, column);
                board.drop_piece(row, column, Piece::Ai);
                let (_, score) =
                    next.minimax(&mut board, depth - 1, NEG_INFINITY, POS_INFINITY, false);
                (column, score, next.node_count)
            })
            .collect();

        let mut value = NEG_INFINITY;
        let mut best_column = results.first().map(|&(column, _, _)| column);
        for (column, score, nodes) in results {
            self.node_count += nodes;
            if score > value {
                value = score;
                best_column = Some(column);
            }
        }

        (best_column, value)
    }

    /// Calculates the score and best move for the AI in the given position
    pub fn solve(&mut self, board: &Board) -> Result<(Score, usize)> {
        if self.depth == 0 {
            return Err(anyhow!("search depth must be at least 1"));
        }
        if board.is_terminal() {
            return Err(anyhow!("no move to search, the game is over"));
        }

        let nodes_before = self.node_count;
        let (best_column, score) = if self.parallel {
            self.parallel_root(board)
        } else {
            let mut board = *board;
            self.minimax(&mut board, self.depth, NEG_INFINITY, POS_INFINITY, true)
        };
        let best_column = best_column.ok_or_else(|| anyhow!("search returned no move"))?;

        debug!(
            "depth {} search ({}) visited {} nodes, best column {} with score {}",
            self.depth,
            if self.parallel { "parallel" } else { "sequential" },
            self.node_count - nodes_before,
            best_column,
            score
        );

        Ok((score, best_column))
    }
}

/// Picks the column whose resulting position scores best for `piece`,
/// looking one move ahead only
///
/// Returns `None` when the board is full.
pub fn pick_best_move(board: &Board, piece: Piece) -> Option<usize> {
    let valid_locations = board.valid_locations();
    let mut best_column = *valid_locations.first()?;
    let mut best_score = GREEDY_FLOOR;

    for &column in valid_locations.iter() {
        let mut next = *board;
        next.play(column, piece).ok()?;
        let score = score_position(&next, piece);
        if score > best_score {
            best_score = score;
            best_column = column;
        }
    }

    Some(best_column)
}
