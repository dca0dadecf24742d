//! The game grid, gravity drops and win detection

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::{COLS, ROWS, WINDOW_LENGTH};

/// The number of 4-cell windows on the board across all four line directions
pub const WINDOW_COUNT: usize = ROWS * (COLS - WINDOW_LENGTH + 1)
    + COLS * (ROWS - WINDOW_LENGTH + 1)
    + 2 * (ROWS - WINDOW_LENGTH + 1) * (COLS - WINDOW_LENGTH + 1);

/// The (row, column) coordinates of the cells making up one window
pub type Window = [(usize, usize); WINDOW_LENGTH];

/// Builds the table of every window: horizontal, vertical, rising diagonal,
/// then falling diagonal
const fn all_windows() -> [Window; WINDOW_COUNT] {
    let mut windows = [[(0, 0); WINDOW_LENGTH]; WINDOW_COUNT];
    let mut n = 0;

    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col + WINDOW_LENGTH <= COLS {
            let mut i = 0;
            while i < WINDOW_LENGTH {
                windows[n][i] = (row, col + i);
                i += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    let mut col = 0;
    while col < COLS {
        let mut row = 0;
        while row + WINDOW_LENGTH <= ROWS {
            let mut i = 0;
            while i < WINDOW_LENGTH {
                windows[n][i] = (row + i, col);
                i += 1;
            }
            n += 1;
            row += 1;
        }
        col += 1;
    }

    let mut row = 0;
    while row + WINDOW_LENGTH <= ROWS {
        let mut col = 0;
        while col + WINDOW_LENGTH <= COLS {
            let mut i = 0;
            while i < WINDOW_LENGTH {
                windows[n][i] = (row + i, col + i);
                i += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // falling diagonals start on the top row of their span and move right
    let mut row = 0;
    while row + WINDOW_LENGTH <= ROWS {
        let mut col = 0;
        while col + WINDOW_LENGTH <= COLS {
            let mut i = 0;
            while i < WINDOW_LENGTH {
                windows[n][i] = (row + WINDOW_LENGTH - 1 - i, col + i);
                i += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    windows
}

static WINDOWS: [Window; WINDOW_COUNT] = all_windows();

/// Returns every window on the board
pub fn windows() -> &'static [Window; WINDOW_COUNT] {
    &WINDOWS
}

/// The content of a single cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Piece {
    Empty,
    Player,
    Ai,
}

impl Piece {
    /// The integer printed for this piece on the terminal
    pub fn value(self) -> u8 {
        match self {
            Piece::Empty => 0,
            Piece::Player => 1,
            Piece::Ai => 2,
        }
    }

    /// The piece of the other side, `Empty` has no opponent
    pub fn opponent(self) -> Self {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }
}

/// Reasons a move can be rejected
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MoveError {
    /// Column index is not on the board
    OutOfRange(usize),
    /// Column has no empty cell left
    ColumnFull(usize),
    /// `next_open_row` was asked about a full column
    NoOpenRow(usize),
    /// The move was made by the side that is not to move
    NotYourTurn,
    /// The game has already finished
    GameOver,
}

impl Display for MoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange(column) => write!(
                f,
                "Invalid move, column {} out of range. Columns must be between 0 and {}",
                column,
                COLS - 1
            ),
            MoveError::ColumnFull(column) => write!(f, "Invalid move, column {} full", column),
            MoveError::NoOpenRow(column) => write!(f, "no open row in column {}", column),
            MoveError::NotYourTurn => write!(f, "Invalid move, it is not your turn"),
            MoveError::GameOver => write!(f, "Invalid move, the game is over"),
        }
    }
}

impl Error for MoveError {}

/// A 6x7 grid stored bottom-to-top: `(row=0, col=0)` is the bottom left cell
///
/// The board is `Copy`, so every copy is an independent grid.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Piece; COLS]; ROWS],
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Piece::Empty; COLS]; ROWS],
        }
    }

    pub fn cells(&self) -> &[[Piece; COLS]; ROWS] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Piece {
        self.cells[row][col]
    }

    /// Places `piece` at `(row, col)` without any checks
    ///
    /// The caller guarantees that `col` is on the board and that `row` is the
    /// column's lowest empty row (see [`Board::next_open_row`]). Passing
    /// anything else is a caller bug, not a recoverable condition: out of
    /// range indices panic and a wrong row breaks the gravity invariant.
    pub fn drop_piece(&mut self, row: usize, col: usize, piece: Piece) {
        self.cells[row][col] = piece;
    }

    /// Reverts `(row, col)` to empty, undoing a [`Board::drop_piece`]
    pub fn remove_piece(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Piece::Empty;
    }

    /// A column can be played while its top cell is empty
    pub fn is_valid_location(&self, col: usize) -> bool {
        self.cells[ROWS - 1][col].is_empty()
    }

    /// Returns the lowest empty row of `col`
    pub fn next_open_row(&self, col: usize) -> Result<usize, MoveError> {
        (0..ROWS)
            .find(|&row| self.cells[row][col].is_empty())
            .ok_or(MoveError::NoOpenRow(col))
    }

    /// All playable columns in ascending order
    pub fn valid_locations(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_location(col)).collect()
    }

    /// Checked move: drops `piece` into `col` and returns the row it landed in
    pub fn play(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::OutOfRange(col));
        }
        if !self.is_valid_location(col) {
            return Err(MoveError::ColumnFull(col));
        }
        let row = self.next_open_row(col)?;
        self.drop_piece(row, col, piece);
        Ok(row)
    }

    /// Returns the pieces found in `window`
    pub fn window(&self, window: &Window) -> [Piece; WINDOW_LENGTH] {
        let mut pieces = [Piece::Empty; WINDOW_LENGTH];
        for (piece, &(row, col)) in pieces.iter_mut().zip(window.iter()) {
            *piece = self.cells[row][col];
        }
        pieces
    }

    /// Whether `piece` has four in a row in any direction
    pub fn winning_move(&self, piece: Piece) -> bool {
        windows().iter().any(|window| {
            window
                .iter()
                .all(|&(row, col)| self.cells[row][col] == piece)
        })
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_location(col))
    }

    /// Either side has won or no move is left
    pub fn is_terminal(&self) -> bool {
        self.winning_move(Piece::Player) || self.winning_move(Piece::Ai) || self.is_full()
    }

    /// The number of occupied cells
    pub fn move_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Board {
    /// Prints rows top to bottom, each as an array of piece values
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            let values: Vec<String> = row.iter().map(|cell| cell.value().to_string()).collect();
            writeln!(f, "[{}]", values.join(", "))?;
        }
        Ok(())
    }
}
