//! Core domain types for tic-tac-toe.

use super::action::Move;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// The person at the keyboard (always moves first, plays `X`).
    Human,
    /// The minimax opponent (plays `O`).
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Returns the cell marker this player leaves on the board.
    pub fn marker(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Marked by the human.
    Human,
    /// Marked by the computer.
    Computer,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
        }
    }

    fn symbol(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some('X'),
            Cell::Computer => Some('O'),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order. The board is `Copy`, so search code
/// explores continuations on private copies instead of mutating and undoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given coordinates, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= Self::SIZE || col >= Self::SIZE {
            return None;
        }
        Some(self.cells[row * Self::SIZE + col])
    }

    /// Gets the cell referenced by a move, or `None` when out of range.
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        self.get(mv.row, mv.col)
    }

    /// Checks if the cell at the move's coordinates exists and is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.cell(mv), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        let marker = player.marker();
        self.cells.iter().filter(|&&c| c == marker).count()
    }

    /// Writes a cell without validation. Coordinates must be in range.
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row * Self::SIZE + mv.col] = cell;
    }
}

impl std::fmt::Display for Board {
    /// Renders occupied cells as `X`/`O` and empty cells by their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                let pos = row * Self::SIZE + col;
                match self.cells[pos].symbol() {
                    Some(symbol) => write!(f, "{}", symbol)?,
                    None => write!(f, "{}", pos + 1)?,
                }
                if col < Self::SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < Self::SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// A character that is neither a marker, an empty cell nor a separator.
    #[display("Unexpected character '{}' in board", _0)]
    UnexpectedChar(char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells: `X` for the human, `O` for the computer and `.`,
    /// `_` or `-` for empty. Whitespace, `/` and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Human,
                'O' | 'o' => Cell::Computer,
                '.' | '_' | '-' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::UnexpectedChar(c)),
            };
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|rest: Vec<Cell>| ParseBoardError::WrongCellCount(rest.len()))?;
        Ok(Self { cells })
    }
}
