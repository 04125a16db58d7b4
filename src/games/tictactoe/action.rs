//! Moves and move errors for tic-tac-toe.
//!
//! A move is only a coordinate pair. Whether it is legal depends on the
//! board it is applied to, so validation lives in the rules module.

use super::types::Board;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A (row, column) coordinate on the board.
///
/// Coordinates are not range-checked on construction; applying an
/// out-of-range move fails with [`MoveError::OutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({}, {})", row, col)]
pub struct Move {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Board::SIZE * Board::SIZE).then(|| Self::new(index / Board::SIZE, index % Board::SIZE))
    }

    /// Returns the row-major cell index, or `None` when out of range.
    pub fn index(self) -> Option<usize> {
        self.in_range().then_some(self.row * Board::SIZE + self.col)
    }

    /// Checks that both coordinates lie on the board.
    pub fn in_range(self) -> bool {
        self.row < Board::SIZE && self.col < Board::SIZE
    }
}

/// Error that can occur when applying a move.
///
/// `OutOfRange` and `Occupied` together make up an invalid move: the request
/// is rejected and nothing changes.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The coordinates do not lie on the 3x3 board.
    #[display("Invalid move ({}, {}): coordinates must be 0-2", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell at the move is already marked.
    #[display("Invalid move {}: cell is already occupied", _0)]
    Occupied(Move),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl MoveError {
    /// Returns true for errors caused by the requested coordinates.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, MoveError::OutOfRange { .. } | MoveError::Occupied(_))
    }
}

impl std::error::Error for MoveError {}

/// Error parsing a move from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Cannot read '{}' as a move (use 1-9 or row,col)", input)]
pub struct ParseMoveError {
    /// The rejected input.
    pub input: String,
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Accepts a cell number `1`-`9` (row-major) or a 0-based `row,col` /
    /// `row col` pair. Pairs are not range-checked here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError {
            input: s.to_string(),
        };
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [cell] => {
                let number: usize = cell.parse().map_err(|_| err())?;
                number
                    .checked_sub(1)
                    .and_then(Move::from_index)
                    .ok_or_else(err)
            }
            [row, col] => {
                let row = row.parse().map_err(|_| err())?;
                let col = col.parse().map_err(|_| err())?;
                Ok(Move::new(row, col))
            }
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_corners() {
        assert_eq!(Move::from_index(0), Some(Move::new(0, 0)));
        assert_eq!(Move::from_index(8), Some(Move::new(2, 2)));
        assert_eq!(Move::from_index(9), None);
        assert_eq!(Move::new(1, 2).index(), Some(5));
        assert_eq!(Move::new(3, 0).index(), None);
    }

    #[test]
    fn test_parse_cell_number() {
        assert_eq!("1".parse::<Move>(), Ok(Move::new(0, 0)));
        assert_eq!(" 5 ".parse::<Move>(), Ok(Move::new(1, 1)));
        assert_eq!("9".parse::<Move>(), Ok(Move::new(2, 2)));
        assert!("0".parse::<Move>().is_err());
        assert!("10".parse::<Move>().is_err());
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!("0,2".parse::<Move>(), Ok(Move::new(0, 2)));
        assert_eq!("2 1".parse::<Move>(), Ok(Move::new(2, 1)));
        assert_eq!("1, 1".parse::<Move>(), Ok(Move::new(1, 1)));
        // Range is the rules engine's job.
        assert_eq!("4,0".parse::<Move>(), Ok(Move::new(4, 0)));
    }

    #[test]
    fn test_parse_garbage() {
        assert!("".parse::<Move>().is_err());
        assert!("a,b".parse::<Move>().is_err());
        assert!("1 2 3".parse::<Move>().is_err());
    }

    #[test]
    fn test_error_classification() {
        assert!(MoveError::Occupied(Move::new(0, 0)).is_invalid_move());
        assert!(MoveError::OutOfRange { row: 5, col: 0 }.is_invalid_move());
        assert!(!MoveError::GameOver.is_invalid_move());
        assert!(
            MoveError::Occupied(Move::new(1, 2))
                .to_string()
                .contains("occupied")
        );
    }
}
