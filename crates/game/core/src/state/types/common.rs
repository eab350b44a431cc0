use std::fmt;

use crate::config::GameConfig;

/// Unique identifier for a piece instance, assigned once when the deck is dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub u8);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Board cell expressed as (row, column), both zero-based.
///
/// Positions arriving from collaborators are not trusted to be on the board;
/// call [`Position::is_on_board`] before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub const fn is_on_board(self) -> bool {
        self.row < GameConfig::ROWS && self.col < GameConfig::COLS
    }

    /// Row-major cell index. Only meaningful for on-board positions.
    pub const fn index(self) -> usize {
        self.row as usize * GameConfig::COLS as usize + self.col as usize
    }

    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / GameConfig::COLS as usize) as u8,
            col: (index % GameConfig::COLS as usize) as u8,
        }
    }

    /// Every board cell in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GameConfig::CELLS).map(Position::from_index)
    }

    pub fn row_delta(self, other: Position) -> i32 {
        other.row as i32 - self.row as i32
    }

    pub fn col_delta(self, other: Position) -> i32 {
        other.col as i32 - self.col as i32
    }

    pub fn manhattan(self, other: Position) -> u32 {
        self.row_delta(other).unsigned_abs() + self.col_delta(other).unsigned_abs()
    }

    /// Cells strictly between `self` and `other` when both share a row or a
    /// column; `None` otherwise.
    pub fn between(self, other: Position) -> Option<Vec<Position>> {
        if self.row == other.row {
            let (lo, hi) = (self.col.min(other.col), self.col.max(other.col));
            Some(
                (lo.saturating_add(1)..hi)
                    .map(|col| Position::new(self.row, col))
                    .collect(),
            )
        } else if self.col == other.col {
            let (lo, hi) = (self.row.min(other.row), self.row.max(other.row));
            Some(
                (lo.saturating_add(1)..hi)
                    .map(|row| Position::new(row, self.col))
                    .collect(),
            )
        } else {
            None
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
