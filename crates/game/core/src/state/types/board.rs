use super::{Color, Position, Stack};
use crate::config::GameConfig;

/// The 4×8 grid. Each cell holds at most one non-empty [`Stack`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Option<Stack>; GameConfig::CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: std::array::from_fn(|_| None),
        }
    }

    /// Stack at `position`, or `None` for an empty or off-board cell.
    pub fn get(&self, position: Position) -> Option<&Stack> {
        if !position.is_on_board() {
            return None;
        }
        self.cells[position.index()].as_ref()
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut Stack> {
        if !position.is_on_board() {
            return None;
        }
        self.cells[position.index()].as_mut()
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// Puts `stack` at `position`, returning whatever was there. Off-board
    /// positions hand the stack straight back.
    pub fn place(&mut self, position: Position, stack: Stack) -> Option<Stack> {
        if !position.is_on_board() {
            return Some(stack);
        }
        self.cells[position.index()].replace(stack)
    }

    /// Removes and returns the stack at `position`.
    pub fn take(&mut self, position: Position) -> Option<Stack> {
        if !position.is_on_board() {
            return None;
        }
        self.cells[position.index()].take()
    }

    /// Occupied cells in row-major order.
    pub fn stacks(&self) -> impl Iterator<Item = (Position, &Stack)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.as_ref().map(|stack| (Position::from_index(index), stack)))
    }

    /// Number of occupied cells strictly between two aligned positions, or
    /// `None` when they share neither a row nor a column.
    pub fn screens_between(&self, from: Position, to: Position) -> Option<usize> {
        let between = from.between(to)?;
        Some(between.into_iter().filter(|p| !self.is_empty_at(*p)).count())
    }

    pub fn piece_count(&self) -> usize {
        self.stacks().map(|(_, stack)| stack.weight()).sum()
    }

    /// True when no face-down piece remains anywhere on the board.
    pub fn all_revealed(&self) -> bool {
        self.stacks()
            .all(|(_, stack)| stack.pieces().iter().all(|piece| piece.face_up))
    }

    /// Number of board pieces of `color`, buried ones included.
    pub fn pieces_of(&self, color: Color) -> usize {
        self.stacks()
            .flat_map(|(_, stack)| stack.pieces())
            .filter(|piece| piece.color == color)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
