use arrayvec::ArrayVec;

use super::{Color, Piece, PieceId, PieceKind};
use crate::config::GameConfig;
use crate::state::InitializationError;

/// Bounded storage for the pieces of one stack, bottom first.
pub type StackPieces = ArrayVec<Piece, { GameConfig::MAX_STACK_HEIGHT }>;

/// Effective kind of a piece sequence for movement and size limits: the first
/// non-General piece scanning from the bottom, or General when the sequence is
/// all Generals (or empty).
pub fn base_kind_of(pieces: &[Piece]) -> PieceKind {
    pieces
        .iter()
        .map(|piece| piece.kind)
        .find(|kind| *kind != PieceKind::General)
        .unwrap_or(PieceKind::General)
}

/// An ordered, non-empty pile of pieces occupying one board cell.
///
/// Only the top piece is visible, movable, or targetable. Every constructor
/// refuses empty input, so [`Stack::top`] is always defined; an emptied stack
/// is dropped from the board rather than kept around.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StackRepr"))]
pub struct Stack {
    pieces: StackPieces,
}

/// Unchecked wire form; deserialized stacks go through [`Stack::try_from`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StackRepr {
    pieces: StackPieces,
}

#[cfg(feature = "serde")]
impl TryFrom<StackRepr> for Stack {
    type Error = InitializationError;

    fn try_from(repr: StackRepr) -> Result<Self, Self::Error> {
        Self::try_from(repr.pieces)
    }
}

impl TryFrom<StackPieces> for Stack {
    type Error = InitializationError;

    fn try_from(pieces: StackPieces) -> Result<Self, Self::Error> {
        if pieces.is_empty() {
            return Err(InitializationError::EmptyStack);
        }
        Ok(Self { pieces })
    }
}

impl Stack {
    /// A stack holding a single piece.
    pub fn single(piece: Piece) -> Self {
        let mut pieces = StackPieces::new();
        pieces.push(piece);
        Self { pieces }
    }

    /// Builds a stack from bottom-to-top pieces. Returns `None` for an empty
    /// slice or one taller than [`GameConfig::MAX_STACK_HEIGHT`].
    pub fn from_pieces(pieces: &[Piece]) -> Option<Self> {
        let pieces = StackPieces::try_from(pieces).ok()?;
        Self::try_from(pieces).ok()
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn into_pieces(self) -> StackPieces {
        self.pieces
    }

    pub fn top(&self) -> &Piece {
        &self.pieces[self.pieces.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut Piece {
        let last = self.pieces.len() - 1;
        &mut self.pieces[last]
    }

    /// Number of pieces; the primary capture criterion.
    pub fn weight(&self) -> usize {
        self.pieces.len()
    }

    /// Color of whoever controls the stack (the top piece's color).
    pub fn owner(&self) -> Color {
        self.top().color
    }

    pub fn is_revealed(&self) -> bool {
        self.top().face_up
    }

    pub fn base_kind(&self) -> PieceKind {
        base_kind_of(&self.pieces)
    }

    pub fn size_limit(&self) -> usize {
        self.base_kind().stack_limit()
    }

    pub fn within_limit(&self) -> bool {
        self.weight() <= self.size_limit()
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.iter().any(|piece| piece.id == id)
    }

    /// Returns `self` with `upper` placed on top, or `None` when the result
    /// would exceed the physical stack capacity. Rule checks (type, color,
    /// per-kind limits) belong to the composition rules, not here.
    pub fn stacked_with(&self, upper: &Stack) -> Option<Stack> {
        let mut pieces = self.pieces.clone();
        pieces.try_extend_from_slice(upper.pieces()).ok()?;
        Some(Stack { pieces })
    }

    /// Removes the pieces with the given ids, keeping the relative order of the
    /// rest. Returns the removed pieces and the remaining stack (`None` if
    /// nothing is left).
    pub fn without(&self, ids: &[PieceId]) -> (Vec<Piece>, Option<Stack>) {
        let (removed, kept): (Vec<Piece>, Vec<Piece>) = self
            .pieces
            .iter()
            .copied()
            .partition(|piece| ids.contains(&piece.id));
        (removed, Stack::from_pieces(&kept))
    }
}
