use std::fmt;

use arrayvec::ArrayVec;

use super::{Color, Piece, PieceKind};
use crate::config::GameConfig;

/// Seat at the table. `First` moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::First),
            1 => Some(Seat::Second),
            _ => None,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index())
    }
}

/// Off-board pieces owned by a player. Order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    pieces: ArrayVec<Piece, { GameConfig::HAND_CAPACITY }>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Adds a piece. Returns `false` if the hand is already full, which can
    /// only happen if piece conservation has been broken.
    pub fn add(&mut self, piece: Piece) -> bool {
        self.pieces.try_push(piece).is_ok()
    }

    pub fn count_of(&self, kind: PieceKind) -> usize {
        self.pieces.iter().filter(|piece| piece.kind == kind).count()
    }

    /// Distinct kinds currently in hand, in first-seen order.
    pub fn kinds(&self) -> Vec<PieceKind> {
        let mut kinds = Vec::new();
        for piece in &self.pieces {
            if !kinds.contains(&piece.kind) {
                kinds.push(piece.kind);
            }
        }
        kinds
    }

    /// The pieces [`Hand::take`] would remove, without removing them.
    pub fn peek(&self, kind: PieceKind, count: usize) -> Option<Vec<Piece>> {
        let matching: Vec<Piece> = self
            .pieces
            .iter()
            .filter(|piece| piece.kind == kind)
            .take(count)
            .copied()
            .collect();
        (matching.len() == count).then_some(matching)
    }

    /// Removes `count` pieces of `kind`; leaves the hand untouched and returns
    /// `None` if there are not enough.
    pub fn take(&mut self, kind: PieceKind, count: usize) -> Option<Vec<Piece>> {
        let taken = self.peek(kind, count)?;
        self.pieces
            .retain(|piece| !taken.iter().any(|chosen| chosen.id == piece.id));
        Some(taken)
    }
}

/// A participant: color (unset until the first flip) and hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub color: Option<Color>,
    pub hand: Hand,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(color: Color) -> Self {
        Self {
            color: Some(color),
            hand: Hand::new(),
        }
    }

    /// True when this player controls pieces of `color`.
    pub fn owns(&self, color: Color) -> bool {
        self.color == Some(color)
    }
}
