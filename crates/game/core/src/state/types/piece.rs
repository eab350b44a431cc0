use std::fmt;

use super::PieceId;

/// The seven ranked piece kinds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Chariot,
    Horse,
    Cannon,
    Soldier,
}

impl PieceKind {
    /// Tie-break rank used when two stacks have equal weight.
    pub const fn rank(self) -> u8 {
        match self {
            PieceKind::General => 6,
            PieceKind::Advisor => 5,
            PieceKind::Elephant => 4,
            PieceKind::Chariot => 3,
            PieceKind::Horse => 2,
            PieceKind::Cannon => 1,
            PieceKind::Soldier => 0,
        }
    }

    /// Number of instances of this kind dealt to each color.
    pub const fn copies_per_color(self) -> usize {
        match self {
            PieceKind::General => 1,
            PieceKind::Soldier => 5,
            _ => 2,
        }
    }

    /// Maximum height of a stack whose base type is this kind.
    pub const fn stack_limit(self) -> usize {
        match self {
            PieceKind::Soldier => 12,
            PieceKind::General => 2,
            _ => 6,
        }
    }

    /// Single-letter notation (Chariot is `R`, as in xiangqi FEN).
    pub const fn letter(self) -> char {
        match self {
            PieceKind::General => 'G',
            PieceKind::Advisor => 'A',
            PieceKind::Elephant => 'E',
            PieceKind::Chariot => 'R',
            PieceKind::Horse => 'H',
            PieceKind::Cannon => 'C',
            PieceKind::Soldier => 'S',
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = (*self).into();
        f.write_str(name)
    }
}

/// A single piece instance. Pieces are never created or destroyed after the
/// deal; the engine only flips, recolors and relocates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub face_up: bool,
}

impl Piece {
    /// Creates a face-down piece, as dealt.
    pub const fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            face_up: false,
        }
    }

    /// Creates a face-up piece.
    pub const fn revealed(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            face_up: true,
        }
    }

    /// Returns this piece as it looks once it lands in `color`'s hand.
    #[must_use]
    pub const fn captured_by(mut self, color: Color) -> Self {
        self.color = color;
        self.face_up = true;
        self
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.face_up {
            return f.write_str("?");
        }
        let letter = self.kind.letter();
        match self.color {
            Color::Red => write!(f, "{}", letter),
            Color::Black => write!(f, "{}", letter.to_ascii_lowercase()),
        }
    }
}
