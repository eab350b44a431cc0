//! Per-kind movement patterns and screen counting.

use crate::state::{Board, PieceKind, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryError {
    #[error("{position} is off the board")]
    OffBoard { position: Position },

    #[error("{kind} cannot move from {from} to {to}")]
    InvalidPattern {
        kind: PieceKind,
        from: Position,
        to: Position,
    },

    #[error("{kind} path is blocked by {screens} screen(s)")]
    Blocked { kind: PieceKind, screens: usize },
}

/// Checks that a stack with base `kind` may travel from `from` to `to` and
/// returns the number of screens crossed.
///
/// - Horse: one diagonal step.
/// - Chariot: along a row or column with no screen.
/// - Cannon: along a row or column with zero or one screen.
/// - Everything else: one orthogonal step.
///
/// Occupancy of `to` itself is not considered here.
pub fn check_path(
    board: &Board,
    kind: PieceKind,
    from: Position,
    to: Position,
) -> Result<usize, GeometryError> {
    for position in [from, to] {
        if !position.is_on_board() {
            return Err(GeometryError::OffBoard { position });
        }
    }

    let invalid = GeometryError::InvalidPattern { kind, from, to };
    if from == to {
        return Err(invalid);
    }

    match kind {
        PieceKind::Horse => {
            let diagonal = from.row_delta(to).abs() == 1 && from.col_delta(to).abs() == 1;
            if diagonal { Ok(0) } else { Err(invalid) }
        }
        PieceKind::Chariot | PieceKind::Cannon => {
            let screens = board.screens_between(from, to).ok_or(invalid)?;
            let allowed = if kind == PieceKind::Chariot { 0 } else { 1 };
            if screens > allowed {
                return Err(GeometryError::Blocked { kind, screens });
            }
            Ok(screens)
        }
        PieceKind::General | PieceKind::Advisor | PieceKind::Elephant | PieceKind::Soldier => {
            if from.manhattan(to) == 1 { Ok(0) } else { Err(invalid) }
        }
    }
}
