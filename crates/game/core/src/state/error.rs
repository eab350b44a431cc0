//! State construction errors.
//!
//! Errors raised while building a game state from a deck or from raw stacks.

use crate::error::{ErrorCategory, ErrorSeverity, GameError};
use crate::state::{Color, PieceKind};

/// Errors that occur while dealing a game or rebuilding its stacks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// Deck does not hold exactly one piece per board cell.
    #[error("deck holds {found} pieces, expected {expected}")]
    DeckSize { expected: usize, found: usize },

    /// Deck composition differs from the standard set.
    #[error("deck holds {found} {color} {kind} pieces, expected {expected}")]
    DeckComposition {
        kind: PieceKind,
        color: Color,
        expected: usize,
        found: usize,
    },

    /// A stack must hold at least one piece.
    #[error("stack holds no pieces")]
    EmptyStack,
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::ResourceViolation
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            DeckSize { .. } => "INIT_DECK_SIZE",
            DeckComposition { .. } => "INIT_DECK_COMPOSITION",
            EmptyStack => "INIT_EMPTY_STACK",
        }
    }
}
