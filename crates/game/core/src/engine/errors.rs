//! Error types for the action execution pipeline.

use crate::action::{
    ActionError, ActionTransition, DeployAction, FlipAction, MoveAction, PassAction,
    RetrieveAction,
};
use crate::error::{ErrorCategory, ErrorSeverity, GameError};
use crate::state::Seat;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("flip action failed: {0}")]
    Flip(TransitionPhaseError<<FlipAction as ActionTransition>::Error>),

    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("deploy action failed: {0}")]
    Deploy(TransitionPhaseError<<DeployAction as ActionTransition>::Error>),

    #[error("retrieve action failed: {0}")]
    Retrieve(TransitionPhaseError<<RetrieveAction as ActionTransition>::Error>),

    #[error("pass action failed: {0}")]
    Pass(TransitionPhaseError<<PassAction as ActionTransition>::Error>),

    #[error("game is over: {winner} won")]
    GameFinished { winner: Seat },

    #[error("invalid actor: {actor} acted but it is {current}'s turn")]
    ActorNotCurrent { actor: Seat, current: Seat },

    #[error("piece count changed from {before} to {after}")]
    PieceCountChanged { before: usize, after: usize },
}

impl ExecuteError {
    /// The action-level error, when the failure came from an action's own
    /// transition rather than from the engine's envelope checks.
    pub fn action_error(&self) -> Option<&ActionError> {
        match self {
            ExecuteError::Flip(inner)
            | ExecuteError::Move(inner)
            | ExecuteError::Deploy(inner)
            | ExecuteError::Retrieve(inner)
            | ExecuteError::Pass(inner) => Some(&inner.error),
            _ => None,
        }
    }

    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            ExecuteError::Flip(inner)
            | ExecuteError::Move(inner)
            | ExecuteError::Deploy(inner)
            | ExecuteError::Retrieve(inner)
            | ExecuteError::Pass(inner) => Some(inner.phase),
            _ => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::GameFinished { .. } | ExecuteError::ActorNotCurrent { .. } => {
                ErrorSeverity::Validation
            }
            ExecuteError::PieceCountChanged { .. } => ErrorSeverity::Internal,
            _ => self
                .action_error()
                .map_or(ErrorSeverity::Internal, |error| error.severity()),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            ExecuteError::GameFinished { .. } | ExecuteError::ActorNotCurrent { .. } => {
                ErrorCategory::TurnViolation
            }
            ExecuteError::PieceCountChanged { .. } => ErrorCategory::Internal,
            _ => self
                .action_error()
                .map_or(ErrorCategory::Internal, |error| error.category()),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::GameFinished { .. } => "ENGINE_GAME_FINISHED",
            ExecuteError::ActorNotCurrent { .. } => "ENGINE_ACTOR_NOT_CURRENT",
            ExecuteError::PieceCountChanged { .. } => "ENGINE_PIECE_COUNT_CHANGED",
            _ => self
                .action_error()
                .map_or("ENGINE_UNKNOWN", |error| error.error_code()),
        }
    }
}
