//! Action validation errors.
//!
//! One enum covers every way a FLIP, MOVE, DEPLOY, RETRIEVE or PASS can be
//! refused. Rule-level errors from [`crate::rules`] are wrapped transparently.

use crate::error::{ErrorCategory, ErrorSeverity, GameError};
use crate::rules::{CaptureError, CompositionError, GeometryError};
use crate::state::{PieceId, PieceKind, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    // ------------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------------
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("cannon at {from} cannot jump onto empty {to}")]
    JumpOntoEmpty { from: Position, to: Position },

    #[error("point-blank cannon capture from {from} to {to} is not allowed")]
    PointBlankCannon { from: Position, to: Position },

    // ------------------------------------------------------------------------
    // Target state
    // ------------------------------------------------------------------------
    #[error("{position} is off the board")]
    OffBoard { position: Position },

    #[error("no piece at {position}")]
    EmptyCell { position: Position },

    #[error("piece at {position} is face-down")]
    HiddenPiece { position: Position },

    #[error("cannot interact with face-down piece at {position}")]
    HiddenTarget { position: Position },

    #[error("piece at {position} is already face-up")]
    AlreadyRevealed { position: Position },

    #[error("cannot move {position} onto itself")]
    MoveToSelf { position: Position },

    #[error("stack at {position} belongs to the opponent")]
    NotOwner { position: Position },

    #[error("cannot deploy onto the opponent's stack at {position}")]
    DestinationNotOwned { position: Position },

    // ------------------------------------------------------------------------
    // Rank / weight
    // ------------------------------------------------------------------------
    #[error(transparent)]
    Capture(#[from] CaptureError),

    // ------------------------------------------------------------------------
    // Stack composition
    // ------------------------------------------------------------------------
    #[error(transparent)]
    Composition(#[from] CompositionError),

    // ------------------------------------------------------------------------
    // Chain protocol
    // ------------------------------------------------------------------------
    #[error("chain capture pending at {at}: only a move from there or a pass is allowed")]
    ChainPending { at: Position },

    #[error("chain capture must continue from {expected}, not {found}")]
    WrongChainPiece { expected: Position, found: Position },

    #[error("chain capture cannot move onto empty {to}")]
    ChainRequiresInteraction { to: Position },

    #[error("{to} is not a chain target")]
    NotChainTarget { to: Position },

    #[error("nothing to pass: no chain capture pending")]
    NoChainPending,

    // ------------------------------------------------------------------------
    // Resources
    // ------------------------------------------------------------------------
    #[error("piece count must be at least one")]
    InvalidCount,

    #[error("requested {requested} {kind} from hand, only {available} available")]
    InsufficientPieces {
        kind: PieceKind,
        requested: usize,
        available: usize,
    },

    #[error("piece {id} is not in the stack")]
    UnknownPiece { id: PieceId },

    #[error("piece {id} listed twice")]
    DuplicatePiece { id: PieceId },

    #[error("no pieces listed to retrieve")]
    EmptyRetrieve,

    #[error("retrieving would empty the stack at {position}")]
    RetrieveWouldEmpty { position: Position },

    // ------------------------------------------------------------------------
    // Internal
    // ------------------------------------------------------------------------
    #[error("hand capacity exceeded")]
    HandOverflow,

    #[error("stack at {position} exceeds its size limit")]
    StackLimitBroken { position: Position },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            OffBoard { .. } | UnknownPiece { .. } | DuplicatePiece { .. } | InvalidCount
            | EmptyRetrieve => ErrorSeverity::Validation,
            Geometry(GeometryError::OffBoard { .. }) => ErrorSeverity::Validation,
            HandOverflow | StackLimitBroken { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn category(&self) -> ErrorCategory {
        use ActionError::*;
        match self {
            Geometry(_) | JumpOntoEmpty { .. } | PointBlankCannon { .. } => {
                ErrorCategory::GeometryViolation
            }
            OffBoard { .. }
            | EmptyCell { .. }
            | HiddenPiece { .. }
            | HiddenTarget { .. }
            | AlreadyRevealed { .. }
            | MoveToSelf { .. }
            | NotOwner { .. }
            | DestinationNotOwned { .. } => ErrorCategory::TargetStateViolation,
            Capture(_) => ErrorCategory::RankWeightViolation,
            Composition(_) => ErrorCategory::StackCompositionViolation,
            ChainPending { .. }
            | WrongChainPiece { .. }
            | ChainRequiresInteraction { .. }
            | NotChainTarget { .. }
            | NoChainPending => ErrorCategory::ChainProtocolViolation,
            InvalidCount
            | InsufficientPieces { .. }
            | UnknownPiece { .. }
            | DuplicatePiece { .. }
            | EmptyRetrieve
            | RetrieveWouldEmpty { .. } => ErrorCategory::ResourceViolation,
            HandOverflow | StackLimitBroken { .. } => ErrorCategory::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            Geometry(GeometryError::OffBoard { .. }) => "ACTION_GEOMETRY_OFF_BOARD",
            Geometry(GeometryError::InvalidPattern { .. }) => "ACTION_GEOMETRY_INVALID_PATTERN",
            Geometry(GeometryError::Blocked { .. }) => "ACTION_GEOMETRY_BLOCKED",
            JumpOntoEmpty { .. } => "ACTION_JUMP_ONTO_EMPTY",
            PointBlankCannon { .. } => "ACTION_POINT_BLANK_CANNON",
            OffBoard { .. } => "ACTION_OFF_BOARD",
            EmptyCell { .. } => "ACTION_EMPTY_CELL",
            HiddenPiece { .. } => "ACTION_HIDDEN_PIECE",
            HiddenTarget { .. } => "ACTION_HIDDEN_TARGET",
            AlreadyRevealed { .. } => "ACTION_ALREADY_REVEALED",
            MoveToSelf { .. } => "ACTION_MOVE_TO_SELF",
            NotOwner { .. } => "ACTION_NOT_OWNER",
            DestinationNotOwned { .. } => "ACTION_DESTINATION_NOT_OWNED",
            Capture(CaptureError::Outweighed { .. }) => "ACTION_OUTWEIGHED",
            Capture(CaptureError::Outranked { .. }) => "ACTION_OUTRANKED",
            Composition(CompositionError::ColorMismatch) => "ACTION_STACK_COLOR_MISMATCH",
            Composition(CompositionError::KindMismatch { .. }) => "ACTION_STACK_KIND_MISMATCH",
            Composition(CompositionError::SizeLimit { .. }) => "ACTION_STACK_SIZE_LIMIT",
            ChainPending { .. } => "ACTION_CHAIN_PENDING",
            WrongChainPiece { .. } => "ACTION_WRONG_CHAIN_PIECE",
            ChainRequiresInteraction { .. } => "ACTION_CHAIN_REQUIRES_INTERACTION",
            NotChainTarget { .. } => "ACTION_NOT_CHAIN_TARGET",
            NoChainPending => "ACTION_NO_CHAIN_PENDING",
            InvalidCount => "ACTION_INVALID_COUNT",
            InsufficientPieces { .. } => "ACTION_INSUFFICIENT_PIECES",
            UnknownPiece { .. } => "ACTION_UNKNOWN_PIECE",
            DuplicatePiece { .. } => "ACTION_DUPLICATE_PIECE",
            EmptyRetrieve => "ACTION_EMPTY_RETRIEVE",
            RetrieveWouldEmpty { .. } => "ACTION_RETRIEVE_WOULD_EMPTY",
            HandOverflow => "ACTION_HAND_OVERFLOW",
            StackLimitBroken { .. } => "ACTION_STACK_LIMIT_BROKEN",
        }
    }
}
