//! Common error infrastructure for banqi-core.
//!
//! This module provides shared types and traits used across all error types in
//! the crate. Domain-specific errors (e.g., `GeometryError`, `ActionError`) are
//! defined in their respective modules alongside the rules they enforce.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each rule layer has its own error type with specific variants
//! - **Categorization**: Every error maps to exactly one [`ErrorCategory`]
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Non-fatal**: Rejections are reported through the state, never by panicking

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The player may try a different action in the same state
/// - **Validation**: Malformed input (out-of-range coordinates, unknown ids)
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an engine bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Rule family a rejected action violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// Acting out of turn, or acting after the game has ended.
    TurnViolation,
    /// Movement pattern or screen count invalid for the mover's base type.
    GeometryViolation,
    /// Hidden piece, empty cell, moving onto self, wrong owner.
    TargetStateViolation,
    /// Capture attempted with insufficient weight or rank.
    RankWeightViolation,
    /// Type mismatch or size limit exceeded when stacking.
    StackCompositionViolation,
    /// Anything other than a qualifying MOVE or PASS while a chain is pending.
    ChainProtocolViolation,
    /// Not enough matching pieces in hand, unknown piece identifier.
    ResourceViolation,
    /// Engine invariant broken; never produced by well-formed play.
    Internal,
}

/// Common trait for all banqi-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the rule family this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for logging, metrics, and asserting on rejections in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
