//! Player actions.
//!
//! Each action kind is a small struct implementing [`ActionTransition`]; the
//! engine drives it through `pre_validate → apply → post_validate`.
//!
//! # Module Structure
//!
//! - `error`: [`ActionError`], the reason an action is refused
//! - `flip`, `movement`, `deploy`, `retrieve`, `pass`: the five action kinds
//! - `validation`: checks shared by several action kinds
//! - `available`: the legal action enumerator

pub mod available;
pub mod deploy;
pub mod error;
pub mod flip;
pub mod movement;
pub mod pass;
pub mod retrieve;
mod validation;

pub use available::{has_legal_action, interaction_targets, legal_actions};
pub use deploy::DeployAction;
pub use error::ActionError;
pub use flip::FlipAction;
pub use movement::{MoveAction, ResolutionMode};
pub use pass::PassAction;
pub use retrieve::RetrieveAction;

use crate::state::{GameState, PieceId, PieceKind, Position, Seat};

/// What the engine does with the turn once an action has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnFlow {
    /// Hand the turn to the opponent and run win detection.
    EndTurn,
    /// The same player must continue the chain from this cell (or pass).
    ContinueChain(Position),
}

/// Defines how a concrete action variant mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. `actor` is the
/// seat the action is performed for; the engine has already checked that it
/// is the active seat.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _actor: Seat) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, actor: Seat) -> Result<TurnFlow, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _actor: Seat) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Any action a player can submit.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PlayerAction {
    Flip(FlipAction),
    Move(MoveAction),
    Deploy(DeployAction),
    Retrieve(RetrieveAction),
    Pass(PassAction),
}

impl PlayerAction {
    pub fn flip(location: Position) -> Self {
        Self::Flip(FlipAction::new(location))
    }

    /// A move resolved in the default To-Hand mode.
    pub fn step(from: Position, to: Position) -> Self {
        Self::Move(MoveAction::new(from, to, ResolutionMode::default()))
    }

    pub fn move_with(from: Position, to: Position, mode: ResolutionMode) -> Self {
        Self::Move(MoveAction::new(from, to, mode))
    }

    pub fn deploy(kind: PieceKind, count: usize, destination: Position) -> Self {
        Self::Deploy(DeployAction::new(kind, count, destination))
    }

    pub fn retrieve(source: Position, piece_ids: Vec<PieceId>) -> Self {
        Self::Retrieve(RetrieveAction::new(source, piece_ids))
    }

    pub fn pass() -> Self {
        Self::Pass(PassAction)
    }

    /// Returns the snake_case name of the action kind, for logs.
    pub fn as_snake_case(&self) -> &'static str {
        self.into()
    }

    /// Runs only the pre-validation hook; used by the enumerator to test
    /// candidates without touching state.
    pub fn check(&self, state: &GameState, actor: Seat) -> Result<(), ActionError> {
        match self {
            PlayerAction::Flip(action) => action.pre_validate(state, actor),
            PlayerAction::Move(action) => action.pre_validate(state, actor),
            PlayerAction::Deploy(action) => action.pre_validate(state, actor),
            PlayerAction::Retrieve(action) => action.pre_validate(state, actor),
            PlayerAction::Pass(action) => action.pre_validate(state, actor),
        }
    }
}

impl From<FlipAction> for PlayerAction {
    fn from(action: FlipAction) -> Self {
        Self::Flip(action)
    }
}

impl From<MoveAction> for PlayerAction {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<DeployAction> for PlayerAction {
    fn from(action: DeployAction) -> Self {
        Self::Deploy(action)
    }
}

impl From<RetrieveAction> for PlayerAction {
    fn from(action: RetrieveAction) -> Self {
        Self::Retrieve(action)
    }
}
