//! Turn scheduling and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! checks whose turn it is, drives the action through its transition phases,
//! verifies piece conservation, and then either keeps the turn open for a
//! chain capture or hands it over and runs win detection.
//!
//! Most callers want the pure wrappers [`apply_action`] and
//! [`apply_action_as`], which never touch their input.

mod errors;
mod transition;
mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use turns::detect_winner;

use crate::action::{PlayerAction, TurnFlow};
use crate::error::GameError;
use crate::state::{GameState, Seat};

/// Game engine that executes actions against a mutable state.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
///
/// A failed `execute` may leave the state partially written. Run the engine
/// on a scratch copy (as [`apply_action`] does) when the input must survive a
/// rejection.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes `action` on behalf of `actor`.
    ///
    /// Rejects actions once the game is finished and actions from the seat
    /// that is not on turn. On success, returns whether the turn ended or a
    /// chain capture is pending.
    pub fn execute(&mut self, actor: Seat, action: &PlayerAction) -> Result<TurnFlow, ExecuteError> {
        self.validate_actor(actor)?;

        let before = self.state.total_pieces();
        let flow = transition::execute_transition(action, self.state, actor)?;
        let after = self.state.total_pieces();
        if before != after {
            return Err(ExecuteError::PieceCountChanged { before, after });
        }

        self.state.last_action = Some(action.clone());
        self.state.error = None;

        match flow {
            TurnFlow::EndTurn => {
                tracing::debug!(
                    seat = %actor,
                    action = action.as_snake_case(),
                    turn = self.state.turn.number,
                    "action accepted"
                );
                self.end_turn();
            }
            TurnFlow::ContinueChain(at) => {
                tracing::debug!(
                    seat = %actor,
                    action = action.as_snake_case(),
                    chain_at = %at,
                    "chain capture pending"
                );
            }
        }

        Ok(flow)
    }

    /// Validates that the game is running and `actor` is on turn.
    fn validate_actor(&self, actor: Seat) -> Result<(), ExecuteError> {
        if let Some(winner) = self.state.winner() {
            return Err(ExecuteError::GameFinished { winner });
        }
        let current = self.state.active_seat();
        if actor != current {
            return Err(ExecuteError::ActorNotCurrent { actor, current });
        }
        Ok(())
    }
}

/// Applies `action` for the active seat and returns the resulting state.
///
/// The input is never modified. On rejection the result is a copy of the
/// input whose `error` field explains why.
pub fn apply_action(state: &GameState, action: &PlayerAction) -> GameState {
    apply_action_as(state, state.active_seat(), action)
}

/// Like [`apply_action`], but on behalf of an explicit seat. Acting out of
/// turn is rejected with [`ExecuteError::ActorNotCurrent`].
pub fn apply_action_as(state: &GameState, actor: Seat, action: &PlayerAction) -> GameState {
    let mut next = state.clone();
    match GameEngine::new(&mut next).execute(actor, action) {
        Ok(_) => next,
        Err(error) => {
            tracing::debug!(
                seat = %actor,
                action = action.as_snake_case(),
                code = error.error_code(),
                %error,
                "action rejected"
            );
            let mut rejected = state.clone();
            rejected.error = Some(error);
            rejected
        }
    }
}

/// Applies `actions` in order, each for the seat on turn, stopping at the
/// first rejection.
pub fn replay<'a, I>(initial: &GameState, actions: I) -> Result<GameState, ExecuteError>
where
    I: IntoIterator<Item = &'a PlayerAction>,
{
    let mut state = initial.clone();
    for action in actions {
        let actor = state.active_seat();
        GameEngine::new(&mut state).execute(actor, action)?;
    }
    Ok(state)
}
