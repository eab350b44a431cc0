//! Action transition dispatch and execution logic.

use crate::action::{ActionTransition, PlayerAction, TurnFlow};
use crate::state::{GameState, Seat};

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and report how the turn continues
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    actor: Seat,
) -> Result<TurnFlow, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, actor)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let flow = transition
        .apply(state, actor)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, actor)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(flow)
}

/// Routes each action kind to its transition.
pub(super) fn execute_transition(
    action: &PlayerAction,
    state: &mut GameState,
    actor: Seat,
) -> Result<TurnFlow, ExecuteError> {
    match action {
        PlayerAction::Flip(transition) => {
            drive_transition(transition, state, actor).map_err(ExecuteError::Flip)
        }
        PlayerAction::Move(transition) => {
            drive_transition(transition, state, actor).map_err(ExecuteError::Move)
        }
        PlayerAction::Deploy(transition) => {
            drive_transition(transition, state, actor).map_err(ExecuteError::Deploy)
        }
        PlayerAction::Retrieve(transition) => {
            drive_transition(transition, state, actor).map_err(ExecuteError::Retrieve)
        }
        PlayerAction::Pass(transition) => {
            drive_transition(transition, state, actor).map_err(ExecuteError::Pass)
        }
    }
}
