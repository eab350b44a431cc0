//! Checks shared by several action kinds.

use super::ActionError;
use crate::state::{ChainState, GameState, Position, Seat, Stack};

/// FLIP, DEPLOY and RETRIEVE are only accepted while no chain is pending.
pub(super) fn require_idle(state: &GameState) -> Result<(), ActionError> {
    match state.turn.chain {
        ChainState::Idle => Ok(()),
        ChainState::Chaining { at } => Err(ActionError::ChainPending { at }),
    }
}

pub(super) fn require_on_board(position: Position) -> Result<(), ActionError> {
    if position.is_on_board() {
        Ok(())
    } else {
        Err(ActionError::OffBoard { position })
    }
}

/// The face-up stack at `position`, provided `actor` controls it.
pub(super) fn owned_stack(
    state: &GameState,
    actor: Seat,
    position: Position,
) -> Result<&Stack, ActionError> {
    let stack = state
        .board
        .get(position)
        .ok_or(ActionError::EmptyCell { position })?;
    if !stack.is_revealed() {
        return Err(ActionError::HiddenPiece { position });
    }
    if !state.player(actor).owns(stack.owner()) {
        return Err(ActionError::NotOwner { position });
    }
    Ok(stack)
}

/// Post-condition for every cell an action wrote to.
pub(super) fn check_stack_limit(state: &GameState, position: Position) -> Result<(), ActionError> {
    match state.board.get(position) {
        Some(stack) if !stack.within_limit() => Err(ActionError::StackLimitBroken { position }),
        _ => Ok(()),
    }
}
