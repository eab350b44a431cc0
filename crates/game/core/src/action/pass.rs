use super::{ActionError, ActionTransition, TurnFlow};
use crate::state::{ChainState, GameState, Seat};

/// Declines to continue a pending chain capture, ending the turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassAction;

impl ActionTransition for PassAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _actor: Seat) -> Result<(), Self::Error> {
        if state.turn.chain.is_chaining() {
            Ok(())
        } else {
            Err(ActionError::NoChainPending)
        }
    }

    fn apply(&self, state: &mut GameState, _actor: Seat) -> Result<TurnFlow, Self::Error> {
        state.turn.chain = ChainState::Idle;
        Ok(TurnFlow::EndTurn)
    }
}
