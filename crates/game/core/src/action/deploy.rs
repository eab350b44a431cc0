use super::validation::{check_stack_limit, require_idle, require_on_board};
use super::{ActionError, ActionTransition, TurnFlow};
use crate::rules::{can_stack_on, check_height};
use crate::state::{GameState, PieceKind, Position, Seat, Stack};

/// Places `count` hand pieces of one kind onto an empty cell or on top of a
/// stack the actor already controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeployAction {
    pub kind: PieceKind,
    pub count: usize,
    pub destination: Position,
}

impl DeployAction {
    pub fn new(kind: PieceKind, count: usize, destination: Position) -> Self {
        Self {
            kind,
            count,
            destination,
        }
    }
}

impl ActionTransition for DeployAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, actor: Seat) -> Result<(), Self::Error> {
        require_idle(state)?;
        if self.count == 0 {
            return Err(ActionError::InvalidCount);
        }
        require_on_board(self.destination)?;

        let player = state.player(actor);
        let incoming = player
            .hand
            .peek(self.kind, self.count)
            .ok_or(ActionError::InsufficientPieces {
                kind: self.kind,
                requested: self.count,
                available: player.hand.count_of(self.kind),
            })?;

        let Some(stack) = state.board.get(self.destination) else {
            check_height(incoming)?;
            return Ok(());
        };

        if !stack.is_revealed() {
            return Err(ActionError::HiddenTarget {
                position: self.destination,
            });
        }
        if !player.owns(stack.owner()) {
            return Err(ActionError::DestinationNotOwned {
                position: self.destination,
            });
        }
        can_stack_on(stack.pieces(), &incoming, true)?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, actor: Seat) -> Result<TurnFlow, Self::Error> {
        let available = state.player(actor).hand.count_of(self.kind);
        let pieces = state
            .player_mut(actor)
            .hand
            .take(self.kind, self.count)
            .ok_or(ActionError::InsufficientPieces {
                kind: self.kind,
                requested: self.count,
                available,
            })?;
        let incoming = Stack::from_pieces(&pieces).ok_or(ActionError::StackLimitBroken {
            position: self.destination,
        })?;

        let placed = match state.board.take(self.destination) {
            Some(existing) => existing
                .stacked_with(&incoming)
                .ok_or(ActionError::StackLimitBroken {
                    position: self.destination,
                })?,
            None => incoming,
        };
        state.board.place(self.destination, placed);

        Ok(TurnFlow::EndTurn)
    }

    fn post_validate(&self, state: &GameState, _actor: Seat) -> Result<(), Self::Error> {
        check_stack_limit(state, self.destination)
    }
}
