use super::{Position, Seat};

/// Whether the active player's turn is locked into a chain capture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChainState {
    /// No chain pending; any action kind except PASS may be attempted.
    #[default]
    Idle,
    /// The stack at `at` just completed an interaction and can interact again.
    /// Only a MOVE from `at` or a PASS is accepted.
    Chaining { at: Position },
}

impl ChainState {
    pub const fn pending_at(self) -> Option<Position> {
        match self {
            ChainState::Idle => None,
            ChainState::Chaining { at } => Some(at),
        }
    }

    pub const fn is_chaining(self) -> bool {
        matches!(self, ChainState::Chaining { .. })
    }
}

/// Turn bookkeeping: who acts, how many turns have passed, pending chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// The seat whose action the engine accepts next.
    pub active: Seat,

    /// Completed turns. A chain of several moves counts as one turn.
    pub number: u32,

    pub chain: ChainState,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            active: Seat::First,
            number: 0,
            chain: ChainState::Idle,
        }
    }

    /// Hands the turn to the other seat.
    pub fn advance(&mut self) {
        self.active = self.active.opponent();
        self.number += 1;
        self.chain = ChainState::Idle;
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
