//! Authoritative game state representation.
//!
//! This module owns the data structures that describe pieces, stacks, the
//! board, hands, and turn bookkeeping. Collaborators clone or query this state
//! but it only ever advances through [`crate::engine`].
pub mod error;
pub mod types;

pub use error::InitializationError;
pub use types::{
    Board, ChainState, Color, Hand, Piece, PieceId, PieceKind, Player, Position, Seat, Stack,
    StackPieces, TurnState, base_kind_of,
};

use crate::action::PlayerAction;
use crate::config::GameConfig;
use crate::engine::ExecuteError;

/// How a finished game was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WinReason {
    /// Board fully revealed and none of the loser's pieces remain on it.
    Elimination,
    /// The loser has no legal action on their turn.
    Stalemate,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    InProgress,
    Finished { winner: Seat, reason: WinReason },
}

/// Canonical snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Rule switches in force for this game. Set at initialization.
    pub config: GameConfig,

    pub board: Board,

    /// Indexed by [`Seat::index`].
    pub players: [Player; 2],

    /// Set by the first FLIP of the game.
    pub colors_assigned: bool,

    pub turn: TurnState,

    pub status: GameStatus,

    /// Last accepted action.
    pub last_action: Option<PlayerAction>,

    /// Why the last attempted action was rejected. Cleared on success.
    pub error: Option<ExecuteError>,
}

impl GameState {
    /// Creates an in-progress state around `board` with colors unassigned and
    /// empty hands. Used by the dealer and by scenario setups.
    pub fn new(config: GameConfig, board: Board) -> Self {
        Self {
            config,
            board,
            players: [Player::new(), Player::new()],
            colors_assigned: false,
            turn: TurnState::new(),
            status: GameStatus::InProgress,
            last_action: None,
            error: None,
        }
    }

    /// Assigns `color` to `seat` and the opposite color to the other seat.
    pub fn assign_colors(&mut self, seat: Seat, color: Color) {
        self.players[seat.index()].color = Some(color);
        self.players[seat.opponent().index()].color = Some(color.opposite());
        self.colors_assigned = true;
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    pub fn active_seat(&self) -> Seat {
        self.turn.active
    }

    pub fn color_of(&self, seat: Seat) -> Option<Color> {
        self.player(seat).color
    }

    /// Seat playing `color`, once colors are assigned.
    pub fn seat_of(&self, color: Color) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|seat| self.player(*seat).owns(color))
    }

    /// Cell holding the stack that must keep capturing, if any.
    pub fn pending_chain(&self) -> Option<Position> {
        self.turn.chain.pending_at()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Finished { winner, .. } => Some(winner),
        }
    }

    pub fn pieces_in_hands(&self) -> usize {
        self.players.iter().map(|player| player.hand.len()).sum()
    }

    /// Board plus hands. Always [`GameConfig::PIECE_COUNT`] for a dealt game.
    pub fn total_pieces(&self) -> usize {
        self.board.piece_count() + self.pieces_in_hands()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigning_colors_is_symmetric() {
        let mut state = GameState::new(GameConfig::default(), Board::empty());
        assert!(!state.colors_assigned);
        assert_eq!(state.seat_of(Color::Red), None);

        state.assign_colors(Seat::Second, Color::Red);
        assert!(state.colors_assigned);
        assert_eq!(state.color_of(Seat::First), Some(Color::Black));
        assert_eq!(state.seat_of(Color::Red), Some(Seat::Second));
    }

    #[test]
    fn fresh_state_is_idle_and_in_progress() {
        let state = GameState::new(GameConfig::default(), Board::empty());
        assert_eq!(state.active_seat(), Seat::First);
        assert_eq!(state.pending_chain(), None);
        assert!(!state.is_terminal());
        assert_eq!(state.total_pieces(), 0);
    }
}
