use crate::action::has_legal_action;
use crate::state::{GameState, GameStatus, Seat, WinReason};

use super::GameEngine;

/// Turn switching and win detection for GameEngine.
impl<'a> GameEngine<'a> {
    /// Returns the seat whose action the engine accepts next.
    pub fn current_actor(&self) -> Seat {
        self.state.active_seat()
    }

    /// Hands the turn to the opponent and checks whether they have lost.
    pub(super) fn end_turn(&mut self) {
        self.state.turn.advance();

        if let Some((winner, reason)) = detect_winner(self.state) {
            self.state.status = GameStatus::Finished { winner, reason };
            tracing::info!(
                winner = %winner,
                ?reason,
                turns = self.state.turn.number,
                "game finished"
            );
        }
    }
}

/// Decides whether the active seat has lost, assuming no chain is pending.
///
/// Elimination is checked first: once every board piece is face-up, a seat
/// with no piece of its color left on the board loses, even if its hand is
/// not empty. Buried pieces still count. Otherwise a seat with no legal
/// action loses by stalemate.
pub fn detect_winner(state: &GameState) -> Option<(Seat, WinReason)> {
    let loser = state.active_seat();
    let winner = loser.opponent();

    if state.colors_assigned && state.board.all_revealed() {
        let remaining = state
            .color_of(loser)
            .map_or(0, |color| state.board.pieces_of(color));
        if remaining == 0 {
            return Some((winner, WinReason::Elimination));
        }
    }

    if !has_legal_action(state, loser) {
        return Some((winner, WinReason::Stalemate));
    }

    None
}
