use super::validation::{require_idle, require_on_board};
use super::{ActionError, ActionTransition, TurnFlow};
use crate::state::{GameState, Position, Seat};

/// Turns a face-down piece face-up. The first flip of the game also decides
/// which color each seat plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlipAction {
    pub location: Position,
}

impl FlipAction {
    pub fn new(location: Position) -> Self {
        Self { location }
    }
}

impl ActionTransition for FlipAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _actor: Seat) -> Result<(), Self::Error> {
        require_idle(state)?;
        require_on_board(self.location)?;

        let stack = state.board.get(self.location).ok_or(ActionError::EmptyCell {
            position: self.location,
        })?;
        if stack.is_revealed() {
            return Err(ActionError::AlreadyRevealed {
                position: self.location,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, actor: Seat) -> Result<TurnFlow, Self::Error> {
        let stack = state
            .board
            .get_mut(self.location)
            .ok_or(ActionError::EmptyCell {
                position: self.location,
            })?;
        let piece = stack.top_mut();
        piece.face_up = true;
        let color = piece.color;

        if !state.colors_assigned {
            state.assign_colors(actor, color);
        }

        Ok(TurnFlow::EndTurn)
    }

    fn post_validate(&self, state: &GameState, _actor: Seat) -> Result<(), Self::Error> {
        match state.board.get(self.location) {
            Some(stack) if stack.is_revealed() => Ok(()),
            Some(_) => Err(ActionError::HiddenPiece {
                position: self.location,
            }),
            None => Err(ActionError::EmptyCell {
                position: self.location,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Board, ChainState, Color, Piece, PieceId, PieceKind, Stack};

    fn state_with_hidden(at: Position, color: Color) -> GameState {
        let mut board = Board::empty();
        board.place(
            at,
            Stack::single(Piece::new(PieceId(0), PieceKind::Horse, color)),
        );
        GameState::new(GameConfig::default(), board)
    }

    #[test]
    fn first_flip_assigns_colors() {
        let at = Position::new(1, 3);
        let mut state = state_with_hidden(at, Color::Black);
        let flip = FlipAction::new(at);

        flip.pre_validate(&state, Seat::First).unwrap();
        assert_eq!(flip.apply(&mut state, Seat::First), Ok(TurnFlow::EndTurn));

        assert!(state.board.get(at).unwrap().is_revealed());
        assert_eq!(state.color_of(Seat::First), Some(Color::Black));
        assert_eq!(state.color_of(Seat::Second), Some(Color::Red));
    }

    #[test]
    fn later_flips_keep_existing_colors() {
        let at = Position::new(0, 0);
        let mut state = state_with_hidden(at, Color::Black);
        state.assign_colors(Seat::First, Color::Red);

        FlipAction::new(at).apply(&mut state, Seat::First).unwrap();
        assert_eq!(state.color_of(Seat::First), Some(Color::Red));
    }

    #[test]
    fn rejects_revealed_empty_and_chaining() {
        let at = Position::new(0, 0);
        let mut state = state_with_hidden(at, Color::Red);

        assert_eq!(
            FlipAction::new(Position::new(0, 1)).pre_validate(&state, Seat::First),
            Err(ActionError::EmptyCell {
                position: Position::new(0, 1)
            })
        );

        state.turn.chain = ChainState::Chaining {
            at: Position::new(3, 3),
        };
        assert_eq!(
            FlipAction::new(at).pre_validate(&state, Seat::First),
            Err(ActionError::ChainPending {
                at: Position::new(3, 3)
            })
        );

        state.turn.chain = ChainState::Idle;
        state.board.get_mut(at).unwrap().top_mut().face_up = true;
        assert_eq!(
            FlipAction::new(at).pre_validate(&state, Seat::First),
            Err(ActionError::AlreadyRevealed { position: at })
        );
    }
}
