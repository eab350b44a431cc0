use super::validation::{check_stack_limit, owned_stack, require_idle, require_on_board};
use super::{ActionError, ActionTransition, TurnFlow};
use crate::state::{GameState, PieceId, Position, Seat};

/// Pulls chosen pieces out of a controlled stack into the actor's hand. At
/// least one piece must stay behind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetrieveAction {
    pub source: Position,
    pub piece_ids: Vec<PieceId>,
}

impl RetrieveAction {
    pub fn new(source: Position, piece_ids: Vec<PieceId>) -> Self {
        Self { source, piece_ids }
    }
}

impl ActionTransition for RetrieveAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, actor: Seat) -> Result<(), Self::Error> {
        require_idle(state)?;
        require_on_board(self.source)?;
        let stack = owned_stack(state, actor, self.source)?;

        if self.piece_ids.is_empty() {
            return Err(ActionError::EmptyRetrieve);
        }
        for (index, id) in self.piece_ids.iter().enumerate() {
            if self.piece_ids[..index].contains(id) {
                return Err(ActionError::DuplicatePiece { id: *id });
            }
            if !stack.contains(*id) {
                return Err(ActionError::UnknownPiece { id: *id });
            }
        }
        if self.piece_ids.len() >= stack.weight() {
            return Err(ActionError::RetrieveWouldEmpty {
                position: self.source,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, actor: Seat) -> Result<TurnFlow, Self::Error> {
        let stack = state.board.take(self.source).ok_or(ActionError::EmptyCell {
            position: self.source,
        })?;
        let color = stack.owner();
        let (removed, remaining) = stack.without(&self.piece_ids);
        let remaining = remaining.ok_or(ActionError::RetrieveWouldEmpty {
            position: self.source,
        })?;
        state.board.place(self.source, remaining);

        let hand = &mut state.player_mut(actor).hand;
        for piece in removed {
            if !hand.add(piece.captured_by(color)) {
                return Err(ActionError::HandOverflow);
            }
        }

        Ok(TurnFlow::EndTurn)
    }

    fn post_validate(&self, state: &GameState, _actor: Seat) -> Result<(), Self::Error> {
        check_stack_limit(state, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Board, Color, Piece, PieceKind, Stack};

    /// Red soldier stack with a captured black soldier at the bottom.
    fn setup() -> (GameState, Position) {
        let at = Position::new(2, 2);
        let mut board = Board::empty();
        board.place(
            at,
            Stack::from_pieces(&[
                Piece::revealed(PieceId(7), PieceKind::Soldier, Color::Black),
                Piece::revealed(PieceId(1), PieceKind::Soldier, Color::Red),
                Piece::revealed(PieceId(2), PieceKind::Soldier, Color::Red),
            ])
            .unwrap(),
        );
        let mut state = GameState::new(GameConfig::default(), board);
        state.assign_colors(Seat::First, Color::Red);
        (state, at)
    }

    #[test]
    fn retrieved_pieces_join_hand_in_owner_color() {
        let (mut state, at) = setup();
        let action = RetrieveAction::new(at, vec![PieceId(7), PieceId(2)]);

        action.pre_validate(&state, Seat::First).unwrap();
        assert_eq!(action.apply(&mut state, Seat::First), Ok(TurnFlow::EndTurn));
        action.post_validate(&state, Seat::First).unwrap();

        let stack = state.board.get(at).unwrap();
        assert_eq!(stack.weight(), 1);
        assert_eq!(stack.top().id, PieceId(1));

        let hand = &state.player(Seat::First).hand;
        assert_eq!(hand.len(), 2);
        assert!(hand.pieces().iter().all(|piece| piece.color == Color::Red));
        assert_eq!(state.total_pieces(), 3);
    }

    #[test]
    fn refuses_to_empty_the_stack() {
        let (state, at) = setup();
        assert_eq!(
            RetrieveAction::new(at, vec![PieceId(7), PieceId(1), PieceId(2)])
                .pre_validate(&state, Seat::First),
            Err(ActionError::RetrieveWouldEmpty { position: at })
        );
    }

    #[test]
    fn validates_piece_lists() {
        let (state, at) = setup();
        assert_eq!(
            RetrieveAction::new(at, vec![]).pre_validate(&state, Seat::First),
            Err(ActionError::EmptyRetrieve)
        );
        assert_eq!(
            RetrieveAction::new(at, vec![PieceId(1), PieceId(1)]).pre_validate(&state, Seat::First),
            Err(ActionError::DuplicatePiece { id: PieceId(1) })
        );
        assert_eq!(
            RetrieveAction::new(at, vec![PieceId(30)]).pre_validate(&state, Seat::First),
            Err(ActionError::UnknownPiece { id: PieceId(30) })
        );
        assert_eq!(
            RetrieveAction::new(at, vec![PieceId(1)]).pre_validate(&state, Seat::Second),
            Err(ActionError::NotOwner { position: at })
        );
    }
}
