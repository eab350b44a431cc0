use super::validation::{check_stack_limit, owned_stack};
use super::{ActionError, ActionTransition, TurnFlow};
use crate::rules::{GeometryError, Target, check_stackable, engage, has_chain_options, resolve_interaction};
use crate::state::{ChainState, GameState, Position, Seat};

/// How a move onto an occupied cell settles the pieces already there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ResolutionMode {
    /// Destination pieces go to the mover's hand.
    #[default]
    ToHand,
    /// The mover is stacked on top of the destination pieces.
    StackIfPossible,
}

/// Moves the whole stack at `from` to `to`, resolving an interaction if `to`
/// is occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub from: Position,
    pub to: Position,
    pub mode: ResolutionMode,
}

impl MoveAction {
    pub fn new(from: Position, to: Position, mode: ResolutionMode) -> Self {
        Self { from, to, mode }
    }
}

impl ActionTransition for MoveAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, actor: Seat) -> Result<(), Self::Error> {
        for position in [self.from, self.to] {
            if !position.is_on_board() {
                return Err(GeometryError::OffBoard { position }.into());
            }
        }
        if self.from == self.to {
            return Err(ActionError::MoveToSelf {
                position: self.from,
            });
        }

        let chain = state.turn.chain;
        if let ChainState::Chaining { at } = chain {
            if self.from != at {
                return Err(ActionError::WrongChainPiece {
                    expected: at,
                    found: self.from,
                });
            }
        }

        owned_stack(state, actor, self.from)?;
        let engagement = engage(&state.board, &state.config, self.from, self.to)?;

        if chain.is_chaining() {
            match engagement.target {
                Target::Empty => {
                    return Err(ActionError::ChainRequiresInteraction { to: self.to });
                }
                Target::Friendly if !state.config.friendly_chain => {
                    return Err(ActionError::NotChainTarget { to: self.to });
                }
                _ => {}
            }
        }

        if engagement.is_interaction() && self.mode == ResolutionMode::StackIfPossible {
            check_stackable(&state.board, self.from, self.to, engagement.target)?;
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, actor: Seat) -> Result<TurnFlow, Self::Error> {
        let engagement = engage(&state.board, &state.config, self.from, self.to)?;

        if !engagement.is_interaction() {
            let mover = state.board.take(self.from).ok_or(ActionError::EmptyCell {
                position: self.from,
            })?;
            state.board.place(self.to, mover);
            state.turn.chain = ChainState::Idle;
            return Ok(TurnFlow::EndTurn);
        }

        resolve_interaction(
            state,
            actor,
            self.from,
            self.to,
            self.mode,
            engagement.target,
        )?;

        if has_chain_options(&state.board, &state.config, self.to) {
            state.turn.chain = ChainState::Chaining { at: self.to };
            Ok(TurnFlow::ContinueChain(self.to))
        } else {
            state.turn.chain = ChainState::Idle;
            Ok(TurnFlow::EndTurn)
        }
    }

    fn post_validate(&self, state: &GameState, _actor: Seat) -> Result<(), Self::Error> {
        if !state.board.is_empty_at(self.from) {
            return Err(ActionError::StackLimitBroken {
                position: self.from,
            });
        }
        check_stack_limit(state, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::rules::CompositionError;
    use crate::state::{Board, Color, Piece, PieceId, PieceKind, Stack};

    fn setup(pieces: &[(u8, u8, PieceKind, Color)]) -> GameState {
        let mut board = Board::empty();
        for (id, (row, col, kind, color)) in pieces.iter().enumerate() {
            board.place(
                Position::new(*row, *col),
                Stack::single(Piece::revealed(PieceId(id as u8), *kind, *color)),
            );
        }
        let mut state = GameState::new(GameConfig::default(), board);
        state.assign_colors(Seat::First, Color::Red);
        state
    }

    fn run(state: &mut GameState, action: MoveAction) -> Result<TurnFlow, ActionError> {
        action.pre_validate(state, Seat::First)?;
        let flow = action.apply(state, Seat::First)?;
        action.post_validate(state, Seat::First)?;
        Ok(flow)
    }

    #[test]
    fn plain_move_relocates_the_stack() {
        let mut state = setup(&[(1, 1, PieceKind::Advisor, Color::Red)]);
        let action = MoveAction::new(Position::new(1, 1), Position::new(1, 2), ResolutionMode::ToHand);

        assert_eq!(run(&mut state, action), Ok(TurnFlow::EndTurn));
        assert!(state.board.is_empty_at(Position::new(1, 1)));
        assert_eq!(
            state.board.get(Position::new(1, 2)).unwrap().top().kind,
            PieceKind::Advisor
        );
    }

    #[test]
    fn to_hand_capture_recolors_into_movers_hand() {
        let mut state = setup(&[
            (0, 0, PieceKind::Chariot, Color::Red),
            (0, 1, PieceKind::Horse, Color::Black),
        ]);
        let action = MoveAction::new(Position::new(0, 0), Position::new(0, 1), ResolutionMode::ToHand);

        assert_eq!(run(&mut state, action), Ok(TurnFlow::EndTurn));
        let hand = &state.player(Seat::First).hand;
        assert_eq!(hand.len(), 1);
        assert_eq!(hand.pieces()[0].color, Color::Red);
        assert_eq!(hand.pieces()[0].kind, PieceKind::Horse);
        assert_eq!(state.total_pieces(), 2);
    }

    #[test]
    fn horse_cannot_step_orthogonally() {
        let mut state = setup(&[
            (0, 0, PieceKind::Horse, Color::Red),
            (0, 1, PieceKind::Horse, Color::Black),
        ]);
        let action = MoveAction::new(
            Position::new(0, 0),
            Position::new(0, 1),
            ResolutionMode::StackIfPossible,
        );
        assert!(matches!(
            run(&mut state, action),
            Err(ActionError::Geometry(GeometryError::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn stack_capture_keeps_captives_underneath() {
        let mut state = setup(&[
            (0, 0, PieceKind::Soldier, Color::Red),
            (0, 1, PieceKind::Soldier, Color::Black),
        ]);
        let action = MoveAction::new(
            Position::new(0, 0),
            Position::new(0, 1),
            ResolutionMode::StackIfPossible,
        );
        assert_eq!(run(&mut state, action), Ok(TurnFlow::EndTurn));
        let stack = state.board.get(Position::new(0, 1)).unwrap();
        assert_eq!(stack.weight(), 2);
        assert_eq!(stack.owner(), Color::Red);
        assert_eq!(stack.pieces()[0].color, Color::Black);
    }

    #[test]
    fn stack_mode_rejects_incompatible_kinds_without_fallback() {
        let mut state = setup(&[
            (0, 0, PieceKind::Advisor, Color::Red),
            (0, 1, PieceKind::Elephant, Color::Black),
        ]);
        let before = state.clone();
        let action = MoveAction::new(
            Position::new(0, 0),
            Position::new(0, 1),
            ResolutionMode::StackIfPossible,
        );
        assert_eq!(
            action.pre_validate(&state, Seat::First),
            Err(ActionError::Composition(CompositionError::KindMismatch {
                base: PieceKind::Elephant,
                incoming: PieceKind::Advisor
            }))
        );
        assert!(run(&mut state, action).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn capture_with_follow_up_enters_chain() {
        let mut state = setup(&[
            (0, 0, PieceKind::Chariot, Color::Red),
            (0, 3, PieceKind::Cannon, Color::Black),
            (0, 6, PieceKind::Soldier, Color::Black),
        ]);
        let action = MoveAction::new(Position::new(0, 0), Position::new(0, 3), ResolutionMode::ToHand);

        assert_eq!(
            run(&mut state, action),
            Ok(TurnFlow::ContinueChain(Position::new(0, 3)))
        );
        assert_eq!(state.pending_chain(), Some(Position::new(0, 3)));
    }

    #[test]
    fn chain_only_accepts_interactions_from_the_chain_cell() {
        let mut state = setup(&[
            (0, 3, PieceKind::Chariot, Color::Red),
            (0, 6, PieceKind::Soldier, Color::Black),
            (3, 0, PieceKind::Soldier, Color::Red),
        ]);
        state.turn.chain = ChainState::Chaining {
            at: Position::new(0, 3),
        };

        assert_eq!(
            MoveAction::new(Position::new(3, 0), Position::new(3, 1), ResolutionMode::ToHand)
                .pre_validate(&state, Seat::First),
            Err(ActionError::WrongChainPiece {
                expected: Position::new(0, 3),
                found: Position::new(3, 0)
            })
        );
        assert_eq!(
            MoveAction::new(Position::new(0, 3), Position::new(1, 3), ResolutionMode::ToHand)
                .pre_validate(&state, Seat::First),
            Err(ActionError::ChainRequiresInteraction {
                to: Position::new(1, 3)
            })
        );

        let finish = MoveAction::new(Position::new(0, 3), Position::new(0, 6), ResolutionMode::ToHand);
        assert_eq!(run(&mut state, finish), Ok(TurnFlow::EndTurn));
        assert_eq!(state.turn.chain, ChainState::Idle);
    }

    #[test]
    fn cannot_move_opponent_or_hidden_pieces() {
        let mut state = setup(&[(2, 2, PieceKind::Soldier, Color::Black)]);
        assert_eq!(
            MoveAction::new(Position::new(2, 2), Position::new(2, 3), ResolutionMode::ToHand)
                .pre_validate(&state, Seat::First),
            Err(ActionError::NotOwner {
                position: Position::new(2, 2)
            })
        );

        state.board.get_mut(Position::new(2, 2)).unwrap().top_mut().face_up = false;
        assert_eq!(
            MoveAction::new(Position::new(2, 2), Position::new(2, 3), ResolutionMode::ToHand)
                .pre_validate(&state, Seat::Second),
            Err(ActionError::HiddenPiece {
                position: Position::new(2, 2)
            })
        );
    }
}
