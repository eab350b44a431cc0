//! Capture, merge and retrieve resolution for moves onto occupied cells.
//!
//! [`engage`] classifies a prospective move (empty, friendly, or enemy
//! destination) and runs every eligibility check; [`resolve_interaction`]
//! carries out an already-validated interaction in the requested mode.

use std::cmp::Ordering;

use super::composition::can_stack_on;
use super::geometry::check_path;
use crate::action::{ActionError, ResolutionMode};
use crate::config::GameConfig;
use crate::state::{Board, GameState, PieceKind, Position, Seat, Stack};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaptureError {
    #[error("attacker weight {attacker} is below defender weight {defender}")]
    Outweighed { attacker: usize, defender: usize },

    #[error("{attacker} cannot capture {defender} at equal weight")]
    Outranked {
        attacker: PieceKind,
        defender: PieceKind,
    },
}

/// Weight/rank eligibility of `attacker` interacting with `defender`.
///
/// Same-color interactions always pass. Against an enemy the heavier stack
/// wins outright; at equal weight the top pieces' ranks decide, except that a
/// Soldier always takes a General, a General never takes a Soldier, and a
/// Cannon jumping exactly one screen ignores rank.
pub fn can_capture(attacker: &Stack, defender: &Stack, screens: usize) -> Result<(), CaptureError> {
    if attacker.owner() == defender.owner() {
        return Ok(());
    }

    match attacker.weight().cmp(&defender.weight()) {
        Ordering::Greater => Ok(()),
        Ordering::Less => Err(CaptureError::Outweighed {
            attacker: attacker.weight(),
            defender: defender.weight(),
        }),
        Ordering::Equal => {
            if attacker.base_kind() == PieceKind::Cannon && screens == 1 {
                return Ok(());
            }

            let (attacking, defending) = (attacker.top().kind, defender.top().kind);
            let eligible = match (attacking, defending) {
                (PieceKind::Soldier, PieceKind::General) => true,
                (PieceKind::General, PieceKind::Soldier) => false,
                _ => attacking.rank() >= defending.rank(),
            };
            if eligible {
                Ok(())
            } else {
                Err(CaptureError::Outranked {
                    attacker: attacking,
                    defender: defending,
                })
            }
        }
    }
}

/// What occupies the destination of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Empty,
    Friendly,
    Enemy,
}

/// Result of a successful [`engage`] check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Engagement {
    pub target: Target,
    pub screens: usize,
}

impl Engagement {
    /// True when the destination is occupied, so the move resolves an
    /// interaction rather than a plain relocation.
    pub fn is_interaction(&self) -> bool {
        self.target != Target::Empty
    }
}

/// Validates moving the stack at `from` to `to`, ignoring whose turn it is and
/// the chain protocol. The source must hold a stack; visibility and ownership
/// of the source are the caller's concern.
pub fn engage(
    board: &Board,
    config: &GameConfig,
    from: Position,
    to: Position,
) -> Result<Engagement, ActionError> {
    let mover = board
        .get(from)
        .ok_or(ActionError::EmptyCell { position: from })?;
    let kind = mover.base_kind();
    let screens = check_path(board, kind, from, to)?;

    let Some(defender) = board.get(to) else {
        if screens > 0 {
            return Err(ActionError::JumpOntoEmpty { from, to });
        }
        return Ok(Engagement {
            target: Target::Empty,
            screens,
        });
    };

    if !defender.is_revealed() {
        return Err(ActionError::HiddenTarget { position: to });
    }

    if defender.owner() == mover.owner() {
        return Ok(Engagement {
            target: Target::Friendly,
            screens,
        });
    }

    if kind == PieceKind::Cannon && screens == 0 && !config.point_blank_cannon {
        return Err(ActionError::PointBlankCannon { from, to });
    }

    can_capture(mover, defender, screens)?;
    Ok(Engagement {
        target: Target::Enemy,
        screens,
    })
}

/// Composition check a Stack-If-Possible interaction must pass. Color is only
/// compared when merging into a friendly stack.
pub fn check_stackable(board: &Board, from: Position, to: Position, target: Target) -> Result<(), ActionError> {
    let (Some(mover), Some(defender)) = (board.get(from), board.get(to)) else {
        return Ok(());
    };
    can_stack_on(defender.pieces(), mover.pieces(), target == Target::Friendly)?;
    Ok(())
}

/// Carries out an interaction that [`engage`] already approved.
///
/// - `ToHand`: every destination piece goes to `actor`'s hand, recolored to
///   the mover's color, and the mover takes the cell.
/// - `StackIfPossible`: the mover is stacked on top of the destination pieces.
///
/// The source cell is left empty either way.
pub fn resolve_interaction(
    state: &mut GameState,
    actor: Seat,
    from: Position,
    to: Position,
    mode: ResolutionMode,
    target: Target,
) -> Result<(), ActionError> {
    let mover = state
        .board
        .take(from)
        .ok_or(ActionError::EmptyCell { position: from })?;
    let defender = state
        .board
        .take(to)
        .ok_or(ActionError::EmptyCell { position: to })?;
    let displaced = defender.weight();

    match mode {
        ResolutionMode::ToHand => {
            let color = mover.owner();
            let hand = &mut state.player_mut(actor).hand;
            for piece in defender.into_pieces() {
                if !hand.add(piece.captured_by(color)) {
                    return Err(ActionError::HandOverflow);
                }
            }
            state.board.place(to, mover);
        }
        ResolutionMode::StackIfPossible => {
            can_stack_on(defender.pieces(), mover.pieces(), target == Target::Friendly)?;
            let combined = defender
                .stacked_with(&mover)
                .ok_or(ActionError::StackLimitBroken { position: to })?;
            state.board.place(to, combined);
        }
    }

    tracing::trace!(
        %from,
        %to,
        ?target,
        mode = <&'static str>::from(mode),
        displaced,
        "interaction resolved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GeometryError;
    use crate::state::{Color, Piece, PieceId};

    fn stack(color: Color, kinds: &[PieceKind], first_id: u8) -> Stack {
        let pieces: Vec<Piece> = kinds
            .iter()
            .enumerate()
            .map(|(offset, kind)| Piece::revealed(PieceId(first_id + offset as u8), *kind, color))
            .collect();
        Stack::from_pieces(&pieces).unwrap()
    }

    #[test]
    fn heavier_stack_wins_regardless_of_rank() {
        let soldiers = stack(Color::Red, &[PieceKind::Soldier, PieceKind::Soldier], 0);
        let general = stack(Color::Black, &[PieceKind::General], 10);
        assert_eq!(can_capture(&soldiers, &general, 0), Ok(()));
        assert_eq!(
            can_capture(&general, &soldiers, 0),
            Err(CaptureError::Outweighed {
                attacker: 1,
                defender: 2
            })
        );
    }

    #[test]
    fn equal_weight_uses_rank_with_exceptions() {
        let red = |kind| stack(Color::Red, &[kind], 0);
        let black = |kind| stack(Color::Black, &[kind], 1);

        assert_eq!(can_capture(&red(PieceKind::Chariot), &black(PieceKind::Horse), 0), Ok(()));
        assert_eq!(can_capture(&red(PieceKind::Horse), &black(PieceKind::Horse), 0), Ok(()));
        assert!(can_capture(&red(PieceKind::Horse), &black(PieceKind::Chariot), 0).is_err());

        assert_eq!(can_capture(&red(PieceKind::Soldier), &black(PieceKind::General), 0), Ok(()));
        assert_eq!(
            can_capture(&red(PieceKind::General), &black(PieceKind::Soldier), 0),
            Err(CaptureError::Outranked {
                attacker: PieceKind::General,
                defender: PieceKind::Soldier
            })
        );
    }

    #[test]
    fn cannon_jump_ignores_rank_but_not_weight() {
        let cannon = stack(Color::Red, &[PieceKind::Cannon], 0);
        let general = stack(Color::Black, &[PieceKind::General], 1);
        assert_eq!(can_capture(&cannon, &general, 1), Ok(()));
        assert!(can_capture(&cannon, &general, 0).is_err());

        let pair = stack(Color::Black, &[PieceKind::Soldier, PieceKind::Soldier], 2);
        assert!(can_capture(&cannon, &pair, 1).is_err());
    }

    #[test]
    fn friendly_interaction_skips_weight_checks() {
        let single = stack(Color::Red, &[PieceKind::Soldier], 0);
        let tall = stack(Color::Red, &[PieceKind::Horse, PieceKind::Horse, PieceKind::Horse], 1);
        assert_eq!(can_capture(&single, &tall, 0), Ok(()));
    }

    #[test]
    fn engage_classifies_destinations() {
        let config = GameConfig::default();
        let mut board = Board::empty();
        board.place(Position::new(1, 1), stack(Color::Red, &[PieceKind::Advisor], 0));
        board.place(Position::new(1, 2), stack(Color::Red, &[PieceKind::Advisor], 1));
        board.place(Position::new(2, 1), stack(Color::Black, &[PieceKind::Elephant], 2));
        board.place(
            Position::new(0, 1),
            Stack::single(Piece::new(PieceId(3), PieceKind::Soldier, Color::Black)),
        );

        let from = Position::new(1, 1);
        assert_eq!(
            engage(&board, &config, from, Position::new(1, 0)).map(|e| e.target),
            Ok(Target::Empty)
        );
        assert_eq!(
            engage(&board, &config, from, Position::new(1, 2)).map(|e| e.target),
            Ok(Target::Friendly)
        );
        assert_eq!(
            engage(&board, &config, from, Position::new(2, 1)).map(|e| e.target),
            Ok(Target::Enemy)
        );
        assert_eq!(
            engage(&board, &config, from, Position::new(0, 1)),
            Err(ActionError::HiddenTarget {
                position: Position::new(0, 1)
            })
        );
        assert!(matches!(
            engage(&board, &config, from, Position::new(3, 3)),
            Err(ActionError::Geometry(GeometryError::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn cannon_cannot_jump_onto_empty_cells() {
        let config = GameConfig::default();
        let mut board = Board::empty();
        board.place(Position::new(0, 0), stack(Color::Red, &[PieceKind::Cannon], 0));
        board.place(Position::new(0, 1), stack(Color::Black, &[PieceKind::Soldier], 1));

        assert_eq!(
            engage(&board, &config, Position::new(0, 0), Position::new(0, 3)),
            Err(ActionError::JumpOntoEmpty {
                from: Position::new(0, 0),
                to: Position::new(0, 3)
            })
        );
    }

    #[test]
    fn point_blank_cannon_follows_config() {
        let mut board = Board::empty();
        board.place(Position::new(0, 0), stack(Color::Red, &[PieceKind::Cannon], 0));
        board.place(Position::new(0, 3), stack(Color::Black, &[PieceKind::Soldier], 1));
        let (from, to) = (Position::new(0, 0), Position::new(0, 3));

        assert_eq!(
            engage(&board, &GameConfig::default(), from, to).map(|e| e.target),
            Ok(Target::Enemy)
        );
        assert_eq!(
            engage(&board, &GameConfig::classic(), from, to),
            Err(ActionError::PointBlankCannon { from, to })
        );
    }
}
