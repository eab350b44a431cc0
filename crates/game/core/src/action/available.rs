//! Enumerate the legal actions of a seat.
//!
//! Candidates are generated per action kind from the board and the seat's
//! hand, then filtered through each action's pre-validation so the
//! enumerator and the engine can never disagree about legality.

use super::{PlayerAction, ResolutionMode};
use crate::state::{GameState, Position, Seat};

/// Every action `seat` could submit right now.
///
/// Returns an empty list when the game is over or when `seat` is not the
/// active seat. During a chain capture only moves from the chain cell and
/// PASS are produced.
pub fn legal_actions(state: &GameState, seat: Seat) -> Vec<PlayerAction> {
    if state.is_terminal() || state.active_seat() != seat {
        return Vec::new();
    }

    let candidates = match state.pending_chain() {
        Some(at) => {
            let mut candidates = vec![PlayerAction::pass()];
            candidates.extend(generate_moves_from(state, at));
            candidates
        }
        None => {
            let mut candidates = generate_flips(state);
            candidates.extend(generate_moves(state, seat));
            candidates.extend(generate_deploys(state, seat));
            candidates.extend(generate_retrieves(state, seat));
            candidates
        }
    };

    candidates
        .into_iter()
        .filter(|action| action.check(state, seat).is_ok())
        .collect()
}

/// Whether `seat` has at least one legal action.
pub fn has_legal_action(state: &GameState, seat: Seat) -> bool {
    if state.is_terminal() || state.active_seat() != seat {
        return false;
    }
    // Flips are the cheapest witness and dominate the opening.
    if state.pending_chain().is_none()
        && generate_flips(state)
            .iter()
            .any(|action| action.check(state, seat).is_ok())
    {
        return true;
    }
    !legal_actions(state, seat).is_empty()
}

/// Cells the stack at `from` could legally move onto that are occupied,
/// i.e. where a move would resolve an interaction.
pub fn interaction_targets(state: &GameState, seat: Seat, from: Position) -> Vec<Position> {
    if state.is_terminal() || state.active_seat() != seat {
        return Vec::new();
    }
    Position::all()
        .filter(|to| !state.board.is_empty_at(*to))
        .filter(|to| PlayerAction::step(from, *to).check(state, seat).is_ok())
        .collect()
}

// ============================================================================
// Candidate generators
// ============================================================================

fn generate_flips(state: &GameState) -> Vec<PlayerAction> {
    state
        .board
        .stacks()
        .filter(|(_, stack)| !stack.is_revealed())
        .map(|(position, _)| PlayerAction::flip(position))
        .collect()
}

/// Moves from every stack the seat controls.
fn generate_moves(state: &GameState, seat: Seat) -> Vec<PlayerAction> {
    let player = state.player(seat);
    let sources: Vec<Position> = state
        .board
        .stacks()
        .filter(|(_, stack)| stack.is_revealed() && player.owns(stack.owner()))
        .map(|(position, _)| position)
        .collect();

    sources
        .into_iter()
        .flat_map(|from| generate_moves_from(state, from))
        .collect()
}

/// Moves from one cell. Empty destinations only get the default mode since
/// resolution mode is meaningless there.
fn generate_moves_from(state: &GameState, from: Position) -> Vec<PlayerAction> {
    let mut moves = Vec::new();
    for to in Position::all().filter(|to| *to != from) {
        if state.board.is_empty_at(to) {
            moves.push(PlayerAction::step(from, to));
        } else {
            moves.push(PlayerAction::move_with(from, to, ResolutionMode::ToHand));
            moves.push(PlayerAction::move_with(
                from,
                to,
                ResolutionMode::StackIfPossible,
            ));
        }
    }
    moves
}

fn generate_deploys(state: &GameState, seat: Seat) -> Vec<PlayerAction> {
    let hand = &state.player(seat).hand;
    let mut deploys = Vec::new();
    for kind in hand.kinds() {
        for count in 1..=hand.count_of(kind) {
            for destination in Position::all() {
                deploys.push(PlayerAction::deploy(kind, count, destination));
            }
        }
    }
    deploys
}

/// Retrieves of the top `k` pieces of each controlled stack, leaving at least
/// the bottom piece behind.
fn generate_retrieves(state: &GameState, seat: Seat) -> Vec<PlayerAction> {
    let player = state.player(seat);
    let mut retrieves = Vec::new();
    for (position, stack) in state.board.stacks() {
        if !stack.is_revealed() || !player.owns(stack.owner()) {
            continue;
        }
        let pieces = stack.pieces();
        for taken in 1..pieces.len() {
            let ids = pieces[pieces.len() - taken..]
                .iter()
                .map(|piece| piece.id)
                .collect();
            retrieves.push(PlayerAction::retrieve(position, ids));
        }
    }
    retrieves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Board, ChainState, Color, Piece, PieceId, PieceKind, Stack};

    fn revealed(id: u8, kind: PieceKind, color: Color) -> Stack {
        Stack::single(Piece::revealed(PieceId(id), kind, color))
    }

    #[test]
    fn opening_offers_only_flips() {
        let mut board = Board::empty();
        for (id, position) in Position::all().take(4).enumerate() {
            board.place(
                position,
                Stack::single(Piece::new(PieceId(id as u8), PieceKind::Soldier, Color::Red)),
            );
        }
        let state = GameState::new(GameConfig::default(), board);

        let actions = legal_actions(&state, Seat::First);
        assert_eq!(actions.len(), 4);
        assert!(actions.iter().all(|action| matches!(action, PlayerAction::Flip(_))));
        assert!(legal_actions(&state, Seat::Second).is_empty());
    }

    #[test]
    fn chain_offers_pass_and_interactions_from_chain_cell() {
        let mut board = Board::empty();
        let at = Position::new(0, 0);
        board.place(at, revealed(0, PieceKind::Chariot, Color::Red));
        board.place(Position::new(0, 4), revealed(1, PieceKind::Horse, Color::Black));
        board.place(Position::new(3, 3), revealed(2, PieceKind::Soldier, Color::Red));
        let mut state = GameState::new(GameConfig::default(), board);
        state.assign_colors(Seat::First, Color::Red);
        state.turn.chain = ChainState::Chaining { at };

        let actions = legal_actions(&state, Seat::First);
        assert!(actions.contains(&PlayerAction::pass()));
        assert!(actions.contains(&PlayerAction::step(at, Position::new(0, 4))));
        assert!(
            actions
                .iter()
                .all(|action| match action {
                    PlayerAction::Move(movement) => movement.from == at,
                    PlayerAction::Pass(_) => true,
                    _ => false,
                })
        );
        // No relocation onto empty cells during a chain.
        assert!(!actions.contains(&PlayerAction::step(at, Position::new(1, 0))));
    }

    #[test]
    fn retrieves_and_deploys_are_enumerated() {
        let mut board = Board::empty();
        let at = Position::new(1, 1);
        board.place(
            at,
            Stack::from_pieces(&[
                Piece::revealed(PieceId(0), PieceKind::Soldier, Color::Red),
                Piece::revealed(PieceId(1), PieceKind::Soldier, Color::Red),
            ])
            .unwrap(),
        );
        let mut state = GameState::new(GameConfig::default(), board);
        state.assign_colors(Seat::First, Color::Red);
        assert!(
            state
                .player_mut(Seat::First)
                .hand
                .add(Piece::revealed(PieceId(2), PieceKind::Soldier, Color::Red))
        );

        let actions = legal_actions(&state, Seat::First);
        assert!(actions.contains(&PlayerAction::retrieve(at, vec![PieceId(1)])));
        assert!(!actions.contains(&PlayerAction::retrieve(at, vec![PieceId(0), PieceId(1)])));
        assert!(actions.contains(&PlayerAction::deploy(PieceKind::Soldier, 1, at)));
        assert!(actions.contains(&PlayerAction::deploy(PieceKind::Soldier, 1, Position::new(3, 7))));
        assert!(has_legal_action(&state, Seat::First));
    }

    #[test]
    fn every_enumerated_action_passes_validation() {
        let mut board = Board::empty();
        board.place(Position::new(0, 0), revealed(0, PieceKind::Cannon, Color::Red));
        board.place(Position::new(0, 1), revealed(1, PieceKind::Soldier, Color::Black));
        board.place(Position::new(0, 2), revealed(2, PieceKind::Advisor, Color::Black));
        board.place(
            Position::new(2, 2),
            Stack::single(Piece::new(PieceId(3), PieceKind::Horse, Color::Black)),
        );
        let mut state = GameState::new(GameConfig::default(), board);
        state.assign_colors(Seat::First, Color::Red);

        let actions = legal_actions(&state, Seat::First);
        assert!(!actions.is_empty());
        for action in &actions {
            assert_eq!(action.check(&state, Seat::First), Ok(()), "{action:?}");
        }
        assert_eq!(
            interaction_targets(&state, Seat::First, Position::new(0, 0)),
            vec![Position::new(0, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn stuck_seat_has_no_action() {
        let mut board = Board::empty();
        board.place(Position::new(0, 0), revealed(0, PieceKind::Soldier, Color::Red));
        board.place(Position::new(0, 1), revealed(1, PieceKind::General, Color::Black));
        board.place(Position::new(1, 0), revealed(2, PieceKind::General, Color::Black));
        let mut state = GameState::new(GameConfig::default(), board);
        state.assign_colors(Seat::First, Color::Black);
        state.turn.active = Seat::Second;

        // Red soldier can still capture either general, so Red is not stuck.
        assert!(has_legal_action(&state, Seat::Second));
        assert!(!has_legal_action(&state, Seat::First));
    }
}
