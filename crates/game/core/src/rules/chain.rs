//! Chain-capture eligibility.
//!
//! After a move resolves an interaction, the turn only ends if the landed
//! stack has nothing further to interact with. The state machine itself lives
//! in [`crate::state::ChainState`]; this module answers the scan.

use super::interaction::{Target, engage};
use crate::config::GameConfig;
use crate::state::{Board, Position};

/// Whether the stack at `at` may continue a chain by moving to `to`.
///
/// Enemy targets qualify when the move passes geometry and weight/rank checks.
/// Friendly targets qualify on geometry alone, when the config allows
/// friendly chains.
pub fn is_chain_target(board: &Board, config: &GameConfig, at: Position, to: Position) -> bool {
    match engage(board, config, at, to) {
        Ok(engagement) => match engagement.target {
            Target::Enemy => true,
            Target::Friendly => config.friendly_chain,
            Target::Empty => false,
        },
        Err(_) => false,
    }
}

/// Every cell the stack at `at` could continue the chain into.
pub fn chain_targets(board: &Board, config: &GameConfig, at: Position) -> Vec<Position> {
    Position::all()
        .filter(|to| is_chain_target(board, config, at, *to))
        .collect()
}

pub fn has_chain_options(board: &Board, config: &GameConfig, at: Position) -> bool {
    Position::all().any(|to| is_chain_target(board, config, at, to))
}
