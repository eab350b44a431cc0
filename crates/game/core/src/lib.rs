//! Rules engine for Stacked Banqi, a dark-piece Chinese-chess variant on a
//! 4x8 board with stacking, weight/rank captures and chain captures.
//!
//! `banqi-core` defines the canonical rules (actions, engine, state) and
//! exposes pure APIs: [`apply_action`] turns a state and an action into the
//! next state, [`legal_actions`] lists what a seat may do, and [`init_game`]
//! deals a new game. All state mutation flows through
//! [`engine::GameEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod rules;
pub mod state;

pub use action::{
    ActionError, ActionTransition, DeployAction, FlipAction, MoveAction, PassAction, PlayerAction,
    ResolutionMode, RetrieveAction, TurnFlow, has_legal_action, interaction_targets,
    legal_actions,
};
pub use config::GameConfig;
pub use engine::{
    ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError, apply_action,
    apply_action_as, detect_winner, replay,
};
pub use env::{DealSource, Deck, PcgRng, RngOracle, compute_seed, init_game, init_game_with};
pub use error::{ErrorCategory, ErrorSeverity, GameError};
pub use state::{
    Board, ChainState, Color, GameState, GameStatus, Hand, InitializationError, Piece, PieceId,
    PieceKind, Player, Position, Seat, Stack, TurnState, WinReason,
};
