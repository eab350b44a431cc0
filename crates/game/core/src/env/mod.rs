//! Game setup: the seeded RNG oracle and the dealer.
//!
//! Everything random about a game happens here, once, before the first
//! action. From the dealt [`GameState`](crate::state::GameState) onwards the
//! engine is fully deterministic.
mod deck;
mod rng;

pub use deck::{DealSource, Deck, init_game, init_game_with};
pub use rng::{PcgRng, RngOracle, compute_seed};
