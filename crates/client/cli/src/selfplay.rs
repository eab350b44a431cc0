//! Uniformly random self-play with invariant checks after every action.

use std::fmt;

use anyhow::{Result, bail, ensure};
use banqi_core::{
    DealSource, GameConfig, GameState, GameStatus, Seat, WinReason, apply_action, init_game,
    legal_actions,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// How one self-play game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won { winner: Seat, reason: WinReason },
    /// Still running when the turn cap was reached.
    Unfinished,
}

/// Totals over a batch of self-play games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub games: u32,
    pub wins: [u32; 2],
    pub eliminations: u32,
    pub stalemates: u32,
    pub unfinished: u32,
}

impl Summary {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Won { winner, reason } => {
                self.wins[winner.index()] += 1;
                match reason {
                    WinReason::Elimination => self.eliminations += 1,
                    WinReason::Stalemate => self.stalemates += 1,
                }
            }
            GameOutcome::Unfinished => self.unfinished += 1,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "games:        {}", self.games)?;
        writeln!(f, "player 0 won: {}", self.wins[0])?;
        writeln!(f, "player 1 won: {}", self.wins[1])?;
        writeln!(f, "eliminations: {}", self.eliminations)?;
        writeln!(f, "stalemates:   {}", self.stalemates)?;
        write!(f, "unfinished:   {}", self.unfinished)
    }
}

/// Plays `games` games; game `i` is dealt and driven from `seed + i`.
pub fn run(seed: u64, games: u32, max_turns: u32, rules: GameConfig) -> Result<Summary> {
    let mut summary = Summary::default();
    for index in 0..games {
        let game_seed = seed.wrapping_add(u64::from(index));
        let (outcome, state) = play_game(game_seed, max_turns, rules)?;
        tracing::info!(
            seed = game_seed,
            turns = state.turn.number,
            ?outcome,
            "self-play game finished"
        );
        summary.record(outcome);
    }
    Ok(summary)
}

/// Plays a single game to completion or to the turn cap.
pub fn play_game(seed: u64, max_turns: u32, rules: GameConfig) -> Result<(GameOutcome, GameState)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = init_game(DealSource::Seeded(seed), rules);

    while state.turn.number < max_turns {
        if let GameStatus::Finished { winner, reason } = state.status {
            return Ok((GameOutcome::Won { winner, reason }, state));
        }

        let seat = state.active_seat();
        let actions = legal_actions(&state, seat);
        let Some(action) = actions.choose(&mut rng) else {
            bail!("{seat} has no legal action in a live game (seed {seed})");
        };

        let next = apply_action(&state, action);
        if let Some(error) = &next.error {
            bail!("enumerated action {action:?} was rejected: {error}");
        }
        check_invariants(&next)?;
        state = next;
    }

    match state.status {
        GameStatus::Finished { winner, reason } => Ok((GameOutcome::Won { winner, reason }, state)),
        GameStatus::InProgress => Ok((GameOutcome::Unfinished, state)),
    }
}

fn check_invariants(state: &GameState) -> Result<()> {
    ensure!(
        state.total_pieces() == GameConfig::PIECE_COUNT,
        "piece count is {}, expected {}",
        state.total_pieces(),
        GameConfig::PIECE_COUNT
    );
    for (position, stack) in state.board.stacks() {
        ensure!(
            stack.within_limit(),
            "stack at {position} has {} pieces, limit {}",
            stack.weight(),
            stack.size_limit()
        );
    }
    Ok(())
}
