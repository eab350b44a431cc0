//! Deck construction and dealing.

use strum::IntoEnumIterator;

use super::rng::{PcgRng, RngOracle, compute_seed};
use crate::config::GameConfig;
use crate::state::{Board, Color, GameState, InitializationError, Piece, PieceId, PieceKind, Position, Stack};

/// The 32 pieces of a game in dealing order. Entry `i` becomes [`PieceId`]
/// `i` and is dealt face-down to the cell with index `i`.
///
/// Every `Deck` value holds the standard composition; custom orders go
/// through [`Deck::from_entries`], which checks it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    entries: Vec<(PieceKind, Color)>,
}

impl Deck {
    /// Unshuffled standard deck: all Red pieces by kind, then all Black.
    pub fn standard() -> Self {
        let entries = Color::iter()
            .flat_map(|color| {
                PieceKind::iter().flat_map(move |kind| {
                    std::iter::repeat_n((kind, color), kind.copies_per_color())
                })
            })
            .collect();
        Self { entries }
    }

    /// Standard deck in a Fisher-Yates order drawn from `rng`.
    pub fn shuffled<R>(rng: &R, seed: u64) -> Self
    where
        R: RngOracle + ?Sized,
    {
        let mut deck = Self::standard();
        for i in (1..deck.entries.len()).rev() {
            let j = rng.range(compute_seed(seed, i as u64, 0), 0, i as u32) as usize;
            deck.entries.swap(i, j);
        }
        deck
    }

    /// Builds a deck in the given order after checking its size and
    /// composition.
    pub fn from_entries(entries: Vec<(PieceKind, Color)>) -> Result<Self, InitializationError> {
        if entries.len() != GameConfig::PIECE_COUNT {
            return Err(InitializationError::DeckSize {
                expected: GameConfig::PIECE_COUNT,
                found: entries.len(),
            });
        }
        for color in Color::iter() {
            for kind in PieceKind::iter() {
                let found = entries
                    .iter()
                    .filter(|entry| **entry == (kind, color))
                    .count();
                let expected = kind.copies_per_color();
                if found != expected {
                    return Err(InitializationError::DeckComposition {
                        kind,
                        color,
                        expected,
                        found,
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(PieceKind, Color)] {
        &self.entries
    }
}

/// Where the starting order of a game comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DealSource {
    /// Shuffle the standard deck with [`PcgRng`] and this seed.
    Seeded(u64),
    /// Deal a deck exactly as given.
    Prebuilt(Deck),
}

/// Deals a new game: every piece face-down, one per cell, colors unassigned,
/// the first seat on turn.
pub fn init_game(source: DealSource, config: GameConfig) -> GameState {
    let deck = match source {
        DealSource::Seeded(seed) => Deck::shuffled(&PcgRng, seed),
        DealSource::Prebuilt(deck) => deck,
    };
    deal(&deck, config)
}

/// [`init_game`] with a caller-supplied RNG oracle.
pub fn init_game_with<R>(rng: &R, seed: u64, config: GameConfig) -> GameState
where
    R: RngOracle + ?Sized,
{
    deal(&Deck::shuffled(rng, seed), config)
}

fn deal(deck: &Deck, config: GameConfig) -> GameState {
    let mut board = Board::empty();
    for (index, (kind, color)) in deck.entries().iter().enumerate() {
        let position = Position::from_index(index);
        let piece = Piece::new(PieceId(index as u8), *kind, *color);
        board.place(position, Stack::single(piece));
    }
    tracing::debug!(pieces = board.piece_count(), "dealt new game");
    GameState::new(config, board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_sixteen_per_color() {
        let deck = Deck::standard();
        assert_eq!(deck.entries().len(), 32);
        for color in Color::iter() {
            assert_eq!(
                deck.entries().iter().filter(|(_, c)| *c == color).count(),
                16
            );
        }
        assert!(Deck::from_entries(deck.entries().to_vec()).is_ok());
    }

    #[test]
    fn shuffle_is_seeded() {
        let a = Deck::shuffled(&PcgRng, 11);
        let b = Deck::shuffled(&PcgRng, 11);
        let c = Deck::shuffled(&PcgRng, 12);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(Deck::from_entries(a.entries().to_vec()).is_ok());
    }

    #[test]
    fn rejects_malformed_decks() {
        let mut entries = Deck::standard().entries().to_vec();
        entries.pop();
        assert_eq!(
            Deck::from_entries(entries.clone()),
            Err(InitializationError::DeckSize {
                expected: 32,
                found: 31
            })
        );

        entries.push((PieceKind::General, Color::Black));
        assert!(matches!(
            Deck::from_entries(entries),
            Err(InitializationError::DeckComposition { .. })
        ));
    }

    #[test]
    fn dealt_game_is_hidden_and_full() {
        let state = init_game(DealSource::Seeded(5), GameConfig::default());
        assert_eq!(state.board.piece_count(), 32);
        assert!(state.board.stacks().all(|(_, stack)| !stack.is_revealed() && stack.weight() == 1));
        assert!(!state.colors_assigned);
        assert_eq!(state.total_pieces(), 32);

        let prebuilt = init_game(DealSource::Prebuilt(Deck::standard()), GameConfig::default());
        let first = prebuilt.board.get(Position::ORIGIN).unwrap().top();
        assert_eq!(first.id, PieceId(0));
        assert_eq!(first.kind, PieceKind::General);
        assert_eq!(first.color, Color::Red);
    }
}
