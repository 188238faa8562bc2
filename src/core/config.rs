//! Match configuration and rule constants.
//!
//! A match is configured at startup with a `MatchConfig`:
//! - `seed`: drives every shuffle and role assignment
//! - `difficulty`: how many epidemic cards are seeded into the player deck
//! - `starting_city`: where the first research station and all pawns start

use serde::{Deserialize, Serialize};

/// Maximum cubes of one color on a single city.
pub const MAX_CUBES_PER_CITY: u8 = 3;

/// Cube supply per disease color.
pub const CUBES_PER_COLOR: u8 = 24;

/// The outbreak count that loses the match.
pub const MAX_OUTBREAKS: u8 = 8;

/// Hand size a player may hold outside the discard window.
pub const HAND_LIMIT: usize = 7;

pub const ACTIONS_PER_TURN: u8 = 4;

pub const PLAYER_CARDS_PER_TURN: u8 = 2;

/// Research station pieces in the box (the starting station included).
pub const MAX_RESEARCH_STATIONS: usize = 6;

/// Infection cards drawn per turn, indexed by the infection-rate step.
pub const INFECTION_RATES: [u8; 7] = [2, 2, 2, 3, 3, 4, 4];

/// Cards of one color needed to discover a cure.
pub const CARDS_TO_CURE: usize = 5;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Cubes placed by an epidemic's infection step.
pub const EPIDEMIC_CUBES: u8 = 3;

/// Setup infections: `(cards drawn, cubes per city)` in decreasing severity.
pub const INITIAL_INFECTIONS: [(usize, u8); 3] = [(3, 3), (3, 2), (3, 1)];

/// Difficulty level. Controls the number of epidemic cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Introduction,
    #[default]
    Normal,
    Heroic,
}

impl Difficulty {
    /// Number of epidemic cards (and deck segments) for this difficulty.
    #[must_use]
    pub const fn epidemic_count(self) -> usize {
        match self {
            Difficulty::Introduction => 4,
            Difficulty::Normal => 5,
            Difficulty::Heroic => 6,
        }
    }
}

/// Starting hand size for a given number of players.
///
/// Returns `None` outside the supported 2-4 player range.
#[must_use]
pub const fn starting_hand_size(player_count: usize) -> Option<usize> {
    match player_count {
        2 => Some(4),
        3 => Some(3),
        4 => Some(2),
        _ => None,
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for all randomness in the match.
    pub seed: u64,

    /// Number of epidemic cards seeded into the player deck.
    pub difficulty: Difficulty,

    /// Name of the city holding the starting research station.
    pub starting_city: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            difficulty: Difficulty::default(),
            starting_city: "Atlanta".to_string(),
        }
    }
}

impl MatchConfig {
    /// Create a configuration with the given seed and default rules.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_starting_city(mut self, city: impl Into<String>) -> Self {
        self.starting_city = city.into();
        self
    }
}
