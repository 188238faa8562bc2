//! Match events.
//!
//! Events are pushed at the point where state changes and carry enough data
//! for an observer to follow the match without reading engine state.

use serde::{Deserialize, Serialize};

use crate::board::CityId;
use crate::cards::CardId;
use crate::core::{MatchOutcome, PlayerId};
use crate::disease::DiseaseColor;

/// Something that happened during the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Setup finished; `first` is about to take a turn.
    MatchStarted { first: PlayerId },

    TurnStarted { player: PlayerId, turn: u32 },

    TurnEnded { player: PlayerId, turn: u32 },

    /// A card taken from the player pile, epidemics included.
    CardDrawn { player: PlayerId, card: CardId },

    /// A card left a hand for the player discard pile.
    CardDiscarded { player: PlayerId, card: CardId },

    /// An epidemic struck `city`; the infection rate step is now `rate_step`.
    Epidemic {
        city: CityId,
        color: DiseaseColor,
        rate_step: usize,
    },

    /// Cubes were placed on a city.
    Infected {
        city: CityId,
        color: DiseaseColor,
        placed: u8,
    },

    /// A city overflowed; `total` is the outbreak counter afterwards.
    Outbreak {
        city: CityId,
        color: DiseaseColor,
        total: u8,
    },

    DiseaseCured { color: DiseaseColor },

    DiseaseEradicated { color: DiseaseColor },

    /// Player pile ran out while a player was drawing.
    PlayerDeckExhausted { player: PlayerId },

    /// A placement needed more cubes than the supply held.
    CubesExhausted { color: DiseaseColor },

    MatchEnded { outcome: MatchOutcome },
}
