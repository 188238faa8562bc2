//! Player actions as values.
//!
//! Each variant is one of the moves a player may spend an action on during
//! the action stage. `MatchController::apply_action` dispatches them to the
//! matching turn operation and records successful ones as `ActionRecord`s.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::CityId;
use crate::disease::DiseaseColor;

/// Which way a card travels when sharing knowledge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareDirection {
    /// The acting player hands the card to the other player.
    Give,
    /// The acting player takes the card from the other player.
    Take,
}

/// A single action-stage move.
///
/// ```
/// use pandemic_sim::core::Action;
/// use pandemic_sim::disease::DiseaseColor;
///
/// let treat = Action::TreatDisease { color: DiseaseColor::Blue };
/// let json = serde_json::to_string(&treat).unwrap();
/// assert_eq!(json, r#"{"TreatDisease":{"color":"blue"}}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move to an adjacent city.
    Drive { to: CityId },
    /// Discard the destination's card to fly there.
    DirectFlight { to: CityId },
    /// Discard the current city's card to fly anywhere.
    CharterFlight { to: CityId },
    /// Fly between two research stations.
    ShuttleFlight { to: CityId },
    /// Build a research station here, optionally moving an existing one.
    BuildResearchStation { relocate_from: Option<CityId> },
    /// Remove cubes of one color from the current city.
    TreatDisease { color: DiseaseColor },
    /// Discard cards of one color at a research station to cure it.
    CureDisease { color: DiseaseColor },
    /// Pass a city card between two co-located players.
    ShareKnowledge {
        with: PlayerId,
        city: CityId,
        direction: ShareDirection,
    },
    /// Spend an action doing nothing.
    Pass,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the match.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
