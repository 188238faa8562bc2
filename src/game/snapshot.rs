//! Read-only views of a match.
//!
//! Uses `im` persistent collections so snapshots are cheap to clone and keep.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{City, CityId};
use crate::cards::{CardId, InfectionCard, PlayerCard};
use crate::core::{MatchOutcome, PlayerId, Role};
use crate::disease::{ColorMap, DiseaseColor, DiseaseState};
use crate::turn::{PlayerTurn, Stage};

/// One player as seen from outside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    pub location: CityId,
    pub stage: Stage,
    pub hand: Vector<PlayerCard>,
    pub actions_taken: u8,
    pub cards_drawn: u8,
}

impl From<&PlayerTurn> for PlayerView {
    fn from(player: &PlayerTurn) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            role: player.role(),
            location: player.location(),
            stage: player.stage(),
            hand: player.hand().iter().cloned().collect(),
            actions_taken: player.actions_taken(),
            cards_drawn: player.cards_drawn(),
        }
    }
}

/// One city as seen from outside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityView {
    pub id: CityId,
    pub name: String,
    pub color: DiseaseColor,
    pub cubes: ColorMap<u8>,
    pub research_station: bool,
}

impl From<&City> for CityView {
    fn from(city: &City) -> Self {
        Self {
            id: city.id,
            name: city.name.clone(),
            color: city.color,
            cubes: city.cube_counts(),
            research_station: city.has_research_station(),
        }
    }
}

/// One disease as seen from outside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseView {
    pub state: DiseaseState,
    pub cubes_on_board: u8,
}

/// Everything an observer may know about a match at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Turn number (starts at 1).
    pub turn: u32,
    pub active_player: Option<PlayerId>,
    pub players: Vector<PlayerView>,
    pub cities: Vector<CityView>,
    pub diseases: ColorMap<DiseaseView>,
    pub outbreaks: u8,
    pub infection_rate: u8,
    pub infection_rate_step: usize,
    pub player_pile_len: usize,
    pub player_discard: Vector<CardId>,
    pub infection_pile_len: usize,
    pub infection_discard: Vector<InfectionCard>,
    pub outcome: Option<MatchOutcome>,
}

impl MatchSnapshot {
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn city(&self, id: CityId) -> Option<&CityView> {
        self.cities.get(id.index())
    }

    /// Cities holding a research station.
    pub fn research_stations(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities.iter().filter(|c| c.research_station).map(|c| c.id)
    }
}
