//! Cities and their mutable infection state.

use serde::{Deserialize, Serialize};

use crate::disease::{ColorMap, DiseaseColor};

/// Stable index of a city in its board.
///
/// Ids are dense and assigned in construction order, so they index directly
/// into the board's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CityId(pub u16);

impl CityId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "City({})", self.0)
    }
}

/// A city on the board.
///
/// Identity fields never change. Cube counts change only through the
/// disease engine, and the station flag only through station actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    /// Color of this city's player and infection cards.
    pub color: DiseaseColor,
    cubes: ColorMap<u8>,
    research_station: bool,
}

impl City {
    pub fn new(id: CityId, name: impl Into<String>, color: DiseaseColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            cubes: ColorMap::with_value(0),
            research_station: false,
        }
    }

    /// Cubes of `color` on this city (0-3).
    #[must_use]
    pub fn cubes(&self, color: DiseaseColor) -> u8 {
        self.cubes[color]
    }

    /// All cube counts, indexed by color.
    #[must_use]
    pub fn cube_counts(&self) -> ColorMap<u8> {
        self.cubes
    }

    #[must_use]
    pub fn is_infected_with(&self, color: DiseaseColor) -> bool {
        self.cubes[color] > 0
    }

    /// True if any color has cubes here.
    #[must_use]
    pub fn is_infected(&self) -> bool {
        self.cubes.values().any(|&n| n > 0)
    }

    #[must_use]
    pub fn has_research_station(&self) -> bool {
        self.research_station
    }

    pub(crate) fn set_cubes(&mut self, color: DiseaseColor, count: u8) {
        self.cubes[color] = count;
    }

    pub(crate) fn set_research_station(&mut self, present: bool) {
        self.research_station = present;
    }
}
