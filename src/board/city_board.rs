//! The city board: an arena of cities plus a fixed adjacency relation.
//!
//! The board is built once (from records or from the standard map) and its
//! neighbor relation never changes afterwards. Only the per-city cube counts
//! and research-station flags are mutated during a match.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::city::{City, CityId};
use crate::core::{GameError, Result};
use crate::disease::DiseaseColor;

/// Neighbor list. Six entries covers every city on the standard map.
pub type Neighbors = SmallVec<[CityId; 6]>;

/// A city as supplied by a data loader.
///
/// Neighbours may be listed on one side only; the board symmetrizes them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub color: DiseaseColor,
    #[serde(default)]
    pub neighbours: Vec<String>,
}

impl CityRecord {
    pub fn new(name: impl Into<String>, color: DiseaseColor) -> Self {
        Self {
            name: name.into(),
            color,
            neighbours: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_neighbour(mut self, name: impl Into<String>) -> Self {
        self.neighbours.push(name.into());
        self
    }
}

/// Fixed set of cities with a symmetric neighbor relation.
#[derive(Clone, Debug)]
pub struct CityBoard {
    cities: Vec<City>,
    adjacency: Vec<Neighbors>,
    by_name: FxHashMap<String, CityId>,
}

impl CityBoard {
    /// Build a board from loader records.
    ///
    /// Fails on duplicate names, unknown neighbours, or a city listed as its
    /// own neighbour.
    pub fn from_records(records: &[CityRecord]) -> Result<Self> {
        if records.len() > u16::MAX as usize {
            return Err(GameError::limit("too many cities for one board"));
        }

        let mut cities = Vec::with_capacity(records.len());
        let mut by_name = FxHashMap::default();

        for (i, record) in records.iter().enumerate() {
            let id = CityId::new(i as u16);
            if by_name.insert(record.name.clone(), id).is_some() {
                return Err(GameError::rule(format!("duplicate city '{}'", record.name)));
            }
            cities.push(City::new(id, record.name.clone(), record.color));
        }

        let mut adjacency: Vec<Neighbors> = vec![Neighbors::new(); cities.len()];
        for (i, record) in records.iter().enumerate() {
            let from = CityId::new(i as u16);
            for neighbour in &record.neighbours {
                let to = *by_name.get(neighbour).ok_or_else(|| {
                    GameError::rule(format!(
                        "'{}' lists unknown neighbour '{}'",
                        record.name, neighbour
                    ))
                })?;
                if to == from {
                    return Err(GameError::rule(format!("'{}' neighbours itself", record.name)));
                }
                if !adjacency[from.index()].contains(&to) {
                    adjacency[from.index()].push(to);
                }
                if !adjacency[to.index()].contains(&from) {
                    adjacency[to.index()].push(from);
                }
            }
        }

        Ok(Self {
            cities,
            adjacency,
            by_name,
        })
    }

    /// Number of cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Resolve a city name.
    pub fn id(&self, name: &str) -> Result<CityId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GameError::invalid(format!("unknown city '{name}'")))
    }

    /// Look up a city by id.
    ///
    /// Ids handed out by this board are always valid; ids from another board
    /// panic on out-of-range access like any slice index.
    #[must_use]
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    pub(crate) fn city_mut(&mut self, id: CityId) -> &mut City {
        &mut self.cities[id.index()]
    }

    /// Checked lookup for ids of unknown provenance.
    pub fn get(&self, id: CityId) -> Result<&City> {
        self.cities
            .get(id.index())
            .ok_or_else(|| GameError::invalid(format!("{id} is not on this board")))
    }

    /// Display name of a city.
    #[must_use]
    pub fn name(&self, id: CityId) -> &str {
        &self.city(id).name
    }

    #[must_use]
    pub fn neighbors(&self, id: CityId) -> &[CityId] {
        &self.adjacency[id.index()]
    }

    #[must_use]
    pub fn are_adjacent(&self, a: CityId, b: CityId) -> bool {
        self.adjacency[a.index()].contains(&b)
    }

    /// Iterate over all cities in id order.
    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Cities with a research station, in id order.
    pub fn research_stations(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities
            .iter()
            .filter(|c| c.has_research_station())
            .map(|c| c.id)
    }

    #[must_use]
    pub fn research_station_count(&self) -> usize {
        self.research_stations().count()
    }

    /// Sum of `color` cubes over every city.
    #[must_use]
    pub fn total_cubes(&self, color: DiseaseColor) -> u32 {
        self.cities.iter().map(|c| u32::from(c.cubes(color))).sum()
    }
}
