//! Disease engine: infection, outbreaks, epidemics, treatment and cures.
//!
//! The engine owns the per-color bookkeeping (disease state, cubes on the
//! board, outbreak counter, infection-rate step) and mutates the cube counts
//! stored on `CityBoard` cities. Every placement goes through one routine so
//! the per-city cap of 3 and the global supply of 24 are checked in one place.
//!
//! ## Cascades
//!
//! Overflowing a city triggers an outbreak, which places one cube on each
//! neighbour, which may overflow further. A city outbreaks at most once per
//! cascade. The set of cities that already outbroke lives on the stack of the
//! outermost call and is passed down by reference, so separate cascades
//! never share it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::board::{CityBoard, CityId, Neighbors};
use crate::core::config::{CUBES_PER_COLOR, INFECTION_RATES, MAX_CUBES_PER_CITY, MAX_OUTBREAKS};
use crate::core::{GameError, LossReason, MatchOutcome, Result};
use crate::events::{EventQueue, GameEvent};

use super::color::{ColorMap, DiseaseColor};

/// Progress of one disease. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiseaseState {
    #[default]
    Uncured,
    Cured,
    /// Cured and no cubes left on the board. Infections of this color are
    /// ignored from now on.
    Eradicated,
}

impl DiseaseState {
    /// Cured or eradicated.
    #[must_use]
    pub fn is_cured(self) -> bool {
        self != DiseaseState::Uncured
    }
}

/// Per-color disease bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseEngine {
    states: ColorMap<DiseaseState>,
    /// Cubes of each color currently on the board.
    cubes: ColorMap<u8>,
    /// Set once a color's whole supply has been on the board.
    peaked: ColorMap<bool>,
    outbreaks: u8,
    infection_rate_step: usize,
}

impl DiseaseEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self, color: DiseaseColor) -> DiseaseState {
        self.states[color]
    }

    #[must_use]
    pub fn states(&self) -> &ColorMap<DiseaseState> {
        &self.states
    }

    #[must_use]
    pub fn cubes_on_board(&self, color: DiseaseColor) -> u8 {
        self.cubes[color]
    }

    /// Cubes of `color` left in the supply.
    #[must_use]
    pub fn cubes_remaining(&self, color: DiseaseColor) -> u8 {
        CUBES_PER_COLOR.saturating_sub(self.cubes[color])
    }

    #[must_use]
    pub fn outbreaks(&self) -> u8 {
        self.outbreaks
    }

    #[must_use]
    pub fn infection_rate_step(&self) -> usize {
        self.infection_rate_step
    }

    /// Infection cards drawn per turn at the current step.
    #[must_use]
    pub fn infection_rate(&self) -> u8 {
        INFECTION_RATES[self.infection_rate_step]
    }

    /// Every color cured or eradicated.
    #[must_use]
    pub fn all_cured(&self) -> bool {
        self.states.values().all(|state| state.is_cured())
    }

    /// Place `count` cubes of `color` on `city`.
    ///
    /// Eradicated colors are ignored. Placement stops at 3 cubes per city;
    /// any excess sets off an outbreak unless `city` already outbroke in this
    /// cascade. If the supply cannot cover the placement, the cubes still in
    /// supply are placed and the match is lost.
    pub fn infect(
        &mut self,
        board: &mut CityBoard,
        events: &mut EventQueue,
        city: CityId,
        color: DiseaseColor,
        count: u8,
    ) {
        let mut outbroken = FxHashSet::default();
        self.spread(board, events, city, color, count, &mut outbroken);
    }

    /// Start a fresh cascade with an outbreak of `color` at `city`.
    pub fn outbreak_at(&mut self, board: &mut CityBoard, events: &mut EventQueue, city: CityId, color: DiseaseColor) {
        let mut outbroken = FxHashSet::default();
        self.outbreak(board, events, city, color, &mut outbroken);
    }

    /// Advance the infection-rate step, saturating at the last step.
    /// Returns the new step.
    pub fn raise_infection_rate(&mut self) -> usize {
        self.infection_rate_step = (self.infection_rate_step + 1).min(INFECTION_RATES.len() - 1);
        self.infection_rate_step
    }

    /// Raise the infection rate one step, then infect `city` with `count`
    /// cubes.
    pub fn epidemic_at(
        &mut self,
        board: &mut CityBoard,
        events: &mut EventQueue,
        city: CityId,
        color: DiseaseColor,
        count: u8,
    ) {
        self.raise_infection_rate();
        info!(
            city = board.name(city),
            %color,
            rate = self.infection_rate(),
            "epidemic"
        );
        events.push(GameEvent::Epidemic {
            city,
            color,
            rate_step: self.infection_rate_step,
        });
        self.infect(board, events, city, color, count);
    }

    /// Remove cubes of `color` from `city`, returning how many were removed.
    ///
    /// A cured color loses every cube in the city; otherwise `count` cubes
    /// are removed (at least one, at most what is there). When the last cube
    /// of a color leaves the board, the color is eradicated if it was cured
    /// or its whole supply was once on the board.
    pub fn treat_disease_at(
        &mut self,
        board: &mut CityBoard,
        events: &mut EventQueue,
        city: CityId,
        color: DiseaseColor,
        count: u8,
    ) -> Result<u8> {
        let state = self.states[color];
        if state == DiseaseState::Eradicated {
            return Err(GameError::rule(format!("{} is eradicated", color)));
        }

        let present = board.city(city).cubes(color);
        if present == 0 {
            return Err(GameError::invalid(format!(
                "no {} cubes in {}",
                color,
                board.name(city)
            )));
        }

        let removed = match state {
            DiseaseState::Cured => present,
            _ => count.clamp(1, present),
        };
        board.city_mut(city).set_cubes(color, present - removed);
        self.cubes[color] -= removed;
        debug!(city = board.name(city), %color, removed, "treated");

        if self.cubes[color] == 0 && (state == DiseaseState::Cured || self.peaked[color]) {
            self.eradicate(events, color);
        }

        Ok(removed)
    }

    /// Mark `color` cured. Curing the last disease wins the match.
    pub fn cure_disease(&mut self, events: &mut EventQueue, color: DiseaseColor) -> Result<()> {
        if self.states[color] != DiseaseState::Uncured {
            return Err(GameError::rule(format!("{} is already cured", color)));
        }

        self.states[color] = DiseaseState::Cured;
        info!(%color, "disease cured");
        events.push(GameEvent::DiseaseCured { color });
        self.check_win(events);
        Ok(())
    }

    fn eradicate(&mut self, events: &mut EventQueue, color: DiseaseColor) {
        self.states[color] = DiseaseState::Eradicated;
        info!(%color, "disease eradicated");
        events.push(GameEvent::DiseaseEradicated { color });
        self.check_win(events);
    }

    fn check_win(&self, events: &mut EventQueue) {
        if self.all_cured() {
            events.conclude(MatchOutcome::Won);
        }
    }

    fn spread(
        &mut self,
        board: &mut CityBoard,
        events: &mut EventQueue,
        city: CityId,
        color: DiseaseColor,
        count: u8,
        outbroken: &mut FxHashSet<CityId>,
    ) {
        if events.is_over() || self.states[color] == DiseaseState::Eradicated {
            return;
        }

        let present = board.city(city).cubes(color);
        let wanted = present.saturating_add(count);
        let add = wanted.min(MAX_CUBES_PER_CITY) - present;

        if add > 0 {
            let placed = add.min(self.cubes_remaining(color));
            if placed > 0 {
                board.city_mut(city).set_cubes(color, present + placed);
                self.cubes[color] += placed;
                if self.cubes[color] == CUBES_PER_COLOR {
                    self.peaked[color] = true;
                }
                debug!(city = board.name(city), %color, placed, "infected");
                events.push(GameEvent::Infected { city, color, placed });
            }
            if placed < add {
                warn!(%color, "cube supply exhausted");
                events.push(GameEvent::CubesExhausted { color });
                events.conclude(MatchOutcome::Lost(LossReason::CubesExhausted(color)));
                return;
            }
        }

        if wanted > MAX_CUBES_PER_CITY && !outbroken.contains(&city) {
            self.outbreak(board, events, city, color, outbroken);
        }
    }

    fn outbreak(
        &mut self,
        board: &mut CityBoard,
        events: &mut EventQueue,
        city: CityId,
        color: DiseaseColor,
        outbroken: &mut FxHashSet<CityId>,
    ) {
        if events.is_over() {
            return;
        }
        outbroken.insert(city);

        self.outbreaks = (self.outbreaks + 1).min(MAX_OUTBREAKS);
        debug!(city = board.name(city), %color, total = self.outbreaks, "outbreak");
        events.push(GameEvent::Outbreak {
            city,
            color,
            total: self.outbreaks,
        });

        if self.outbreaks >= MAX_OUTBREAKS {
            warn!(outbreaks = self.outbreaks, "outbreak limit reached");
            events.conclude(MatchOutcome::Lost(LossReason::Outbreaks));
            return;
        }

        let neighbors: Neighbors = SmallVec::from_slice(board.neighbors(city));
        for neighbor in neighbors {
            if events.is_over() {
                break;
            }
            self.spread(board, events, neighbor, color, 1, outbroken);
        }
    }
}
