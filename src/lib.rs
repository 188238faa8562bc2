//! # pandemic-sim
//!
//! A deterministic rules engine for the cooperative board game Pandemic.
//!
//! ## Design Principles
//!
//! 1. **Synchronous and Deterministic**: Every shuffle and role draw flows from
//!    one seeded `GameRng`, so a seed replays a match exactly.
//!
//! 2. **Validate, Then Mutate**: A rejected operation returns a `GameError`
//!    and leaves the match untouched.
//!
//! 3. **Terminal Conditions Are Events**: Running out of cubes or player
//!    cards ends the match through the event queue, not through an error.
//!
//! ## Architecture
//!
//! - **City Arena**: Cities are stored by `CityId` with separate adjacency
//!   lists; names resolve through a hash index.
//!
//! - **Scoped Cascades**: Outbreak chains carry their own visited set, so a
//!   city outbreaks at most once per chain.
//!
//! - **Persistent Data Structures**: Action history and snapshots use `im`
//!   for cheap clones.
//!
//! ## Modules
//!
//! - `core`: Players, roles, actions, RNG, configuration, errors, outcomes
//! - `board`: Cities, adjacency and the standard map
//! - `cards`: Player, infection and epidemic cards
//! - `zones`: Card piles (draw, discard, split, merge)
//! - `disease`: Disease colors and the infection/outbreak engine
//! - `events`: Event queue and listeners
//! - `turn`: Per-player turn state machine
//! - `game`: Match controller and snapshots

pub mod board;
pub mod cards;
pub mod core;
pub mod disease;
pub mod events;
pub mod game;
pub mod turn;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Difficulty, GameError, GameRng, LossReason, MatchConfig, MatchOutcome,
    PlayerId, Result, Role, ShareDirection,
};

pub use crate::board::{City, CityBoard, CityId, CityRecord};

pub use crate::cards::{Card, CardId, CardKind, CardRecord, InfectionCard, PlayerCard};

pub use crate::zones::{CardPile, Decks};

pub use crate::disease::{ColorMap, DiseaseColor, DiseaseEngine, DiseaseState};

pub use crate::events::{EventQueue, GameEvent, ListenerId};

pub use crate::turn::{PlayerTurn, Stage, TurnContext};

pub use crate::game::{MatchController, MatchSnapshot};
