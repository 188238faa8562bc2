//! Core engine types: players, roles, actions, RNG, configuration, errors,
//! outcomes.

pub mod action;
pub mod config;
pub mod error;
pub mod outcome;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord, ShareDirection};
pub use config::{Difficulty, MatchConfig};
pub use error::{GameError, Result};
pub use outcome::{LossReason, MatchOutcome};
pub use player::{PlayerId, Role};
pub use rng::GameRng;
