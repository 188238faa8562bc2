//! Match orchestration.
//!
//! ## Key Types
//!
//! - `MatchController`: Owns the match, runs setup and rotates turns
//! - `MatchSnapshot`: Cheap immutable view for observers

pub mod controller;
pub mod snapshot;

pub use controller::MatchController;
pub use snapshot::{CityView, DiseaseView, MatchSnapshot, PlayerView};
