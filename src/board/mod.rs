//! The world map.
//!
//! ## Key Types
//!
//! - `CityId`: Stable arena index of a city
//! - `City`: Identity plus mutable cube counts and research-station flag
//! - `CityBoard`: Arena of cities with a fixed, symmetric adjacency relation
//! - `CityRecord`: Loader-facing description of one city

pub mod city;
pub mod city_board;
pub mod standard;

pub use city::{City, CityId};
pub use city_board::{CityBoard, CityRecord, Neighbors};
pub use standard::{standard_records, STANDARD_CITIES, STANDARD_ROUTES};
