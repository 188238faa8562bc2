//! Diseases: colors, per-color storage and the disease engine.
//!
//! ## Key Types
//!
//! - `DiseaseColor`: One of the four diseases
//! - `ColorMap<T>`: Array-backed per-color storage
//! - `DiseaseState`: Uncured, cured or eradicated
//! - `DiseaseEngine`: Infection, outbreak, epidemic, treat and cure rules

pub mod color;
pub mod engine;

pub use color::{ColorMap, DiseaseColor};
pub use engine::{DiseaseEngine, DiseaseState};
