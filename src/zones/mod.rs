//! Card locations: draw piles and discard piles.
//!
//! ## Key Types
//!
//! - `CardPile<T>`: Ordered pile with draw, shuffle, split and merge
//! - `Decks`: The player and infection piles of one match
//! - `seed_epidemics`: Setup-time epidemic distribution over deck segments
//! - `recycle_onto`: Shuffle a discard pile back on top of its draw pile

pub mod decks;
pub mod pile;

pub use decks::Decks;
pub use pile::{recycle_onto, seed_epidemics, CardPile};
