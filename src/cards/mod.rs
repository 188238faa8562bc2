//! Card types and deck builders.
//!
//! ## Key Types
//!
//! - `CardId`: Unique identifier across every card in a match
//! - `PlayerCard`, `InfectionCard`: The two card payloads
//! - `Card`: Tagged union over player, infection and epidemic cards
//! - `CardRecord`: Loader-facing description of one card

pub mod card;

pub use card::{
    epidemic_cards, standard_infection_cards, standard_player_cards, Card, CardId, CardKind,
    CardRecord, InfectionCard, PlayerCard,
};
