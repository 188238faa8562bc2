//! Per-player turn state machine.
//!
//! ## Key Types
//!
//! - `Stage`: Inactive, Action, Draw, Infector
//! - `PlayerTurn`: Pawn, hand, stage and per-turn counters of one player
//! - `TurnContext`: Mutable match state lent to a turn operation

pub mod player_turn;
pub mod stage;

pub use player_turn::{PlayerTurn, TurnContext};
pub use stage::Stage;
