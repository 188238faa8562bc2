//! Turn stages.

use serde::{Deserialize, Serialize};

/// Where a player is within their turn.
///
/// A turn runs `Inactive -> Action -> Draw -> Infector -> Inactive`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Not this player's turn (or the turn has not started).
    #[default]
    Inactive,
    /// Spending up to four actions.
    Action,
    /// Drawing two player cards.
    Draw,
    /// Drawing infection cards.
    Infector,
}

impl Stage {
    /// The stage that follows this one.
    #[must_use]
    pub const fn next(self) -> Stage {
        match self {
            Stage::Inactive => Stage::Action,
            Stage::Action => Stage::Draw,
            Stage::Draw => Stage::Infector,
            Stage::Infector => Stage::Inactive,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Inactive => "inactive",
            Stage::Action => "action",
            Stage::Draw => "draw",
            Stage::Infector => "infector",
        };
        f.write_str(name)
    }
}
