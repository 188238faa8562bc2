//! Terminal match results.

use serde::{Deserialize, Serialize};

use crate::disease::DiseaseColor;

/// Why the players lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    /// The outbreak counter reached its limit.
    Outbreaks,
    /// A placement needed more cubes of this color than the supply held.
    CubesExhausted(DiseaseColor),
    /// A player had to draw from an empty player pile.
    PlayerDeckExhausted,
}

impl std::fmt::Display for LossReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LossReason::Outbreaks => f.write_str("too many outbreaks"),
            LossReason::CubesExhausted(color) => write!(f, "{} cube supply exhausted", color),
            LossReason::PlayerDeckExhausted => f.write_str("player deck exhausted"),
        }
    }
}

/// Result of a completed match. The game is cooperative, so the whole team
/// wins or loses together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// All four diseases cured.
    Won,
    Lost(LossReason),
}

impl MatchOutcome {
    #[must_use]
    pub fn is_win(self) -> bool {
        self == MatchOutcome::Won
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Won => f.write_str("won"),
            MatchOutcome::Lost(reason) => write!(f, "lost: {}", reason),
        }
    }
}
