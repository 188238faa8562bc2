//! Player identification and roles.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are assigned in registration order,
//! starting at `PlayerId(0)`, and index directly into the roster.
//!
//! ## Role
//!
//! Each player holds one role for the whole match. A role bends one action
//! rule in the player's favor; every role is granted at most once.

use serde::{Deserialize, Serialize};

use super::config::CARDS_TO_CURE;

/// Player identifier supporting up to four players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Special ability held by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Treating removes every cube of the color; treating a cured color is free.
    Medic,
    /// Builds research stations without discarding a city card.
    OperationsExpert,
    /// May give any city card when sharing knowledge.
    Researcher,
    /// Needs one card fewer to discover a cure.
    Scientist,
}

impl Role {
    /// Every role, in the order they are offered for assignment.
    pub const ALL: [Role; 4] = [
        Role::Medic,
        Role::OperationsExpert,
        Role::Researcher,
        Role::Scientist,
    ];

    /// Cards of one color this role must discard to cure.
    #[must_use]
    pub const fn cards_to_cure(self) -> usize {
        match self {
            Role::Scientist => CARDS_TO_CURE - 1,
            _ => CARDS_TO_CURE,
        }
    }

    #[must_use]
    pub const fn builds_without_card(self) -> bool {
        matches!(self, Role::OperationsExpert)
    }

    #[must_use]
    pub const fn treats_all_cubes(self) -> bool {
        matches!(self, Role::Medic)
    }

    #[must_use]
    pub const fn shares_any_card(self) -> bool {
        matches!(self, Role::Researcher)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Medic => "Medic",
            Role::OperationsExpert => "Operations Expert",
            Role::Researcher => "Researcher",
            Role::Scientist => "Scientist",
        };
        f.write_str(name)
    }
}
