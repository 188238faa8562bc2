//! Error types for the simulation engine.
//!
//! Every rule check fails synchronously with one of four kinds. Terminal
//! conditions (cube exhaustion, an empty player deck) are not errors: they
//! are reported as events and end the match without failing the operation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Wrong stage or wrong turn for the attempted operation.
    #[error("Illegal state transition: {0}")]
    IllegalStateTransition(String),

    /// Target not adjacent, already there, missing card, missing station.
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    /// Hand over the limit, nothing left to relocate, too few cards.
    #[error("Resource limit: {0}")]
    ResourceLimit(String),

    /// The rules forbid the operation outright.
    #[error("Rule violation: {0}")]
    RuleViolation(String),
}

impl GameError {
    pub(crate) fn state(msg: impl Into<String>) -> Self {
        GameError::IllegalStateTransition(msg.into())
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GameError::InvalidMove(msg.into())
    }

    pub(crate) fn limit(msg: impl Into<String>) -> Self {
        GameError::ResourceLimit(msg.into())
    }

    pub(crate) fn rule(msg: impl Into<String>) -> Self {
        GameError::RuleViolation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
