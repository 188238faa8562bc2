//! Ordered event channel with a terminal outcome slot.

use tracing::info;

use crate::core::MatchOutcome;

use super::event::GameEvent;

/// Single ordered channel every component pushes its events into.
///
/// The queue also holds the match outcome. The first outcome recorded wins;
/// later ones are ignored, so a cascade that trips two loss conditions still
/// reports the one that happened first. Long-running loops (cascades, draws)
/// check [`EventQueue::is_over`] to stop early.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
    outcome: Option<MatchOutcome>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Record the match outcome and emit `MatchEnded`.
    ///
    /// Returns `false` if an outcome was already recorded.
    pub fn conclude(&mut self, outcome: MatchOutcome) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        info!(%outcome, "match over");
        self.outcome = Some(outcome);
        self.events.push(GameEvent::MatchEnded { outcome });
        true
    }

    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Pending events, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every pending event, oldest first. The outcome is kept.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
