//! Append-only event history with a drain cursor.

use im::Vector;

use super::event::GameEvent;

/// Every event of a session, plus how far a consumer has read.
///
/// History is an `im::Vector`, so snapshots are cheap to clone.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    history: Vector<GameEvent>,
    cursor: usize,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.history.push_back(event);
    }

    /// Events not yet taken, oldest first. Advances the cursor.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        let fresh = self.history.iter().skip(self.cursor).cloned().collect();
        self.cursor = self.history.len();
        fresh
    }

    /// Number of events not yet taken.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.history.len() - self.cursor
    }

    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.history.back()
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.cursor = 0;
    }
}
