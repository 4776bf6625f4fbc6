//! Per-session storage of the most recent flashcard set
//!
//! One overwritable slot per session, last write wins. The store is
//! handed to both the generation and export handlers as an explicit
//! dependency, and every stored set carries a process-wide monotone
//! generation id so overwrites are observable.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::cards::Flashcard;

/// A stored set: the cards plus bookkeeping for observability
#[derive(Debug, Clone)]
pub struct StoredSet {
    /// Monotonically increasing across the whole process
    pub generation: u64,
    pub created_at: DateTime<Utc>,
    pub cards: Vec<Flashcard>,
}

/// Keyed single-slot store of the current flashcard set per session
#[derive(Debug, Default)]
pub struct SessionStore {
    slots: Mutex<HashMap<String, StoredSet>>,
    counter: AtomicU64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the session's slot, returning the new generation id
    pub fn put(&self, session: &str, cards: Vec<Flashcard>) -> u64 {
        let generation = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(%session, generation, count = cards.len(), "put: storing set");

        let set = StoredSet {
            generation,
            created_at: Utc::now(),
            cards,
        };
        self.slots.lock().unwrap().insert(session.to_string(), set);
        generation
    }

    /// Clone the session's current slot, if any
    pub fn get(&self, session: &str) -> Option<StoredSet> {
        let slot = self.slots.lock().unwrap().get(session).cloned();
        debug!(%session, found = slot.is_some(), "get: called");
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_before_put_is_none() {
        let store = SessionStore::new();
        assert!(store.get("nobody").is_none());
    }

    #[test]
    fn test_put_then_get_round_trips() {
        let store = SessionStore::new();
        let cards = vec![Flashcard::new("q", "a")];

        let generation = store.put("alice", cards.clone());

        let stored = store.get("alice").unwrap();
        assert_eq!(stored.generation, generation);
        assert_eq!(stored.cards, cards);
    }

    #[test]
    fn test_second_put_overwrites_with_larger_generation() {
        let store = SessionStore::new();

        let first = store.put("alice", vec![Flashcard::new("old", "old")]);
        let second = store.put("alice", vec![Flashcard::new("new", "new")]);

        assert!(second > first, "generation ids must be strictly increasing");
        let stored = store.get("alice").unwrap();
        assert_eq!(stored.generation, second);
        assert_eq!(stored.cards[0].question, "new");
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = SessionStore::new();

        store.put("alice", vec![Flashcard::new("hers", "1")]);
        store.put("bob", vec![Flashcard::new("his", "2")]);

        assert_eq!(store.get("alice").unwrap().cards[0].question, "hers");
        assert_eq!(store.get("bob").unwrap().cards[0].question, "his");
    }

    #[test]
    fn test_empty_set_is_storable() {
        // An empty parse result is still a successful generation; the
        // slot holds it and export produces header-only artifacts.
        let store = SessionStore::new();
        store.put("alice", vec![]);
        assert!(store.get("alice").unwrap().cards.is_empty());
    }
}
