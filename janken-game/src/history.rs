//! Storage seam for the append-only round history.

use thiserror::Error;

use crate::round::Round;

/// Errors surfaced by a history store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file or device failure.
    #[error("history I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// A round could not be encoded for storage.
    #[error("could not encode round: {0}")]
    Encode(#[from] serde_json::Error),
    /// A stored record no longer matches the round schema.
    #[error("history record on line {line} is malformed: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
}

/// Durable, append-only record of every round ever played.
///
/// Implementations must preserve insertion order so that aggregates derived
/// from [`load_all`](HistoryStore::load_all) follow chronological play order.
pub trait HistoryStore {
    /// Durably append one record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn append(&mut self, round: &Round) -> Result<(), StoreError>;

    /// Every previously appended record, in insertion order. An empty store
    /// yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if stored records cannot be read or decoded.
    fn load_all(&self) -> Result<Vec<Round>, StoreError>;

    /// Reinitialize the store to empty, dropping any stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared.
    fn reset(&mut self) -> Result<(), StoreError>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    rounds: Vec<Round>,
}

impl MemoryHistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&mut self, round: &Round) -> Result<(), StoreError> {
        self.rounds.push(round.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Round>, StoreError> {
        Ok(self.rounds.clone())
    }

    fn reset(&mut self) -> Result<(), StoreError> {
        self.rounds.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Choice;

    #[test]
    fn memory_store_preserves_insertion_order() {
        let mut store = MemoryHistoryStore::new();
        let first = Round::resolve(Choice::Rock, Choice::Scissors);
        let second = Round::resolve(Choice::Paper, Choice::Paper);
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        let rounds = store.load_all().unwrap();
        assert_eq!(rounds, vec![first, second]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn empty_store_loads_empty_not_error() {
        let store = MemoryHistoryStore::new();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn reset_clears_stored_rounds() {
        let mut store = MemoryHistoryStore::new();
        store
            .append(&Round::resolve(Choice::Rock, Choice::Rock))
            .unwrap();
        store.reset().unwrap();
        assert!(store.is_empty());
    }
}
