//! File-backed history store: one JSON-encoded round per line.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::warn;

use janken_game::{HistoryStore, Round, StoreError};

/// Append-only history file in JSON-lines form.
///
/// Lines are written atomically per round in append mode, so read-back order
/// is insertion order. The parent directory is created on first write.
#[derive(Debug, Clone)]
pub struct JsonlHistoryStore {
    path: PathBuf,
}

impl JsonlHistoryStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the underlying history file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl HistoryStore for JsonlHistoryStore {
    fn append(&mut self, round: &Round) -> Result<(), StoreError> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(round)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Round>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        let mut rounds = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let round = serde_json::from_str(&line).map_err(|source| StoreError::Malformed {
                line: idx + 1,
                source,
            })?;
            rounds.push(round);
        }
        Ok(rounds)
    }

    fn reset(&mut self) -> Result<(), StoreError> {
        self.ensure_parent()?;
        fs::write(&self.path, "")?;
        Ok(())
    }
}

/// Load the full history, falling back to an empty store when the file is
/// unreadable or corrupt. The damaged file is reinitialized so later appends
/// start clean; the session being played is unaffected.
pub fn load_or_reset<S: HistoryStore>(store: &mut S) -> Vec<Round> {
    match store.load_all() {
        Ok(rounds) => rounds,
        Err(err) => {
            warn!("history unreadable, starting fresh: {err}");
            if let Err(reset_err) = store.reset() {
                warn!("could not reinitialize history: {reset_err}");
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use janken_game::Choice;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlHistoryStore::new(dir.path().join("history.jsonl"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn append_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonlHistoryStore::new(dir.path().join("data/nested/history.jsonl"));
        store
            .append(&Round::resolve(Choice::Rock, Choice::Paper))
            .unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn roundtrip_preserves_field_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonlHistoryStore::new(dir.path().join("history.jsonl"));
        let prior = Round::resolve(Choice::Rock, Choice::Paper);
        store.append(&prior).unwrap();

        let fresh = Round::resolve(Choice::Scissors, Choice::Scissors);
        store.append(&fresh).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![prior, fresh]);
    }

    #[test]
    fn malformed_line_reports_its_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let mut store = JsonlHistoryStore::new(&path);
        store
            .append(&Round::resolve(Choice::Rock, Choice::Scissors))
            .unwrap();
        fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap()
            .write_all(b"{not json}\n")
            .unwrap();

        match store.load_all() {
            Err(StoreError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn load_or_reset_recovers_from_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        fs::write(&path, "garbage\n").unwrap();

        let mut store = JsonlHistoryStore::new(&path);
        assert!(load_or_reset(&mut store).is_empty());

        // The file was reinitialized; appends land on a clean store.
        store
            .append(&Round::resolve(Choice::Paper, Choice::Rock))
            .unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }
}
