//! Durable storage for the board.
//!
//! The [`BoardStore`] wraps the pure in-memory [`Board`] and a [`Snapshot`]
//! port. Every mutation synchronously writes the full board back through the
//! port, so the snapshot is always the system of record.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::Utc;

use crate::domain::{
    board::{Board, SaveOutcome},
    trip::TripRecord,
};

/// Errors raised by snapshot reads and writes.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot could not be read.
    #[error("failed to read board snapshot: {0}")]
    Read(#[source] io::Error),

    /// The snapshot could not be written.
    #[error("failed to write board snapshot: {0}")]
    Write(#[source] io::Error),

    /// The board could not be serialized.
    #[error("failed to serialize board: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence port for the board.
///
/// Read once at open, written after every mutation. Implementations decide
/// where the bytes live; the store only sees JSON text.
pub trait Snapshot {
    /// Reads the snapshot, or `None` if one has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if a snapshot exists but cannot be read.
    fn read(&self) -> Result<Option<String>, SnapshotError>;

    /// Writes the snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn write(&self, contents: &str) -> Result<(), SnapshotError>;
}

/// A snapshot stored as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Creates a snapshot backed by the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file the snapshot lives in.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Snapshot for JsonFile {
    fn read(&self) -> Result<Option<String>, SnapshotError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotError::Read(err)),
        }
    }

    fn write(&self, contents: &str) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(SnapshotError::Write)?;
        }
        fs::write(&self.path, contents).map_err(SnapshotError::Write)
    }
}

/// The board plus its persistence port.
#[derive(Debug)]
pub struct BoardStore<S> {
    board: Board,
    snapshot: S,
}

impl<S: Snapshot> BoardStore<S> {
    /// Opens the store, rehydrating the board from the snapshot.
    ///
    /// A missing snapshot yields an empty board. An unreadable or
    /// unparseable snapshot is logged at warn level and also yields an empty
    /// board; the next mutation overwrites it.
    pub fn open(snapshot: S) -> Self {
        let board = match snapshot.read() {
            Ok(None) => Board::default(),
            Ok(Some(contents)) => match serde_json::from_str::<Vec<TripRecord>>(&contents) {
                Ok(trips) => Board::from_trips(trips),
                Err(err) => {
                    tracing::warn!("discarding unparseable board snapshot: {err}");
                    Board::default()
                }
            },
            Err(err) => {
                tracing::warn!("discarding unreadable board snapshot: {err}");
                Board::default()
            }
        };
        Self { board, snapshot }
    }

    /// The in-memory board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Toggles board membership for a trip and persists the result.
    ///
    /// See [`Board::toggle_save`] for the presence-keyed semantics.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated board cannot be persisted.
    pub fn toggle_save(&mut self, trip: &TripRecord) -> Result<SaveOutcome, SnapshotError> {
        let outcome = self.board.toggle_save(trip, Utc::now());
        self.persist()?;
        Ok(outcome)
    }

    /// Marks a trip completed and persists the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated board cannot be persisted.
    pub fn mark_completed(&mut self, trip: &TripRecord) -> Result<(), SnapshotError> {
        self.board.mark_completed(trip, Utc::now());
        self.persist()
    }

    /// Increments the vote count for a board record, if present, and
    /// persists the result. Returns the new count, or `None` if no record
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated board cannot be persisted.
    pub fn vote(&mut self, id: &str) -> Result<Option<u32>, SnapshotError> {
        let votes = self.board.vote(id);
        self.persist()?;
        Ok(votes)
    }

    fn persist(&self) -> Result<(), SnapshotError> {
        let contents = serde_json::to_string_pretty(self.board.trips())?;
        self.snapshot.write(&contents)
    }
}
