//! Session state: last-used preferences and the active results list.
//!
//! The session is what survives between CLI invocations but is not the
//! system of record: losing it costs the last generation's results and the
//! remembered form values, nothing more. It gets the same lenient-load
//! treatment as the board snapshot.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::domain::{preferences::Preferences, trip::TripRecord};

/// Errors raised when persisting the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session file could not be written.
    #[error("failed to write session: {0}")]
    Write(#[source] io::Error),

    /// The session could not be serialized.
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Preferences and active results carried across invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Last-used preference set. Fields retain their previous value across
    /// generations.
    pub preferences: Preferences,

    /// The most recent generation's results, newest generation wins.
    #[serde(default)]
    pub trips: Vec<TripRecord>,
}

impl Session {
    /// Loads the session from the given path.
    ///
    /// A missing file yields a default session; an unreadable or
    /// unparseable one is logged and also yields a default session.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(err) => {
                tracing::warn!("discarding unreadable session: {err}");
                return Self::default();
            }
        };
        serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!("discarding unparseable session: {err}");
            Self::default()
        })
    }

    /// Writes the session to the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be serialized or written.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(SessionError::Write)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(SessionError::Write)
    }

    /// Looks up a trip in the active results by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&TripRecord> {
        self.trips.iter().find(|t| t.id() == id)
    }

    /// Increments the vote count on the matching active result, if present.
    /// Returns the new count, or `None` if no result matched.
    pub fn vote(&mut self, id: &str) -> Option<u32> {
        let trip = self.trips.iter_mut().find(|t| t.id() == id)?;
        trip.votes += 1;
        Some(trip.votes)
    }
}
