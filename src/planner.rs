//! The planner facade: config, session, and board under one root.
//!
//! CLI commands talk to [`Planner`] rather than to the stores directly.
//! Centralizing the mutations matters for one operation in particular:
//! voting must touch both the active results list and the board, and a
//! single entry point keeps the two writes from ever being split across
//! call sites.

use std::path::{Path, PathBuf};

use crate::{
    domain::{
        Config,
        board::{Board, SaveOutcome},
        preferences::{Coordinates, Preferences},
        trip::TripRecord,
    },
    storage::{BoardStore, JsonFile, Session, SessionError, SnapshotError},
};

/// Errors raised by planner operations.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// The id matched nothing in the results or on the board.
    #[error("no trip with id '{0}' in the current results or on the board")]
    UnknownTrip(String),

    /// The board could not be persisted.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The session could not be persisted.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// The result of a vote: new counts wherever the id matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voted {
    /// New count on the active results entry, if one matched.
    pub in_results: Option<u32>,
    /// New count on the board entry, if one matched.
    pub on_board: Option<u32>,
}

/// Everything the CLI needs, opened from one data root.
#[derive(Debug)]
pub struct Planner {
    config: Config,
    session: Session,
    session_path: PathBuf,
    board: BoardStore<JsonFile>,
}

impl Planner {
    /// Opens the planner state under the given root directory.
    ///
    /// Missing or unreadable config, session, and board files all fall back
    /// to defaults; nothing here is fatal.
    #[must_use]
    pub fn open(root: &Path) -> Self {
        let config_path = root.join("config.toml");
        let config = Config::load(&config_path).unwrap_or_else(|e| {
            tracing::debug!("Failed to load config: {e}");
            Config::default()
        });
        let session_path = root.join("session.json");
        let session = Session::load(&session_path);
        let board = BoardStore::open(JsonFile::new(root.join("board.json")));
        Self {
            config,
            session,
            session_path,
            board,
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The last-used preference set.
    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.session.preferences
    }

    /// The active results list from the most recent generation.
    #[must_use]
    pub fn results(&self) -> &[TripRecord] {
        &self.session.trips
    }

    /// The board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        self.board.board()
    }

    /// Stores the preference set so the next generation starts from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted.
    pub fn set_preferences(&mut self, preferences: Preferences) -> Result<(), SessionError> {
        self.session.preferences = preferences;
        self.session.save(&self.session_path)
    }

    /// Accepts a detected city, overwriting the typed one and recording the
    /// resolved coordinates. Only called after explicit confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted.
    pub fn accept_location(
        &mut self,
        city: String,
        coords: Coordinates,
    ) -> Result<(), SessionError> {
        self.session.preferences.city = city;
        self.session.preferences.coords = Some(coords);
        self.session.save(&self.session_path)
    }

    /// Replaces the active results list with a fresh generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted.
    pub fn replace_results(&mut self, trips: Vec<TripRecord>) -> Result<(), SessionError> {
        self.session.trips = trips;
        self.session.save(&self.session_path)
    }

    /// Looks a trip up by id, in the active results first, then the board.
    #[must_use]
    pub fn find_trip(&self, id: &str) -> Option<&TripRecord> {
        self.session.find(id).or_else(|| self.board.board().get(id))
    }

    /// Toggles board membership for the trip with this id.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::UnknownTrip`] when the id matches nothing,
    /// or a persistence error.
    pub fn toggle_save(&mut self, id: &str) -> Result<(TripRecord, SaveOutcome), PlannerError> {
        let trip = self
            .find_trip(id)
            .cloned()
            .ok_or_else(|| PlannerError::UnknownTrip(id.to_string()))?;
        let outcome = self.board.toggle_save(&trip)?;
        Ok((trip, outcome))
    }

    /// Marks the trip with this id completed on the board.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::UnknownTrip`] when the id matches nothing,
    /// or a persistence error.
    pub fn mark_completed(&mut self, id: &str) -> Result<TripRecord, PlannerError> {
        let trip = self
            .find_trip(id)
            .cloned()
            .ok_or_else(|| PlannerError::UnknownTrip(id.to_string()))?;
        self.board.mark_completed(&trip)?;
        Ok(trip)
    }

    /// Adds one vote to the trip with this id, in the active results and on
    /// the board, wherever it is present.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::UnknownTrip`] when the id matches nothing,
    /// or a persistence error.
    pub fn vote(&mut self, id: &str) -> Result<Voted, PlannerError> {
        if self.find_trip(id).is_none() {
            return Err(PlannerError::UnknownTrip(id.to_string()));
        }

        let in_results = self.session.vote(id);
        if in_results.is_some() {
            self.session.save(&self.session_path)?;
        }
        let on_board = self.board.vote(id)?;

        Ok(Voted {
            in_results,
            on_board,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trip::{TripStatus, tests::sample};

    #[test]
    fn vote_updates_results_and_board_in_one_operation() {
        let tmp = tempfile::tempdir().unwrap();
        let mut planner = Planner::open(tmp.path());

        planner
            .replace_results(vec![sample("a", "Lonavala"), sample("b", "Alibaug")])
            .unwrap();
        planner.toggle_save("a").unwrap();

        let voted = planner.vote("a").unwrap();
        assert_eq!(voted.in_results, Some(1));
        assert_eq!(voted.on_board, Some(1));

        // Both copies moved together.
        assert_eq!(planner.results()[0].votes, 1);
        assert_eq!(planner.board().get("a").unwrap().votes, 1);
        // Unrelated records are untouched.
        assert_eq!(planner.results()[1].votes, 0);
    }

    #[test]
    fn vote_on_board_only_record_still_counts() {
        let tmp = tempfile::tempdir().unwrap();
        let mut planner = Planner::open(tmp.path());

        planner.replace_results(vec![sample("a", "Lonavala")]).unwrap();
        planner.toggle_save("a").unwrap();
        planner.replace_results(Vec::new()).unwrap();

        let voted = planner.vote("a").unwrap();
        assert_eq!(voted.in_results, None);
        assert_eq!(voted.on_board, Some(1));
    }

    #[test]
    fn vote_on_unknown_id_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut planner = Planner::open(tmp.path());
        assert!(matches!(
            planner.vote("ghost"),
            Err(PlannerError::UnknownTrip(_))
        ));
    }

    #[test]
    fn saving_resolves_ids_from_the_active_results() {
        let tmp = tempfile::tempdir().unwrap();
        let mut planner = Planner::open(tmp.path());
        planner.replace_results(vec![sample("a", "Lonavala")]).unwrap();

        let (trip, outcome) = planner.toggle_save("a").unwrap();
        assert_eq!(trip.destination(), "Lonavala");
        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(
            planner.board().get("a").unwrap().status,
            TripStatus::Saved
        );
    }

    #[test]
    fn completing_a_trip_absent_from_results_uses_the_board_copy() {
        let tmp = tempfile::tempdir().unwrap();
        let mut planner = Planner::open(tmp.path());
        planner.replace_results(vec![sample("a", "Lonavala")]).unwrap();
        planner.toggle_save("a").unwrap();
        planner.replace_results(Vec::new()).unwrap();

        planner.mark_completed("a").unwrap();
        assert_eq!(
            planner.board().get("a").unwrap().status,
            TripStatus::Completed
        );
    }

    #[test]
    fn state_survives_a_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let mut planner = Planner::open(tmp.path());
            let mut prefs = planner.preferences().clone();
            prefs.city = "Pune".to_string();
            planner.set_preferences(prefs).unwrap();
            planner.replace_results(vec![sample("a", "Lonavala")]).unwrap();
            planner.toggle_save("a").unwrap();
        }

        let planner = Planner::open(tmp.path());
        assert_eq!(planner.preferences().city, "Pune");
        assert_eq!(planner.results().len(), 1);
        assert!(planner.board().contains("a"));
    }
}
