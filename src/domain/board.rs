//! The trip board: an ordered, newest-first collection of trips.
//!
//! The board is logically a map keyed by trip id, presented as an ordered
//! list. All mutations are defined here; persistence is layered on top by
//! [`crate::storage::BoardStore`].

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::trip::{TripRecord, TripStatus};

/// What [`Board::toggle_save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The trip was not on the board and has been saved.
    Saved,
    /// The trip was on the board and has been removed.
    Removed,
}

/// Status filter for board views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Keep every status.
    #[default]
    All,
    /// Bucket list only.
    Saved,
    /// Done trips only.
    Completed,
}

impl StatusFilter {
    const fn matches(self, status: TripStatus) -> bool {
        match self {
            Self::All => true,
            Self::Saved => matches!(status, TripStatus::Saved),
            Self::Completed => matches!(status, TripStatus::Completed),
        }
    }
}

/// Recency window for board views.
///
/// The window is measured against a record's completion date when it is
/// completed (falling back to its timestamp), and its timestamp otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum DateWindow {
    /// No recency cut-off.
    #[default]
    All,
    /// Last 30 days.
    #[value(name = "30")]
    #[serde(rename = "30")]
    Last30,
    /// Last 90 days.
    #[value(name = "90")]
    #[serde(rename = "90")]
    Last90,
}

impl DateWindow {
    fn contains(self, reference: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let limit = match self {
            Self::All => return true,
            Self::Last30 => 30.0,
            Self::Last90 => 90.0,
        };
        #[allow(clippy::cast_precision_loss)]
        let elapsed_days = (now - reference).num_seconds() as f64 / 86_400.0;
        elapsed_days <= limit
    }
}

/// The user's persisted collection of saved and completed trips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    trips: Vec<TripRecord>,
}

impl Board {
    /// Rebuilds a board from a rehydrated trip list, preserving order.
    #[must_use]
    pub const fn from_trips(trips: Vec<TripRecord>) -> Self {
        Self { trips }
    }

    /// The trips on the board, newest-first.
    #[must_use]
    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    /// Number of trips on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Looks up a trip by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TripRecord> {
        self.trips.iter().find(|t| t.id() == id)
    }

    /// Whether a trip with this id is on the board, whatever its status.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Toggles board membership for a trip.
    ///
    /// If a record with the same id is on the board it is removed; otherwise
    /// a copy is inserted at the front with `saved` status and a fresh
    /// timestamp.
    ///
    /// The toggle is keyed on *presence*, not on status: toggling a record
    /// that was marked completed removes it from the board entirely. That is
    /// the intended behaviour, and the only removal path for completed
    /// records.
    pub fn toggle_save(&mut self, trip: &TripRecord, now: DateTime<Utc>) -> SaveOutcome {
        if let Some(index) = self.trips.iter().position(|t| t.id() == trip.id()) {
            self.trips.remove(index);
            SaveOutcome::Removed
        } else {
            let mut saved = trip.clone();
            saved.status = TripStatus::Saved;
            saved.timestamp = now;
            self.trips.insert(0, saved);
            SaveOutcome::Saved
        }
    }

    /// Marks a trip completed.
    ///
    /// If it is already on the board the status and completion date are
    /// updated in place, preserving the original timestamp; otherwise a copy
    /// is inserted at the front with both instants stamped to `now`. Never
    /// removes a record.
    pub fn mark_completed(&mut self, trip: &TripRecord, now: DateTime<Utc>) {
        if let Some(existing) = self.trips.iter_mut().find(|t| t.id() == trip.id()) {
            existing.status = TripStatus::Completed;
            existing.completion_date = Some(now);
        } else {
            let mut completed = trip.clone();
            completed.status = TripStatus::Completed;
            completed.completion_date = Some(now);
            completed.timestamp = now;
            self.trips.insert(0, completed);
        }
    }

    /// Increments the vote count for the matching record, if present.
    ///
    /// Returns the new count, or `None` if no record matched.
    pub fn vote(&mut self, id: &str) -> Option<u32> {
        let trip = self.trips.iter_mut().find(|t| t.id() == id)?;
        trip.votes += 1;
        Some(trip.votes)
    }

    /// A lazy, restartable view of the board filtered by destination
    /// substring (case-insensitive), status, and recency window, measured
    /// against `now`. Ordering is preserved from the underlying store.
    pub fn filtered<'a>(
        &'a self,
        search: &str,
        window: DateWindow,
        status: StatusFilter,
        now: DateTime<Utc>,
    ) -> impl Iterator<Item = &'a TripRecord> + use<'a> {
        let needle = search.to_lowercase();
        self.trips.iter().filter(move |trip| {
            trip.destination().to_lowercase().contains(&needle)
                && status.matches(trip.status)
                && window.contains(trip.reference_instant(), now)
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::trip::tests::sample;

    #[test]
    fn toggle_save_alternates_membership() {
        let mut board = Board::default();
        let trip = sample("a", "Lonavala");
        let now = Utc::now();

        for round in 0..3 {
            assert_eq!(board.toggle_save(&trip, now), SaveOutcome::Saved, "round {round}");
            assert!(board.contains("a"));
            assert_eq!(board.get("a").unwrap().status, TripStatus::Saved);
            assert_eq!(board.toggle_save(&trip, now), SaveOutcome::Removed, "round {round}");
            assert!(!board.contains("a"));
        }
    }

    #[test]
    fn toggle_save_removes_completed_records() {
        // Presence-keyed on purpose: this is the removal path for completed
        // trips.
        let mut board = Board::default();
        let trip = sample("a", "Lonavala");
        let now = Utc::now();
        board.mark_completed(&trip, now);
        assert_eq!(board.get("a").unwrap().status, TripStatus::Completed);

        assert_eq!(board.toggle_save(&trip, now), SaveOutcome::Removed);
        assert!(board.is_empty());
    }

    #[test]
    fn saved_trips_are_inserted_at_the_front() {
        let mut board = Board::default();
        let now = Utc::now();
        board.toggle_save(&sample("a", "Lonavala"), now);
        board.toggle_save(&sample("b", "Alibaug"), now);
        let ids: Vec<_> = board.trips().iter().map(TripRecord::id).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn mark_completed_updates_in_place_and_preserves_timestamp() {
        let mut board = Board::default();
        let trip = sample("a", "Lonavala");
        let saved_at = Utc::now() - Duration::days(5);
        board.toggle_save(&trip, saved_at);

        let completed_at = Utc::now();
        board.mark_completed(&trip, completed_at);

        assert_eq!(board.len(), 1);
        let record = board.get("a").unwrap();
        assert_eq!(record.status, TripStatus::Completed);
        assert_eq!(record.completion_date, Some(completed_at));
        assert_eq!(record.timestamp, saved_at);
    }

    #[test]
    fn mark_completed_inserts_fresh_when_absent() {
        let mut board = Board::default();
        let now = Utc::now();
        board.mark_completed(&sample("b", "Alibaug"), now);

        let record = board.get("b").unwrap();
        assert_eq!(record.status, TripStatus::Completed);
        assert_eq!(record.completion_date, Some(now));
        assert_eq!(record.timestamp, now);
    }

    #[test]
    fn board_size_is_monotone_except_toggle_removal() {
        let mut board = Board::default();
        let now = Utc::now();
        board.toggle_save(&sample("a", "Lonavala"), now);
        board.mark_completed(&sample("b", "Alibaug"), now);
        board.mark_completed(&sample("a", "Lonavala"), now);
        assert_eq!(board.len(), 2);

        board.toggle_save(&sample("b", "Alibaug"), now);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn vote_increments_matching_record_only() {
        let mut board = Board::default();
        let now = Utc::now();
        board.toggle_save(&sample("a", "Lonavala"), now);
        board.toggle_save(&sample("b", "Alibaug"), now);

        assert_eq!(board.vote("a"), Some(1));
        assert_eq!(board.vote("a"), Some(2));
        assert_eq!(board.vote("missing"), None);
        assert_eq!(board.get("a").unwrap().votes, 2);
        assert_eq!(board.get("b").unwrap().votes, 0);
    }

    #[test]
    fn filtered_matches_substring_case_insensitively() {
        let mut board = Board::default();
        let now = Utc::now();
        board.toggle_save(&sample("a", "Lonavala"), now);
        board.toggle_save(&sample("b", "Alibaug"), now);

        let hits: Vec<_> = board
            .filtered("NAVA", DateWindow::All, StatusFilter::All, now)
            .map(TripRecord::id)
            .collect();
        assert_eq!(hits, ["a"]);
    }

    #[test]
    fn filtered_by_status() {
        let mut board = Board::default();
        let now = Utc::now();
        board.toggle_save(&sample("a", "Lonavala"), now);
        board.mark_completed(&sample("b", "Alibaug"), now);

        let saved: Vec<_> = board
            .filtered("", DateWindow::All, StatusFilter::Saved, now)
            .map(TripRecord::id)
            .collect();
        assert_eq!(saved, ["a"]);

        let completed: Vec<_> = board
            .filtered("", DateWindow::All, StatusFilter::Completed, now)
            .map(TripRecord::id)
            .collect();
        assert_eq!(completed, ["b"]);
    }

    #[test]
    fn window_measures_completed_trips_from_completion_date() {
        let mut board = Board::default();
        let now = Utc::now();

        board.mark_completed(&sample("old", "Hampi"), now - Duration::days(40));
        board.toggle_save(&sample("recent", "Alibaug"), now - Duration::days(10));

        let hits: Vec<_> = board
            .filtered("", DateWindow::Last30, StatusFilter::All, now)
            .map(TripRecord::id)
            .collect();
        assert_eq!(hits, ["recent"]);

        let hits90: Vec<_> = board
            .filtered("", DateWindow::Last90, StatusFilter::All, now)
            .map(TripRecord::id)
            .collect();
        assert_eq!(hits90, ["recent", "old"]);
    }

    #[test]
    fn filtered_is_idempotent_and_a_subset() {
        let mut board = Board::default();
        let now = Utc::now();
        board.toggle_save(&sample("a", "Lonavala"), now);
        board.mark_completed(&sample("b", "Alibaug"), now);

        let first: Vec<_> = board
            .filtered("a", DateWindow::Last90, StatusFilter::All, now)
            .map(TripRecord::id)
            .collect();
        let second: Vec<_> = board
            .filtered("a", DateWindow::Last90, StatusFilter::All, now)
            .map(TripRecord::id)
            .collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|id| board.contains(id)));
    }
}
