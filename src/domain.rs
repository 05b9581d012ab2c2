//! Domain models for weekend-trip planning.
//!
//! This module contains the core domain types: trip records and their
//! payloads, the preference dimensions sent to the generator, the board, and
//! configuration.

/// The trip board and its filter types.
pub mod board;
pub use board::{Board, DateWindow, SaveOutcome, StatusFilter};

mod config;
pub use config::Config;

/// Preference dimensions and the preference set.
pub mod preferences;
pub use preferences::{Budget, Coordinates, Preferences, TravelMode, TripType, Vibe};

/// Trip records and the generator payload schema.
pub mod trip;
pub use trip::{TripPayload, TripRecord, TripStatus};
