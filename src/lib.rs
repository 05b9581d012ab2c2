#![recursion_limit = "256"]
//! Weekend-trip discovery with a durable personal board.
//!
//! Trip suggestions come from an external generative-AI service; the board
//! is a locally persisted, filterable collection of saved and completed
//! trips, and the local system of record.

pub mod domain;
pub use domain::{
    Board, Config, DateWindow, Preferences, SaveOutcome, StatusFilter, TripRecord, TripStatus,
};

/// Persistence for the board and session.
pub mod storage;
pub use storage::{BoardStore, JsonFile, Session, Snapshot};

/// Trip-generation service client.
pub mod generator;
pub use generator::{Generator, GeneratorError};

/// Home-city detection.
pub mod geocode;
pub use geocode::{GeocodeError, Located, Locator};

/// The facade the CLI drives.
pub mod planner;
pub use planner::{Planner, PlannerError};
