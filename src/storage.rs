//! Persistence for the board and the session.

pub mod board_store;
mod session;

pub use board_store::{BoardStore, JsonFile, Snapshot, SnapshotError};
pub use session::{Session, SessionError};
