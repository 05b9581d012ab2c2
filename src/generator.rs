//! Client for the external trip-generation service.
//!
//! One blocking HTTP request per generation, constrained to a JSON response
//! schema. The payload schema is a contract boundary: fields pass through
//! opaquely, and the core injects only the lifecycle fields after receipt.

mod client;
mod prompt;
mod protocol;

pub use client::{API_KEY_VAR, Generator, GeneratorError};
