use std::env;

use chrono::{DateTime, Utc};
use reqwest::{StatusCode, blocking::Client};

use super::{
    prompt,
    protocol::{
        Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, GoogleSearch,
        Part, Tool,
    },
};
use crate::domain::{
    Config,
    preferences::{Preferences, TripType},
    trip::{TripPayload, TripRecord},
};

/// Environment variable holding the generator API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Errors raised by the trip-generation request.
///
/// All of these are terminal for the attempt: the caller reports a failure
/// notice and the user re-triggers manually. There is no retry and no
/// partial-results path.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// No API key in the environment.
    #[error("{API_KEY_VAR} is not set")]
    MissingApiKey,

    /// The request could not be sent or the response body not read.
    #[error("trip generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("trip generation service returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: StatusCode,
        /// Response body, best effort.
        message: String,
    },

    /// The response arrived but did not match the expected shape.
    #[error("trip generation response did not match the expected shape: {0}")]
    Payload(String),
}

/// Blocking client for the trip-generation service.
#[derive(Debug, Clone)]
pub struct Generator {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    trip_count: usize,
}

impl Generator {
    /// Creates a generator with an explicit API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>, config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: config.api_base().to_string(),
            model: config.model().to_string(),
            trip_count: config.trip_count(),
        }
    }

    /// Creates a generator with the API key from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MissingApiKey`] if `GEMINI_API_KEY` is not
    /// set.
    pub fn from_env(config: &Config) -> Result<Self, GeneratorError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| GeneratorError::MissingApiKey)?;
        Ok(Self::new(api_key, config))
    }

    /// Requests trip options for the given preference set.
    ///
    /// Exactly one attempt. On success the returned records carry
    /// `discovered` status, a fresh timestamp, the requested trip type, and
    /// zero votes.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success HTTP status, or a
    /// response that does not match the contract shape.
    pub fn generate(&self, prefs: &Preferences) -> Result<Vec<TripRecord>, GeneratorError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt::build(prefs, self.trip_count),
                }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: prompt::response_schema(),
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.api_base, self.model
        );
        tracing::debug!(model = %self.model, "requesting trip generation");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(GeneratorError::Status { status, message });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|err| GeneratorError::Payload(err.to_string()))?;
        let text = parsed
            .text()
            .ok_or_else(|| GeneratorError::Payload("response carried no text".to_string()))?;

        trips_from_text(text, prefs.trip_type, Utc::now())
    }
}

/// Parses the generator's JSON text into trip records, injecting the fields
/// the generator does not supply.
fn trips_from_text(
    text: &str,
    trip_type: TripType,
    now: DateTime<Utc>,
) -> Result<Vec<TripRecord>, GeneratorError> {
    let payloads: Vec<TripPayload> =
        serde_json::from_str(text).map_err(|err| GeneratorError::Payload(err.to_string()))?;
    Ok(payloads
        .into_iter()
        .map(|payload| TripRecord::discovered(payload, trip_type, now))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trip::TripStatus;

    const FIXTURE: &str = r#"[{
        "id": "t-1",
        "destination": "Lonavala",
        "destinationMapsUrl": "https://maps.example/lonavala",
        "whyFits": "Close and green.",
        "distance": 83,
        "travelTime": "2h by train",
        "budgetRange": "₹5k–₹8k",
        "costBreakdown": {"stay": "₹2500", "travel": "₹500", "food": "₹1500", "misc": "₹500"},
        "crowdLevel": "High",
        "weather": "rainy",
        "weatherSensitivity": "Waterfalls need rain, views need none.",
        "bestTime": "Monsoon",
        "staySuggestion": "Old town homestay",
        "experiences": ["Tiger point", "Bhushi dam"],
        "foodHighlight": "Chikki",
        "realityScore": 5.5,
        "tag": "Overrated",
        "notForEveryone": "Weekend crowds are brutal.",
        "costStats": "Most spend ₹6k",
        "nudgeReason": "Waterfalls are at full flow right now.",
        "itinerary": [{
            "day": 1,
            "title": "Waterfall run",
            "items": [{"time": "Morning", "activity": "Train up", "note": "Book a window seat"}]
        }],
        "hotels": [{"name": "Hilltop Inn", "type": "Budget hotel", "approxPrice": "₹1800/night", "mapsUrl": "https://maps.example/hilltop"}],
        "userStories": [{"text": "Went solo, loved it.", "username": "anon", "date": "last month"}],
        "images": [{"url": "https://img.example/1.jpg", "sourceUrl": "https://blog.example/1"}]
    }]"#;

    #[test]
    fn parses_payloads_and_injects_lifecycle_fields() {
        let now = Utc::now();
        let trips = trips_from_text(FIXTURE, TripType::Group, now).unwrap();
        assert_eq!(trips.len(), 1);

        let trip = &trips[0];
        assert_eq!(trip.id(), "t-1");
        assert_eq!(trip.destination(), "Lonavala");
        assert_eq!(trip.status, TripStatus::Discovered);
        assert_eq!(trip.trip_type, TripType::Group);
        assert_eq!(trip.timestamp, now);
        assert_eq!(trip.votes, 0);
        assert!(trip.completion_date.is_none());
    }

    #[test]
    fn shape_mismatch_is_a_payload_error() {
        let err = trips_from_text(r#"{"oops": true}"#, TripType::Solo, Utc::now()).unwrap_err();
        assert!(matches!(err, GeneratorError::Payload(_)));
    }

    #[test]
    fn missing_required_field_is_a_payload_error() {
        // `destination` is required by the contract.
        let err =
            trips_from_text(r#"[{"id": "t-1"}]"#, TripType::Solo, Utc::now()).unwrap_err();
        assert!(matches!(err, GeneratorError::Payload(_)));
    }

    #[test]
    fn empty_array_is_a_valid_empty_result() {
        let trips = trips_from_text("[]", TripType::Solo, Utc::now()).unwrap();
        assert!(trips.is_empty());
    }
}
