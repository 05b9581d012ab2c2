use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Budget band for the whole weekend, per head.
///
/// The display strings are part of the generator contract and are sent
/// verbatim in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Budget {
    /// ₹2k–₹5k.
    #[serde(rename = "₹2k–₹5k")]
    Low,
    /// ₹5k–₹8k.
    #[default]
    #[serde(rename = "₹5k–₹8k")]
    Mid,
    /// ₹8k–₹12k.
    #[serde(rename = "₹8k–₹12k")]
    High,
    /// ₹12k and up.
    #[serde(rename = "₹12k+")]
    Premium,
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let band = match self {
            Self::Low => "₹2k–₹5k",
            Self::Mid => "₹5k–₹8k",
            Self::High => "₹8k–₹12k",
            Self::Premium => "₹12k+",
        };
        f.write_str(band)
    }
}

/// The mood the trip should match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Vibe {
    /// Slow mornings, no agenda.
    #[default]
    #[serde(rename = "Chill / Slow")]
    Chill,
    /// Book tonight, leave tomorrow.
    #[serde(rename = "Spontaneous")]
    Spontaneous,
    /// Hills, forests, water.
    #[serde(rename = "Nature Reset")]
    Nature,
    /// People, food, nightlife.
    #[serde(rename = "Social / Fun")]
    Social,
    /// Maximum recovery, minimum effort.
    #[serde(rename = "Burnt Out")]
    BurntOut,
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Chill => "Chill / Slow",
            Self::Spontaneous => "Spontaneous",
            Self::Nature => "Nature Reset",
            Self::Social => "Social / Fun",
            Self::BurntOut => "Burnt Out",
        };
        f.write_str(label)
    }
}

/// How the user wants to get there. No flights, ever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum TravelMode {
    /// Indian Railways.
    Train,
    /// Overnight or intercity bus.
    Bus,
    /// Self-drive.
    #[serde(rename = "Self-drive")]
    Drive,
    /// Whatever works.
    #[default]
    Any,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Train => "Train",
            Self::Bus => "Bus",
            Self::Drive => "Self-drive",
            Self::Any => "Any",
        };
        f.write_str(label)
    }
}

/// Who is travelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum TripType {
    /// One person.
    #[default]
    Solo,
    /// Two people.
    Couple,
    /// Three or more.
    Group,
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Solo => "Solo",
            Self::Couple => "Couple",
            Self::Group => "Group",
        };
        f.write_str(label)
    }
}

/// Approximate geographic coordinates of the home city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// The full preference set sent to the trip generator.
///
/// Preferences are session state: each field keeps its last value across
/// generations, and only the city is validated (it must be non-empty before a
/// generation is allowed).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Home city, free text.
    pub city: String,
    /// Resolved coordinates, if the city was detected via `locate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Coordinates>,
    /// Budget band.
    pub budget: Budget,
    /// Trip mood.
    pub vibe: Vibe,
    /// Preferred travel mode.
    pub travel_mode: TravelMode,
    /// Travelling party.
    pub trip_type: TripType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_form_state() {
        let prefs = Preferences::default();
        assert!(prefs.city.is_empty());
        assert_eq!(prefs.budget, Budget::Mid);
        assert_eq!(prefs.vibe, Vibe::Chill);
        assert_eq!(prefs.travel_mode, TravelMode::Any);
        assert_eq!(prefs.trip_type, TripType::Solo);
        assert!(prefs.coords.is_none());
    }

    #[test]
    fn budget_serializes_as_band_string() {
        let json = serde_json::to_string(&Budget::Premium).unwrap();
        assert_eq!(json, "\"₹12k+\"");
        let back: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Budget::Premium);
    }

    #[test]
    fn display_strings_match_generator_contract() {
        assert_eq!(Vibe::BurntOut.to_string(), "Burnt Out");
        assert_eq!(TravelMode::Drive.to_string(), "Self-drive");
        assert_eq!(TripType::Couple.to_string(), "Couple");
    }
}
