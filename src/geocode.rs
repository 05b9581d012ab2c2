//! Home-city detection: IP geolocation plus reverse geocoding.
//!
//! The CLI analogue of the browser's geolocation flow: approximate
//! coordinates from an IP-geolocation endpoint, then a place name from
//! Nominatim. Both calls share a fixed 10-second bound. Every failure is
//! non-fatal and maps to a distinct user-facing message; the detected city is
//! only ever a suggestion for the caller to confirm.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::preferences::Coordinates;

const IP_LOOKUP_URL: &str = "http://ip-api.com/json";
const REVERSE_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/reverse";
const TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while detecting the home city.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The HTTP client could not be constructed.
    #[error("location lookup unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// A request exceeded the fixed time bound.
    #[error("location request timed out")]
    Timeout,

    /// A request failed for network reasons.
    #[error("network error detecting city: {0}")]
    Network(#[source] reqwest::Error),

    /// The IP-geolocation service refused the lookup.
    #[error("location lookup failed: {0}")]
    Lookup(String),

    /// Coordinates resolved, but no usable place name came back.
    #[error("couldn't pinpoint a city name")]
    NoCity,
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }
}

/// A successfully detected location.
#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    /// The detected city name.
    pub city: String,
    /// The coordinates it was resolved from.
    pub coords: Coordinates,
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    #[serde(default)]
    address: Address,
}

/// The slice of Nominatim's address hierarchy we care about.
#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state_district: Option<String>,
    suburb: Option<String>,
}

impl Address {
    /// The best available place name: city, town, village, district, or
    /// suburb, in that preference order.
    fn place_name(self) -> Option<String> {
        self.city
            .or(self.town)
            .or(self.village)
            .or(self.state_district)
            .or(self.suburb)
    }
}

/// Blocking client for the location flow.
#[derive(Debug, Clone)]
pub struct Locator {
    client: Client,
}

impl Locator {
    /// Creates a locator with the fixed 10-second request bound.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Unavailable`] if the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(TIMEOUT)
            .user_agent("WeekendEscapeGenerator/1.0")
            .build()
            .map_err(GeocodeError::Unavailable)?;
        Ok(Self { client })
    }

    /// Detects the current city: coordinates from the IP lookup, then a
    /// place name from reverse geocoding.
    ///
    /// # Errors
    ///
    /// Returns a distinct error kind per failure mode; none of them are
    /// fatal to the caller.
    pub fn locate(&self) -> Result<Located, GeocodeError> {
        let coords = self.ip_coordinates()?;
        tracing::debug!(lat = coords.latitude, lon = coords.longitude, "resolved coordinates");
        let city = self.reverse_geocode(coords)?;
        Ok(Located { city, coords })
    }

    fn ip_coordinates(&self) -> Result<Coordinates, GeocodeError> {
        let response: IpLookupResponse = self.client.get(IP_LOOKUP_URL).send()?.json()?;
        if response.status != "success" {
            return Err(GeocodeError::Lookup(
                response.message.unwrap_or_else(|| "unknown reason".to_string()),
            ));
        }
        match (response.lat, response.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(GeocodeError::Lookup("no coordinates returned".to_string())),
        }
    }

    /// Resolves coordinates to a place name.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::NoCity`] when the address hierarchy holds no
    /// usable name, and network/timeout errors otherwise.
    pub fn reverse_geocode(&self, coords: Coordinates) -> Result<String, GeocodeError> {
        let response: ReverseGeocodeResponse = self
            .client
            .get(REVERSE_GEOCODE_URL)
            .query(&[
                ("format", "jsonv2"),
                ("lat", &coords.latitude.to_string()),
                ("lon", &coords.longitude.to_string()),
            ])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()?
            .json()?;

        response.address.place_name().ok_or(GeocodeError::NoCity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(
        city: Option<&str>,
        town: Option<&str>,
        village: Option<&str>,
        state_district: Option<&str>,
        suburb: Option<&str>,
    ) -> Address {
        Address {
            city: city.map(String::from),
            town: town.map(String::from),
            village: village.map(String::from),
            state_district: state_district.map(String::from),
            suburb: suburb.map(String::from),
        }
    }

    #[test]
    fn place_name_prefers_city_over_everything() {
        let found = address(Some("Pune"), Some("Khed"), None, Some("Pune District"), None);
        assert_eq!(found.place_name().as_deref(), Some("Pune"));
    }

    #[test]
    fn place_name_walks_the_hierarchy_in_order() {
        assert_eq!(
            address(None, Some("Khed"), Some("Wada"), None, None)
                .place_name()
                .as_deref(),
            Some("Khed")
        );
        assert_eq!(
            address(None, None, None, None, Some("Baner"))
                .place_name()
                .as_deref(),
            Some("Baner")
        );
    }

    #[test]
    fn empty_address_has_no_place_name() {
        assert!(address(None, None, None, None, None).place_name().is_none());
    }

    #[test]
    fn failed_ip_lookup_parses_with_message() {
        let raw = r#"{"status": "fail", "message": "private range"}"#;
        let parsed: IpLookupResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.status, "fail");
        assert_eq!(parsed.message.as_deref(), Some("private range"));
    }
}
