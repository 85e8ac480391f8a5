//! Itinerary data model and the typed JSON decode step.
//!
//! The remote manifest is loosely shaped, so every optional field falls back
//! to a documented default instead of failing the whole document. A stop
//! without a usable `location` is the one exception: it rejects the manifest.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// A geographic point as (latitude, longitude) in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Sentinel position used while no stop has been completed yet.
    pub const ORIGIN: Coordinate = Coordinate { lat: 0.0, lng: 0.0 };

    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// GeoJSON position order: `[lng, lat]`.
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// One itinerary waypoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Scheduled arrival, epoch milliseconds.
    #[serde(default, deserialize_with = "lenient_millis")]
    pub arrival: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub presents_delivered: u64,
    pub location: Coordinate,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
}

impl Stop {
    pub fn new(arrival: i64, presents_delivered: u64, location: impl Into<Coordinate>) -> Self {
        Self {
            arrival,
            presents_delivered,
            location: location.into(),
            city: String::new(),
            region: String::new(),
        }
    }

    pub fn with_place(mut self, city: impl Into<String>, region: impl Into<String>) -> Self {
        self.city = city.into();
        self.region = region.into();
        self
    }
}

/// The full ordered itinerary for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub destinations: Vec<Stop>,
}

impl Manifest {
    pub fn new(destinations: Vec<Stop>) -> Self {
        Self { destinations }
    }

    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn stops(&self) -> &[Stop] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// True when arrivals never decrease along the itinerary.
    ///
    /// Evaluation trusts itinerary order, so callers check this at the
    /// boundary rather than relying on the evaluator to sort.
    pub fn is_chronological(&self) -> bool {
        self.destinations
            .windows(2)
            .all(|pair| pair[0].arrival <= pair[1].arrival)
    }
}

/// Accepts any JSON value; only numbers are kept.
fn json_number<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => Ok(Some(number)),
        _ => Ok(None),
    }
}

fn lenient_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(json_number(deserializer)?
        .and_then(|number| {
            number.as_i64().or_else(|| {
                number
                    .as_f64()
                    .filter(|float| float.is_finite())
                    .map(|float| float.trunc() as i64)
            })
        })
        .unwrap_or_default())
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(json_number(deserializer)?
        .and_then(|number| {
            number.as_u64().or_else(|| {
                number
                    .as_f64()
                    .filter(|float| float.is_finite() && *float > 0.0)
                    .map(|float| float.trunc() as u64)
            })
        })
        .unwrap_or_default())
}
