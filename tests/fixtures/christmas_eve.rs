//! A Christmas Eve itinerary, 2018, arrivals in epoch milliseconds (UTC).
//!
//! Mirrors `christmas_eve.json` in this directory.

use route_tracker::manifest::{Manifest, Stop};

pub struct Place {
    pub city: &'static str,
    pub region: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub arrival: i64,
    pub presents: u64,
}

impl Place {
    pub fn stop(&self) -> Stop {
        Stop::new(self.arrival, self.presents, (self.lat, self.lng)).with_place(self.city, self.region)
    }
}

/// 2018-12-24T10:00:00Z
pub const DEPARTURE: i64 = 1_545_645_600_000;

pub const ITINERARY: &[Place] = &[
    Place { city: "North Pole", region: "Arctic", lat: 84.6, lng: 168.0, arrival: DEPARTURE, presents: 0 },
    Place { city: "Provideniya", region: "Russia", lat: 64.42, lng: -173.23, arrival: DEPARTURE + 3_600_000, presents: 23_000 },
    Place { city: "Wellington", region: "New Zealand", lat: -41.29, lng: 174.78, arrival: DEPARTURE + 7_200_000, presents: 1_250_000 },
    Place { city: "Suva", region: "Fiji", lat: -18.14, lng: 178.44, arrival: DEPARTURE + 9_000_000, presents: 0 },
    Place { city: "Sydney", region: "Australia", lat: -33.87, lng: 151.21, arrival: DEPARTURE + 10_800_000, presents: 9_000_000 },
    Place { city: "Tokyo", region: "Japan", lat: 35.68, lng: 139.69, arrival: DEPARTURE + 14_400_000, presents: 18_500_000 },
];

pub fn christmas_eve_manifest() -> Manifest {
    Manifest::new(ITINERARY.iter().map(Place::stop).collect())
}

pub fn christmas_eve_json_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/christmas_eve.json")
}
