//! route-tracker core
//!
//! Works out where a tracked agent is along a timed itinerary and what a map
//! should draw for it.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod fetch;
pub mod geojson;
pub mod manifest;
pub mod polyline;
pub mod popup;
pub mod tracker;
pub mod traits;
