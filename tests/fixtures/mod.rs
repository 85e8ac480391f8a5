//! Test fixtures for route-tracker.
//!
//! Provides a short Christmas Eve itinerary with real city coordinates and
//! the matching JSON manifest on disk.

pub mod christmas_eve;

pub use christmas_eve::*;
