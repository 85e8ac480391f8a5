//! Polyline representation for the itinerary route line.
//!
//! The line is kept as plain coordinates; styling lives in
//! [`RouteLineStyle`] and is applied by whichever adapter draws it.

use serde::{Deserialize, Serialize};

use crate::manifest::{Coordinate, Stop};

/// An ordered sequence of coordinates tracing the itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Builds the line through every stop location, in itinerary order.
    pub fn from_stops(stops: &[Stop]) -> Self {
        Self {
            points: stops.iter().map(|stop| stop.location).collect(),
        }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Number of points on the line.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the line has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Stroke and fill settings for the route line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteLineStyle {
    pub weight: f64,
    pub color: String,
    pub opacity: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Default for RouteLineStyle {
    fn default() -> Self {
        Self {
            weight: 2.5,
            color: "#fc4a1a".to_string(),
            opacity: 1.0,
            fill_color: "#fc4a1a".to_string(),
            fill_opacity: 0.5,
        }
    }
}
