//! Route evaluation: where the agent is now and what the map should show.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::manifest::{Coordinate, Manifest, Stop};
use crate::polyline::Polyline;
use crate::popup::{DigitGrouping, Popup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateOptions {
    /// Digit grouping for delivery counts in popups.
    pub grouping: DigitGrouping,
}

/// A completed stop ready to be drawn as a marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopMarker {
    pub coordinate: Coordinate,
    pub popup: Popup,
}

/// Renderer-agnostic result of evaluating a manifest at an instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePresentation {
    /// Last completed stop, or [`Coordinate::ORIGIN`] while idle.
    pub current_position: Coordinate,
    pub has_current_agent: bool,
    /// Stops reached by `now` with at least one delivery, itinerary order.
    pub completed_stops: Vec<Stop>,
    pub stop_markers: Vec<StopMarker>,
    /// Every stop in the manifest regardless of time.
    pub full_route: Polyline,
    /// Stops reached by `now`, delivered or not.
    pub visited_count: usize,
}

impl RoutePresentation {
    pub fn is_idle(&self) -> bool {
        !self.has_current_agent
    }
}

/// Evaluates with [`EvaluateOptions::default`].
pub fn evaluate_default(manifest: Option<&Manifest>, now: Timestamp) -> RoutePresentation {
    evaluate(manifest, now, &EvaluateOptions::default())
}

/// Partitions the itinerary at `now` and builds the presentation.
///
/// Stops are taken in itinerary order and never re-sorted: the current
/// position is the last-listed completed stop, not the latest arrival.
pub fn evaluate(
    manifest: Option<&Manifest>,
    now: Timestamp,
    options: &EvaluateOptions,
) -> RoutePresentation {
    let stops = manifest.map(Manifest::stops).unwrap_or_default();
    let now_ns = now.as_nanosecond();

    let visited: Vec<&Stop> = stops
        .iter()
        .filter(|stop| arrival_nanos(stop) <= now_ns)
        .collect();
    let completed_stops: Vec<Stop> = visited
        .iter()
        .filter(|stop| stop.presents_delivered > 0)
        .map(|stop| (*stop).clone())
        .collect();

    let (current_position, has_current_agent) = match completed_stops.last() {
        Some(last) => (last.location, true),
        None => (Coordinate::ORIGIN, false),
    };

    let stop_markers = completed_stops
        .iter()
        .map(|stop| StopMarker {
            coordinate: stop.location,
            popup: Popup::for_stop(stop, options.grouping),
        })
        .collect();

    RoutePresentation {
        current_position,
        has_current_agent,
        completed_stops,
        stop_markers,
        full_route: Polyline::from_stops(stops),
        visited_count: visited.len(),
    }
}

/// Arrival at nanosecond precision, so sub-millisecond instants compare
/// exactly on either side of the epoch.
fn arrival_nanos(stop: &Stop) -> i128 {
    i128::from(stop.arrival) * 1_000_000
}
