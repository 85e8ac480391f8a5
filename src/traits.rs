//! Seams between the evaluator and the outside world.
//!
//! Fetching and drawing are external capabilities; implement these traits
//! for the transport and rendering surface at hand.

use crate::config::{AgentMarkerStyle, StopMarkerStyle};
use crate::error::FetchError;
use crate::evaluator::StopMarker;
use crate::manifest::{Coordinate, Manifest};
use crate::polyline::{Polyline, RouteLineStyle};

/// Retrieves the itinerary manifest from `url`.
pub trait ManifestFetcher {
    fn fetch_manifest(&self, url: &str) -> Result<Manifest, FetchError>;
}

/// Issues draw calls against a map surface.
pub trait PresentationAdapter {
    /// Draws the agent. `idle` is set when no stop has been completed and
    /// `coordinate` is the origin sentinel.
    fn draw_agent_marker(&mut self, coordinate: Coordinate, idle: bool, style: &AgentMarkerStyle);

    fn draw_completed_stop_markers(&mut self, markers: &[StopMarker], style: &StopMarkerStyle);

    fn draw_route_line(&mut self, line: &Polyline, style: &RouteLineStyle);
}

impl<T: ManifestFetcher + ?Sized> ManifestFetcher for &T {
    fn fetch_manifest(&self, url: &str) -> Result<Manifest, FetchError> {
        (**self).fetch_manifest(url)
    }
}

impl<T: ManifestFetcher + ?Sized> ManifestFetcher for Box<T> {
    fn fetch_manifest(&self, url: &str) -> Result<Manifest, FetchError> {
        (**self).fetch_manifest(url)
    }
}
