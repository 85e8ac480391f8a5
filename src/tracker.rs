//! Fetch, evaluate, draw.

use jiff::Timestamp;
use tracing::{debug, warn};

use crate::config::TrackerConfig;
use crate::evaluator::{evaluate, RoutePresentation};
use crate::manifest::Coordinate;
use crate::traits::{ManifestFetcher, PresentationAdapter};

/// One-shot orchestration of a single render.
///
/// No polling, retries or caching: each [`Tracker::render`] fetches a fresh
/// manifest.
#[derive(Debug, Clone)]
pub struct Tracker<F> {
    fetcher: F,
    config: TrackerConfig,
}

impl<F: ManifestFetcher> Tracker<F> {
    pub fn new(fetcher: F, config: TrackerConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Evaluates the route at `now` and draws it on `adapter`.
    ///
    /// A failed fetch is logged and rendered as the idle state.
    pub fn render<A>(&self, adapter: &mut A, now: Timestamp) -> RoutePresentation
    where
        A: PresentationAdapter + ?Sized,
    {
        let manifest = match self.fetcher.fetch_manifest(&self.config.manifest_url) {
            Ok(manifest) => {
                debug!(stops = manifest.len(), url = %self.config.manifest_url, "fetched route manifest");
                if !manifest.is_chronological() {
                    warn!("route manifest arrivals are out of order; using itinerary order");
                }
                Some(manifest)
            }
            Err(err) => {
                warn!(url = %self.config.manifest_url, "failed to find agent: {err}");
                None
            }
        };

        let presentation = evaluate(manifest.as_ref(), now, &self.config.evaluate);
        debug!(
            visited = presentation.visited_count,
            completed = presentation.completed_stops.len(),
            idle = presentation.is_idle(),
            "evaluated route"
        );

        self.draw(adapter, &presentation);
        presentation
    }

    fn draw<A>(&self, adapter: &mut A, presentation: &RoutePresentation)
    where
        A: PresentationAdapter + ?Sized,
    {
        if presentation.is_idle() {
            adapter.draw_agent_marker(Coordinate::ORIGIN, true, &self.config.agent_marker);
            return;
        }

        adapter.draw_agent_marker(presentation.current_position, false, &self.config.agent_marker);
        adapter.draw_completed_stop_markers(&presentation.stop_markers, &self.config.stop_marker);
        adapter.draw_route_line(&presentation.full_route, &self.config.route_line);
    }
}
