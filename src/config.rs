//! Tracker configuration.
//!
//! Everything the page used to hard-code (manifest URL, map view, marker
//! and line styling) is carried here and passed to [`crate::tracker::Tracker`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::evaluator::EvaluateOptions;
use crate::polyline::RouteLineStyle;

pub const DEFAULT_MANIFEST_URL: &str = "https://firebasestorage.googleapis.com/v0/b/santa-tracker-firebase.appspot.com/o/route%2Fsanta_en.json?alt=media&2018b";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    pub manifest_url: String,
    pub map: MapView,
    pub agent_marker: AgentMarkerStyle,
    pub stop_marker: StopMarkerStyle,
    pub route_line: RouteLineStyle,
    pub evaluate: EvaluateOptions,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            map: MapView::default(),
            agent_marker: AgentMarkerStyle::default(),
            stop_marker: StopMarkerStyle::default(),
            route_line: RouteLineStyle::default(),
            evaluate: EvaluateOptions::default(),
        }
    }
}

impl TrackerConfig {
    /// Loads a JSON config file; absent keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let body = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Initial map viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapView {
    /// (lat, lng)
    pub center: (f64, f64),
    pub zoom: u8,
    pub base_map: String,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: (38.9072, -77.0369),
            zoom: 1,
            base_map: "OpenStreetMap".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentMarkerStyle {
    pub glyph: String,
    pub icon_size: u32,
    /// Popup opened on the agent marker while idle.
    pub idle_message: String,
}

impl Default for AgentMarkerStyle {
    fn default() -> Self {
        Self {
            glyph: "🎅".to_string(),
            icon_size: 50,
            idle_message: "Santa's still at the North Pole!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StopMarkerStyle {
    pub glyph: String,
    pub icon_size: u32,
    pub rise_on_hover: bool,
}

impl Default for StopMarkerStyle {
    fn default() -> Self {
        Self {
            glyph: "🎁".to_string(),
            icon_size: 30,
            rise_on_hover: true,
        }
    }
}

/// HTTP transport settings for [`crate::fetch::HttpManifestFetcher`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}
