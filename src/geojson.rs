//! GeoJSON rendering of a route presentation.
//!
//! Positions follow GeoJSON order (`[lng, lat]`). Styling is copied into
//! feature properties so any web map can apply it.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::config::{AgentMarkerStyle, MapView, StopMarkerStyle};
use crate::evaluator::StopMarker;
use crate::manifest::Coordinate;
use crate::polyline::{Polyline, RouteLineStyle};
use crate::traits::PresentationAdapter;

/// Collects draw calls into a `FeatureCollection`.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonAdapter {
    features: Vec<Feature>,
    view: Option<MapView>,
}

impl GeoJsonAdapter {
    /// Creates an adapter with no features and no viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the initial viewport as a `view` member of the collection.
    pub fn with_view(view: MapView) -> Self {
        Self {
            features: Vec::new(),
            view: Some(view),
        }
    }

    /// Features drawn so far, in draw order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Finishes drawing and returns the collected document.
    pub fn into_feature_collection(self) -> FeatureCollection {
        let foreign_members = self.view.map(|view| {
            let mut members = JsonObject::new();
            members.insert(
                "view".to_string(),
                json!({
                    "center": [view.center.1, view.center.0],
                    "zoom": view.zoom,
                    "baseMap": view.base_map,
                }),
            );
            members
        });

        FeatureCollection {
            bbox: None,
            features: self.features,
            foreign_members,
        }
    }
}

fn position(coordinate: Coordinate) -> Vec<f64> {
    coordinate.to_lng_lat().to_vec()
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

impl PresentationAdapter for GeoJsonAdapter {
    fn draw_agent_marker(&mut self, coordinate: Coordinate, idle: bool, style: &AgentMarkerStyle) {
        let mut properties = JsonObject::new();
        properties.insert("kind".to_string(), json!("agent"));
        properties.insert("idle".to_string(), json!(idle));
        properties.insert("glyph".to_string(), json!(style.glyph));
        properties.insert("iconSize".to_string(), json!(style.icon_size));
        if idle {
            properties.insert("popup".to_string(), json!(style.idle_message));
        }
        self.features
            .push(feature(Value::Point(position(coordinate)), properties));
    }

    fn draw_completed_stop_markers(&mut self, markers: &[StopMarker], style: &StopMarkerStyle) {
        for marker in markers {
            let mut properties = JsonObject::new();
            properties.insert("kind".to_string(), json!("stop"));
            properties.insert("city".to_string(), json!(marker.popup.city));
            properties.insert("region".to_string(), json!(marker.popup.region));
            properties.insert(
                "presentsDelivered".to_string(),
                json!(marker.popup.presents_delivered),
            );
            properties.insert("popup".to_string(), json!(marker.popup.html()));
            properties.insert("glyph".to_string(), json!(style.glyph));
            properties.insert("iconSize".to_string(), json!(style.icon_size));
            properties.insert("riseOnHover".to_string(), json!(style.rise_on_hover));
            self.features
                .push(feature(Value::Point(position(marker.coordinate)), properties));
        }
    }

    fn draw_route_line(&mut self, line: &Polyline, style: &RouteLineStyle) {
        let positions = line.points().iter().copied().map(position).collect();

        let mut properties = JsonObject::new();
        properties.insert("kind".to_string(), json!("route"));
        properties.insert("weight".to_string(), json!(style.weight));
        properties.insert("color".to_string(), json!(style.color));
        properties.insert("opacity".to_string(), json!(style.opacity));
        properties.insert("fillColor".to_string(), json!(style.fill_color));
        properties.insert("fillOpacity".to_string(), json!(style.fill_opacity));
        self.features
            .push(feature(Value::LineString(positions), properties));
    }
}
