//! Response types for Overpass, OSRM and Nominatim.
//!
//! Only the fields the hospital finder consumes are modelled; everything else
//! in the upstream payloads is ignored.

use std::collections::HashMap;

use serde::Deserialize;

/// Overpass `[out:json]` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct OverpassResponse {
    pub elements: Vec<OverpassElement>,
}

/// A single OSM node returned by Overpass.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl OverpassElement {
    /// The `name` tag, if present and non-blank.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.tags
            .get("name")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

/// OSRM `route` service envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRouteResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// One driving route.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    /// Metres.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    /// GeoJSON `LineString` when requested with `geometries=geojson`.
    #[serde(default)]
    pub geometry: serde_json::Value,
}

/// Nominatim `reverse` response; `error` is set when nothing was found.
#[derive(Debug, Deserialize)]
pub(crate) struct ReverseResponse {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overpass_element_without_tags_deserializes() {
        let el: OverpassElement =
            serde_json::from_str(r#"{"type":"node","id":1,"lat":13.0,"lon":80.0}"#).unwrap();
        assert!(el.tags.is_empty());
        assert!(el.name().is_none());
    }

    #[test]
    fn overpass_element_blank_name_is_none() {
        let el: OverpassElement = serde_json::from_str(
            r#"{"id":1,"lat":13.0,"lon":80.0,"tags":{"name":"  ","amenity":"hospital"}}"#,
        )
        .unwrap();
        assert!(el.name().is_none());
    }

    #[test]
    fn overpass_envelope_requires_elements() {
        let result = serde_json::from_str::<OverpassResponse>(
            r#"{"remark":"runtime error: Query timed out"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn route_keeps_geometry_verbatim() {
        let route: Route = serde_json::from_str(
            r#"{"distance":1234.5,"duration":321.0,
                "geometry":{"type":"LineString","coordinates":[[80.2,13.0],[80.3,13.1]]}}"#,
        )
        .unwrap();
        assert_eq!(route.geometry["type"], "LineString");
        assert_eq!(route.geometry["coordinates"].as_array().map(Vec::len), Some(2));
    }
}
