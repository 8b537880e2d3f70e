use serde::Deserialize;

/// Top-level GeoJSON document returned by the USGS summary feed.
///
/// Only the pieces the renderer consumes are deserialized; metadata and any
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedDocument {
    #[serde(default)]
    pub features: Vec<EarthquakeEvent>,
}

/// One event record as received. Every field is optional so a malformed
/// feature degrades on its own instead of failing the whole collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EarthquakeEvent {
    #[serde(default)]
    pub properties: EventProperties,
    #[serde(default)]
    pub geometry: EventGeometry,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventProperties {
    #[serde(default)]
    pub place: Option<String>,
    /// Milliseconds since epoch.
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub mag: Option<f64>,
}

/// GeoJSON point geometry: (longitude, latitude, depth-in-km).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventGeometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl EarthquakeEvent {
    pub fn longitude(&self) -> f64 {
        self.geometry.coordinates.first().copied().unwrap_or(f64::NAN)
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.coordinates.get(1).copied().unwrap_or(f64::NAN)
    }

    pub fn depth_km(&self) -> f64 {
        self.geometry.coordinates.get(2).copied().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_document() {
        let json = r#"{
            "type": "FeatureCollection",
            "metadata": {"generated": 1700000000000, "title": "USGS Earthquakes"},
            "features": [
                {
                    "type": "Feature",
                    "properties": {"place": "10km N of X", "time": 1700000000000, "mag": 4.5},
                    "geometry": {"type": "Point", "coordinates": [-120.0, 37.0, 25.0]}
                }
            ]
        }"#;

        let doc: FeedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.features.len(), 1);

        let event = &doc.features[0];
        assert_eq!(event.properties.place.as_deref(), Some("10km N of X"));
        assert_eq!(event.properties.time, Some(1700000000000));
        assert_eq!(event.properties.mag, Some(4.5));
        assert_eq!(event.longitude(), -120.0);
        assert_eq!(event.latitude(), 37.0);
        assert_eq!(event.depth_km(), 25.0);
    }

    #[test]
    fn test_missing_fields_still_deserialize() {
        let json = r#"{
            "features": [
                {"properties": {}, "geometry": {"coordinates": []}},
                {"properties": {"mag": 2.0}}
            ]
        }"#;

        let doc: FeedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.features.len(), 2);

        let first = &doc.features[0];
        assert!(first.properties.place.is_none());
        assert!(first.depth_km().is_nan());
        assert!(first.latitude().is_nan());

        let second = &doc.features[1];
        assert_eq!(second.properties.mag, Some(2.0));
        assert!(second.longitude().is_nan());
    }

    #[test]
    fn test_empty_document() {
        let doc: FeedDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.features.is_empty());
    }
}
