#![cfg(test)]

use async_trait::async_trait;
use axum::Router;
use std::sync::Arc;

use crate::app::create_app;
use crate::config::Config;
use crate::error::AppResult;
use crate::feed::FeedSource;
use crate::models::{EarthquakeEvent, EventGeometry, EventProperties, FeedDocument};
use crate::render::{assemble_map, transform};

/// Test fixture: one fully-populated event record.
pub fn sample_event(
    place: &str,
    time: i64,
    mag: f64,
    lon: f64,
    lat: f64,
    depth: f64,
) -> EarthquakeEvent {
    EarthquakeEvent {
        properties: EventProperties {
            place: Some(place.to_string()),
            time: Some(time),
            mag: Some(mag),
        },
        geometry: EventGeometry {
            coordinates: vec![lon, lat, depth],
        },
    }
}

/// Test fixture: a small collection spanning shallow, intermediate, and deep
/// buckets.
pub fn sample_feed() -> FeedDocument {
    FeedDocument {
        features: vec![
            sample_event("10km N of X", 1700000000000, 4.5, -120.0, 37.0, 25.0),
            sample_event("offshore Y", 1700000100000, 2.1, -118.5, 33.9, 8.2),
            sample_event("Z region", 1700000200000, 6.3, 142.0, 38.3, 95.0),
        ],
    }
}

/// A feed source returning a canned document instead of hitting the network.
pub struct FixtureFeedSource {
    document: FeedDocument,
}

impl FixtureFeedSource {
    pub fn new(document: FeedDocument) -> Self {
        Self { document }
    }
}

#[async_trait]
impl FeedSource for FixtureFeedSource {
    async fn fetch_collection(&self) -> AppResult<FeedDocument> {
        Ok(self.document.clone())
    }
}

/// Create a test app with the fixture feed already rendered and assembled.
pub fn create_test_app() -> Router {
    let config = Arc::new(Config::default());
    let features = transform(&sample_feed().features);
    let map = Arc::new(assemble_map(features));
    create_app(config, map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_feed_spans_buckets() {
        let feed = sample_feed();
        assert_eq!(feed.features.len(), 3);
        assert!(feed.features[0].depth_km() < 30.0);
        assert!(feed.features[2].depth_km() >= 90.0);
    }

    #[test]
    fn test_create_test_app() {
        let _app = create_test_app();
    }
}
