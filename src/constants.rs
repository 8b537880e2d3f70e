use once_cell::sync::Lazy;
use std::path::PathBuf;

pub static CONFIG_PATH: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var("QUAKEMAP_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.yaml"))
});

pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/1.0_week.geojson";

pub const MAP_CENTER: [f64; 2] = [37.09, -95.71];
pub const MAP_ZOOM: u8 = 3;

pub const STREET_LAYER_NAME: &str = "Street Map";
pub const STREET_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const STREET_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const TOPO_LAYER_NAME: &str = "Topographic Map";
pub const TOPO_TILE_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";
pub const TOPO_ATTRIBUTION: &str = "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)";

pub const OVERLAY_NAME: &str = "Earthquakes";

// Marker styling. Radius scales with magnitude; every other field is fixed.
pub const MARKER_RADIUS_SCALE: f64 = 4.0;
pub const MARKER_STROKE_COLOR: &str = "fff";
pub const MARKER_WEIGHT: f64 = 0.5;
pub const MARKER_OPACITY: f64 = 0.5;
pub const MARKER_FILL_OPACITY: f64 = 0.8;

pub const LEGEND_POSITION: &str = "bottomright";
pub const LEGEND_TITLE: &str = "Depth";
