use serde::{Deserialize, Serialize};

/// Leaflet circle-marker options, serialized with the field names the
/// mapping library expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: String,
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

/// One event after styling and popup formatting, ready to draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderableFeature {
    pub lat: f64,
    pub lng: f64,
    pub popup_html: String,
    pub style: MarkerStyle,
}

/// A selectable background tile source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub name: String,
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerControl {
    pub collapsed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendControl {
    pub position: String,
    pub title: String,
    pub entries: Vec<LegendEntry>,
    /// Pre-rendered swatch/label rows the viewer injects verbatim.
    pub html: String,
}

/// The whole map configuration: view, base layers, overlay, controls.
/// Assembled once per process after the feed resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDocument {
    pub center: [f64; 2],
    pub zoom: u8,
    pub base_layers: Vec<TileLayer>,
    pub active_base_layer: String,
    pub overlay_name: String,
    pub features: Vec<RenderableFeature>,
    pub layer_control: LayerControl,
    pub legend: LegendControl,
}
