use super::depth::DEPTH_LEGEND;
use super::feature::format_feature;
use crate::constants::{
    LEGEND_POSITION, LEGEND_TITLE, MAP_CENTER, MAP_ZOOM, OVERLAY_NAME, STREET_ATTRIBUTION,
    STREET_LAYER_NAME, STREET_TILE_URL, TOPO_ATTRIBUTION, TOPO_LAYER_NAME, TOPO_TILE_URL,
};
use crate::models::{
    EarthquakeEvent, LayerControl, LegendControl, LegendEntry, MapDocument, RenderableFeature,
    TileLayer,
};

/// Styles every fetched event, preserving input order. No sorting, no
/// deduplication, no filtering of degenerate records.
pub fn transform(events: &[EarthquakeEvent]) -> Vec<RenderableFeature> {
    events.iter().map(format_feature).collect()
}

pub fn legend_entries() -> Vec<LegendEntry> {
    DEPTH_LEGEND
        .iter()
        .map(|(label, color)| LegendEntry {
            label: label.to_string(),
            color: color.to_string(),
        })
        .collect()
}

/// The legend markup fragment: a centered title plus one swatch/label row
/// per depth bucket, in bucket order.
pub fn legend_html() -> String {
    let mut html = format!("<h3 style='text-align: center'>{}</h3>", LEGEND_TITLE);
    for (label, color) in DEPTH_LEGEND {
        html.push_str(&format!(
            "<div style=\"background-color:{}; width: 20px; height: 20px; display: inline-block;\"></div> {}<br>",
            color, label
        ));
    }
    html
}

fn base_layers() -> Vec<TileLayer> {
    vec![
        TileLayer {
            name: STREET_LAYER_NAME.to_string(),
            url_template: STREET_TILE_URL.to_string(),
            attribution: STREET_ATTRIBUTION.to_string(),
        },
        TileLayer {
            name: TOPO_LAYER_NAME.to_string(),
            url_template: TOPO_TILE_URL.to_string(),
            attribution: TOPO_ATTRIBUTION.to_string(),
        },
    ]
}

/// Composes the full map configuration: fixed view, both base layers with
/// the first one active, the earthquake overlay, a non-collapsed layer
/// switcher, and the static depth legend.
pub fn assemble_map(features: Vec<RenderableFeature>) -> MapDocument {
    let base_layers = base_layers();
    let active_base_layer = base_layers[0].name.clone();

    MapDocument {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        base_layers,
        active_base_layer,
        overlay_name: OVERLAY_NAME.to_string(),
        features,
        layer_control: LayerControl { collapsed: false },
        legend: LegendControl {
            position: LEGEND_POSITION.to_string(),
            title: LEGEND_TITLE.to_string(),
            entries: legend_entries(),
            html: legend_html(),
        },
    }
}
