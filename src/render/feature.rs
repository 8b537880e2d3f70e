use chrono::DateTime;

use super::depth::depth_color;
use crate::constants::{
    MARKER_FILL_OPACITY, MARKER_OPACITY, MARKER_RADIUS_SCALE, MARKER_STROKE_COLOR, MARKER_WEIGHT,
};
use crate::models::{EarthquakeEvent, MarkerStyle, RenderableFeature};

/// Minimal HTML escaping for untrusted text embedded in popup markup.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn format_time(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "unknown time".to_string())
}

/// Circle-marker style for one event. Radius scales with magnitude and is
/// deliberately not clamped; a zero or negative magnitude draws nothing.
pub fn marker_style(magnitude: f64, depth: f64) -> MarkerStyle {
    MarkerStyle {
        radius: magnitude * MARKER_RADIUS_SCALE,
        fill_color: depth_color(depth).to_string(),
        color: MARKER_STROKE_COLOR.to_string(),
        weight: MARKER_WEIGHT,
        opacity: MARKER_OPACITY,
        fill_opacity: MARKER_FILL_OPACITY,
    }
}

/// One event in, one renderable marker out. Missing fields degrade to
/// placeholder text or NaN values; a single bad record never aborts the
/// collection.
pub fn format_feature(event: &EarthquakeEvent) -> RenderableFeature {
    let place = event.properties.place.as_deref().unwrap_or("Unknown location");
    let depth = event.depth_km();
    let magnitude = event.properties.mag.unwrap_or(f64::NAN);

    let popup_html = format!(
        "<h3>{}</h3><h5>{}</h5><hr>Depth: {}, <br>Magnitude: {}",
        escape_html(place),
        format_time(event.properties.time),
        depth,
        magnitude
    );

    RenderableFeature {
        lat: event.latitude(),
        lng: event.longitude(),
        popup_html,
        style: marker_style(magnitude, depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_event;

    #[test]
    fn test_radius_scales_with_magnitude() {
        assert_eq!(marker_style(4.5, 25.0).radius, 18.0);
        assert_eq!(marker_style(0.0, 25.0).radius, 0.0);
        assert_eq!(marker_style(-1.0, 25.0).radius, -4.0);
        assert_eq!(marker_style(9.0, 25.0).radius, 36.0);
    }

    #[test]
    fn test_style_constants() {
        let style = marker_style(2.0, 5.0);
        assert_eq!(style.fill_color, "green");
        assert_eq!(style.color, "fff");
        assert_eq!(style.weight, 0.5);
        assert_eq!(style.opacity, 0.5);
        assert_eq!(style.fill_opacity, 0.8);
    }

    #[test]
    fn test_format_known_event() {
        let event = sample_event("10km N of X", 1700000000000, 4.5, -120.0, 37.0, 25.0);
        let rendered = format_feature(&event);

        assert_eq!(rendered.style.radius, 18.0);
        assert_eq!(rendered.style.fill_color, "gold");
        assert_eq!(rendered.lat, 37.0);
        assert_eq!(rendered.lng, -120.0);
        assert!(rendered.popup_html.contains("10km N of X"));
        assert!(rendered.popup_html.contains("25"));
        assert!(rendered.popup_html.contains("4.5"));
        // 1700000000000 ms is 2023-11-14T22:13:20Z.
        assert!(rendered.popup_html.contains("2023-11-14"));
    }

    #[test]
    fn test_place_text_is_escaped() {
        let event = sample_event(
            "<script>alert('x')</script>",
            1700000000000,
            1.0,
            0.0,
            0.0,
            5.0,
        );
        let rendered = format_feature(&event);

        assert!(!rendered.popup_html.contains("<script>"));
        assert!(rendered.popup_html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_missing_fields_degrade_per_feature() {
        let event = crate::models::EarthquakeEvent::default();
        let rendered = format_feature(&event);

        assert!(rendered.style.radius.is_nan());
        assert!(rendered.lat.is_nan());
        assert_eq!(rendered.style.fill_color, "red");
        assert!(rendered.popup_html.contains("Unknown location"));
        assert!(rendered.popup_html.contains("unknown time"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"q\" 'n'"), "&quot;q&quot; &#39;n&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
