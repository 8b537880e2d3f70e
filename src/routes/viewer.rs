//! Embedded single-page Leaflet viewer.
//!
//! The page carries no data of its own: it fetches the assembled map
//! document from the API and hands every style and popup payload straight
//! to the mapping library.

use axum::{response::Html, routing::get, Router};

use crate::app::AppState;

pub fn viewer_router() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Earthquake Map</title>

    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>

    <style>
        html, body, #map { height: 100%; margin: 0; }

        .info.legend {
            background: #fff;
            padding: 8px 10px;
            border-radius: 4px;
            box-shadow: 0 1px 4px rgba(0, 0, 0, 0.3);
            line-height: 1.6;
        }

        .info.legend h3 { margin: 0 0 4px; font-size: 14px; }

        .fetch-error {
            display: flex;
            align-items: center;
            justify-content: center;
            height: 100%;
            font-family: sans-serif;
            color: #b91c1c;
        }
    </style>
</head>
<body>
    <div id="map"></div>

    <script>
        fetch('/api/v1/map')
            .then(function (response) {
                if (!response.ok) throw new Error('HTTP ' + response.status);
                return response.json();
            })
            .then(initMap)
            .catch(function (err) {
                document.getElementById('map').outerHTML =
                    '<div class="fetch-error">Failed to load map data: ' + err.message + '</div>';
            });

        function initMap(doc) {
            var baseLayers = {};
            doc.baseLayers.forEach(function (layer) {
                baseLayers[layer.name] = L.tileLayer(layer.urlTemplate, {
                    attribution: layer.attribution
                });
            });

            var markers = doc.features.map(function (feature) {
                return L.circleMarker([feature.lat, feature.lng], feature.style)
                    .bindPopup(feature.popupHtml);
            });
            var overlay = L.layerGroup(markers);

            var map = L.map('map', {
                center: doc.center,
                zoom: doc.zoom,
                layers: [baseLayers[doc.activeBaseLayer], overlay]
            });

            var overlays = {};
            overlays[doc.overlayName] = overlay;
            L.control.layers(baseLayers, overlays, {
                collapsed: doc.layerControl.collapsed
            }).addTo(map);

            var legend = L.control({ position: doc.legend.position });
            legend.onAdd = function () {
                var div = L.DomUtil.create('div', 'info legend');
                div.innerHTML = doc.legend.html;
                return div;
            };
            legend.addTo(map);
        }
    </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_index_serves_viewer_page() {
        let server = TestServer::new(create_test_app()).unwrap();

        let response = server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body = response.text();
        assert!(body.contains("leaflet"));
        assert!(body.contains("/api/v1/map"));
    }
}
