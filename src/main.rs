use quakemap_api::app::create_app;
use quakemap_api::config::{load_config, save_default_config};
use quakemap_api::constants::CONFIG_PATH;
use quakemap_api::feed::{FeedSource, UsgsFeedSource};
use quakemap_api::logging::{init_logging, install_panic_hook, log_error};
use quakemap_api::render::{assemble_map, transform};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    if std::env::args().any(|arg| arg == "--init-config") {
        match save_default_config(&CONFIG_PATH) {
            Ok(_) => {
                println!("Default configuration saved to {:?}", *CONFIG_PATH);
                std::process::exit(0);
            }
            Err(e) => {
                eprintln!("Failed to save default configuration: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Initialize logging
    init_logging();
    install_panic_hook();

    // Load configuration
    let config = Arc::new(load_config(&CONFIG_PATH));

    // One fetch per process; the rendered map lives for the lifetime of the
    // server. A failed fetch is a startup error, not a blank map.
    let source = UsgsFeedSource::new(config.feed.clone());
    info!("Fetching earthquake feed from {}", config.feed.url);
    let document = match source.fetch_collection().await {
        Ok(d) => d,
        Err(e) => {
            log_error("Feed fetch failed", &e);
            std::process::exit(1);
        }
    };

    let features = transform(&document.features);
    info!("Styled {} earthquake markers", features.len());
    let map = Arc::new(assemble_map(features));

    // Create the application
    let app = create_app(Arc::clone(&config), map);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Starting Quakemap API on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server failed");
}
