use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wraith::config::Config;
use wraith::services::SignalExtractor;
use wraith::sources::Mql5Client;
use wraith::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wraith=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());
    info!("Starting Wraith server on {}:{}", config.host, config.port);
    info!(
        "Signal fetch timeout {}s, max {} redirects",
        config.fetch.timeout_secs, config.fetch.max_redirects
    );

    // Create the page client and extractor
    let client = Mql5Client::new(&config.fetch)?;
    let extractor = SignalExtractor::new(Arc::new(client));

    let state = AppState {
        config: config.clone(),
        extractor,
    };

    let app = wraith::app(state);

    // Start the server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Wraith server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
