use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lookbook::adapters::http::{build_app_router, AppState};
use lookbook::adapters::memory::{InMemoryMoodboardStore, InMemoryOutfitStore, Latency};
use lookbook::adapters::weather::weather_provider;
use lookbook::application::ResolveWeatherHandler;
use lookbook::config::AppConfig;
use lookbook::ports::{MoodboardRepository, OutfitRepository};

#[tokio::main]
async fn main() {
    // --- Configuration ---
    let config = AppConfig::load().expect("Failed to load configuration");

    // --- Tracing ---
    let production = config.is_production();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(production.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!production).then(tracing_subscriber::fmt::layer))
        .init();

    config.validate().expect("Invalid configuration");
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        environment = ?config.server.environment,
        "Loaded configuration"
    );

    // --- Stores ---
    let latency = Latency::from_flag(config.store.simulate_latency);
    let outfits: Arc<dyn OutfitRepository> = if config.store.seed {
        Arc::new(InMemoryOutfitStore::seeded(latency).expect("Invalid seed outfits"))
    } else {
        Arc::new(InMemoryOutfitStore::new(latency))
    };
    let moodboards: Arc<dyn MoodboardRepository> = if config.store.seed {
        Arc::new(InMemoryMoodboardStore::seeded(latency).expect("Invalid seed moodboards"))
    } else {
        Arc::new(InMemoryMoodboardStore::new(latency))
    };
    tracing::info!(
        seeded = config.store.seed,
        simulate_latency = config.store.simulate_latency,
        "In-memory stores ready"
    );

    // --- Weather ---
    let provider = weather_provider(&config.weather);
    let weather = Arc::new(ResolveWeatherHandler::new(
        provider,
        config.weather.timeout(),
        config.weather.fallback_reading(),
    ));

    // --- Router ---
    let state = AppState::new(outfits, moodboards, weather);
    let app = build_app_router(state, &config.server);

    // --- Serve ---
    let addr = config.server.socket_addr().expect("Invalid bind address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    tracing::info!(%addr, "Lookbook listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server shut down");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
