use nba_stats_crud::shutdown::shutdown_signal;
use nba_stats_crud::{router, Config, Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    let config = Config::from_env()?;

    let store = Store::connect(&config.database).await?;
    store.migrate().await?;

    tracing::info!("Database connection established.");

    let addr = config.addr();
    let app = router(store.clone(), &config.api_prefix);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal()?)
        .await?;

    store.close().await;
    tracing::info!("Server stopped.");

    Ok(())
}
