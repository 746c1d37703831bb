// Jariya admin relay
// Entry point: loads configuration and serves the proxy in front of the upstream API

use jariya_admin::config::Config;
use jariya_admin::{app, proxy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment and defaults cover it.
    // Loaded first so RUST_LOG from the file reaches the filter.
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jariya_admin=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        upstream = %config.upstream_api_url,
        "Starting Jariya admin relay"
    );

    let http = reqwest::Client::builder()
        .user_agent("jariya-admin-proxy")
        .build()?;
    let router = proxy::router(proxy::ProxyState::new(config.upstream_api_url.clone(), http));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    let local_addr = listener.local_addr()?;

    let state = app::setup(&config, &format!("http://{}", local_addr))?;
    tracing::info!(
        authenticated = state.session.is_authenticated(),
        "Admin session loaded"
    );

    tracing::info!("Relay listening on http://{}", local_addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
