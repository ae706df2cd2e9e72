use anyhow::Context;
use tokio::net::TcpListener;

use brannsvar_backend::core::config::AppConfig;
use brannsvar_backend::core::logging;
use brannsvar_backend::server::router;
use brannsvar_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(&config);

    let state = AppState::initialize(config).await?;

    let bind_addr = format!("127.0.0.1:{}", state.config.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    let addr = listener.local_addr()?;
    tracing::info!("Listening on {}", addr);

    let app = router::router(state);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
