use tracing_subscriber::{EnvFilter, fmt};

use product_catalog::shell::config::AppConfig;
use product_catalog::shell::http::router;
use product_catalog::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    // In-memory store for now
    let app = router(AppState::in_memory());

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("REST endpoint: http://{}/products", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
