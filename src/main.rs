use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use register_e2e::shell::config;
use register_e2e::shell::http;
use register_e2e::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let state = AppState::in_memory();
    let app = http::router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config::http_addr().parse()?;
    tracing::info!("registration page: http://{}/account/register", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
