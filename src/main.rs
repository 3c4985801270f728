use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use uniconnect::router::init_router;
use uniconnect::state::init_app_state;
use uniconnect_config::ServerConfig;
use uniconnect_observability::{init_metrics, init_tracing, metrics_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;

    let state = init_app_state();
    let server_config = ServerConfig::from_env();

    info!(
        timezone = %state.calendar_config.timezone,
        max_year_span = state.calendar_config.max_year_span,
        "Calendar configuration loaded"
    );

    let mut app = init_router(state);
    if let Some(handle) = init_metrics() {
        app = app.merge(metrics_router(handle));
    }

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("🚀 Server running on http://{address}");
    info!("📚 Swagger UI available at http://{address}/swagger-ui");
    info!("📖 Scalar UI available at http://{address}/scalar");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
