mod error;
mod params;
mod routes;
mod state;
mod surface;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use draft_analysis::{AsyncDraftSession, DraftSession, Settings};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(true))
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(settings = ?settings, "configuration loaded");

    let session = AsyncDraftSession::new(DraftSession::builder().settings(&settings).build());

    // Nothing is served until the set is in memory.
    let table = session.table().await?;
    tracing::info!(set = %settings.set_code, cards = table.len(), "card table ready");

    let addr = settings.bind_addr.clone();
    let state = Arc::new(AppState { session, settings });

    let app = Router::new()
        .route("/", get(routes::dashboard::page))
        .route("/api/cards", get(routes::api::cards))
        .route("/api/summary", get(routes::api::summary))
        .route("/api/refresh", post(routes::api::refresh))
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
