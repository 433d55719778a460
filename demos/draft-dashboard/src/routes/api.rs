use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::params::DashboardParams;
use crate::state::AppState;

async fn params(state: &AppState, query: Option<String>) -> Result<DashboardParams, AppError> {
    let table = state.session.table().await?;
    DashboardParams::parse(query.as_deref(), &table, state.settings.keyword_top_n)
}

/// GET /api/cards?rarity=common&color=Blue&mv_min=1&mv_max=3
///
/// Rows passing the filters, in table order.
pub async fn cards(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, AppError> {
    let params = params(&state, query).await?;
    let rows = state.session.rows(params.criteria).await?;

    let count = rows.len();
    Ok(Json(json!({ "data": rows, "count": count })))
}

/// GET /api/summary?rarity=rare&top_n=20
///
/// Every chart series for the filtered view.
pub async fn summary(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, AppError> {
    let params = params(&state, query).await?;
    let dashboard = state
        .session
        .dashboard(params.criteria, params.top_n)
        .await?;
    Ok(Json(json!({ "data": dashboard })))
}

/// POST /api/refresh
///
/// Drop the cached card table and fetch the set again.
pub async fn refresh(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let table = state.session.refresh().await?;
    tracing::info!(cards = table.len(), "card table refreshed");
    Ok(Json(json!({
        "set": state.settings.set_code,
        "count": table.len(),
    })))
}
