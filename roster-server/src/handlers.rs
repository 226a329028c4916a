use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use roster_core::{ActivityView, Confirmation};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::errors::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// GET /activities: every activity keyed by name.
pub async fn list_activities(
    State(state): State<AppState>,
) -> Json<HashMap<String, ActivityView>> {
    Json(state.roster().activities())
}

/// POST /activities/{name}/signup?email=...
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<Confirmation>> {
    let confirmation = state.roster().signup(&name, &query.email)?;
    Ok(Json(confirmation))
}

/// DELETE /activities/{name}/unregister?email=...
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<Confirmation>> {
    let confirmation = state.roster().unregister(&name, &query.email)?;
    Ok(Json(confirmation))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "activities": state.roster().activity_count(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
