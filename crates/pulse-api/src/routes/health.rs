use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new().route("/api/v1/health", get(get_health))
}

async fn get_health() -> Json<Health> {
    Json(Health { status: "ok" })
}
