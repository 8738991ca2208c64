use axum::{extract::State, routing::get, Json, Router};
use pulse_types::{MetricCardConfig, RadarChartConfig, Showcase};

use crate::state::AppState;

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/showcase", get(get_showcase))
        .route("/api/v1/showcase/metrics", get(get_metrics))
        .route("/api/v1/showcase/radar", get(get_radar))
}

async fn get_showcase(State(state): State<AppState>) -> Json<Showcase> {
    Json(state.showcase.as_ref().clone())
}

async fn get_metrics(State(state): State<AppState>) -> Json<Vec<MetricCardConfig>> {
    Json(state.showcase.metrics.clone())
}

async fn get_radar(State(state): State<AppState>) -> Json<RadarChartConfig> {
    Json(state.showcase.radar.clone())
}
