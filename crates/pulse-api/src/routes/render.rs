//! Server-side rendering of a single component from JSON props.

use axum::{response::Html, routing::post, Json, Router};
use leptos::prelude::*;
use pulse_types::{MetricCardConfig, RadarChartConfig};
use pulse_ui::components::metric_card::MetricCardFromConfig;
use pulse_ui::components::radar_chart::RadarChartFromConfig;

use crate::state::AppState;

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/render/metric-card", post(render_metric_card))
        .route("/api/v1/render/radar-chart", post(render_radar_chart))
}

async fn render_metric_card(Json(config): Json<MetricCardConfig>) -> Html<String> {
    tracing::debug!(title = %config.title, "rendering metric card");
    Html(view! { <MetricCardFromConfig config=config /> }.to_html())
}

async fn render_radar_chart(Json(config): Json<RadarChartConfig>) -> Html<String> {
    tracing::debug!(points = config.data.len(), "rendering radar chart");
    Html(view! { <RadarChartFromConfig config=config /> }.to_html())
}
