#![allow(non_snake_case)]

pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes(state.clone()))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use http::{header, Request, StatusCode};
    use pulse_types::{MetricCardConfig, RadarChartConfig, Showcase};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = api_router(AppState::default())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = send(get("/api/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn showcase_routes_serve_sample_data() {
        let (status, body) = send(get("/api/v1/showcase")).await;
        assert_eq!(status, StatusCode::OK);
        let showcase: Showcase = serde_json::from_str(&body).unwrap();
        assert_eq!(showcase, Showcase::default());

        let (_, body) = send(get("/api/v1/showcase/metrics")).await;
        let metrics: Vec<MetricCardConfig> = serde_json::from_str(&body).unwrap();
        assert_eq!(metrics.len(), Showcase::default().metrics.len());

        let (_, body) = send(get("/api/v1/showcase/radar")).await;
        let radar: RadarChartConfig = serde_json::from_str(&body).unwrap();
        assert_eq!(radar.data.len(), 8);
    }

    #[tokio::test]
    async fn renders_metric_card_fragment() {
        let (status, html) = send(post_json(
            "/api/v1/render/metric-card",
            r#"{"title": "Churn", "value": 3, "trend": {"value": -12.5, "direction": "down"}}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Churn"));
        assert!(html.contains("12.5%"));
        assert!(html.contains("trend-destructive"));
    }

    #[tokio::test]
    async fn renders_radar_chart_fragment() {
        let (status, html) = send(post_json(
            "/api/v1/render/radar-chart",
            r#"{"data": [
                {"category": "A", "value": 10, "fullMark": 100},
                {"category": "B", "value": 20, "fullMark": 100},
                {"category": "C", "value": 30, "fullMark": 100}
            ], "height": 320}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("radar-angle-tick").count(), 3);
        assert!(html.contains("height: 320px"));
        assert!(!html.contains("chart-title"));
    }

    #[tokio::test]
    async fn rejects_unknown_trend_direction() {
        let (status, _) = send(post_json(
            "/api/v1/render/metric-card",
            r#"{"title": "X", "value": 1, "trend": {"value": 1, "direction": "sideways"}}"#,
        ))
        .await;
        assert!(status.is_client_error());
    }
}
