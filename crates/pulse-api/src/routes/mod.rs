pub mod health;
pub mod render;
pub mod showcase;

use axum::Router;

use crate::state::AppState;

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes(state.clone()))
        .merge(showcase::routes(state.clone()))
        .merge(render::routes(state))
}
