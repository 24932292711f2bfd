use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/v1/instance", get(handlers::get_instance_v1))
        .route("/v2/instance", get(handlers::get_instance_v2))
        .route("/v1/instance/peers", get(handlers::get_peers))
        .route("/v1/instance/activity", get(handlers::get_activity))
        .route("/v1/instance/languages", get(handlers::get_languages))
        .with_state(state)
}
