// HTTP server module

pub mod response;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::refresh::Refresher;

pub const SERVICE_NAME: &str = "Lecryptique info";

#[derive(Clone)]
pub struct AppState {
    pub refresher: Arc<Refresher>,
}

impl AppState {
    pub fn new(refresher: Arc<Refresher>) -> Self {
        Self { refresher }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/news/{topic}", get(routes::news))
        .route("/config/type/{topic}", post(routes::refresh_topic))
        .route(
            "/config/country/{topic}/{country}",
            post(routes::change_country),
        )
        .route("/scheduled", post(routes::scheduled))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
