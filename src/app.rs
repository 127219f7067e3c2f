use axum::{http::Method, middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::constants::SERVICE_NAME;
use crate::logging::request_logger;
use crate::models::ServiceDescriptor;
use crate::routes::{api_router, ENDPOINTS};
use crate::service::AlbumService;
use crate::VERSION;

#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<AlbumService>,
}

#[derive(Serialize)]
struct HealthcheckResponse {
    status: String,
    version: String,
}

async fn healthcheck() -> Json<HealthcheckResponse> {
    Json(HealthcheckResponse {
        status: "healthy".to_string(),
        version: VERSION.to_string(),
    })
}

async fn root() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

pub fn create_app(albums: Arc<AlbumService>) -> Router {
    let state = AppState { albums };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/healthcheck", get(healthcheck))
        .merge(api_router())
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
