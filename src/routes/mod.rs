mod photos;

use crate::app::AppState;
use axum::Router;

/// Public endpoints advertised by the root descriptor.
pub const ENDPOINTS: [&str; 3] = ["/photos", "/photos/{album_id}", "/albums/info"];

pub fn api_router() -> Router<AppState> {
    Router::new().merge(photos::router())
}
