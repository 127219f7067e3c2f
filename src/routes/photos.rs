use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::app::AppState;
use crate::error::AppResult;
use crate::models::{AlbumInfo, AlbumResponse, AlbumUrlQuery};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/photos", get(get_album_photos))
        .route("/photos/:album_id", get(get_album_photos_by_id))
        .route("/albums/info", get(get_album_info))
}

/// Every photo of an album, at all available sizes.
///
/// Example: `/photos?url=https://user.smugmug.com/album-name`
async fn get_album_photos(
    State(state): State<AppState>,
    Query(query): Query<AlbumUrlQuery>,
) -> AppResult<Json<AlbumResponse>> {
    let url = query.require_url()?;
    info!("Extracting photos from: {}", url);
    let album = state.albums.fetch_album(url).await?;
    Ok(Json(album))
}

/// Example: `/photos/n-ABC123`
async fn get_album_photos_by_id(
    State(state): State<AppState>,
    Path(album_id): Path<String>,
) -> AppResult<Json<AlbumResponse>> {
    info!("Extracting photos from album ID: {}", album_id);
    let album = state.albums.fetch_album_by_id(&album_id).await?;
    Ok(Json(album))
}

async fn get_album_info(
    State(state): State<AppState>,
    Query(query): Query<AlbumUrlQuery>,
) -> AppResult<Json<AlbumInfo>> {
    let url = query.require_url()?;
    info!("Fetching album info for: {}", url);
    let info = state.albums.fetch_album_info(url).await?;
    Ok(Json(info))
}
