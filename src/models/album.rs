use crate::error::{AppError, AppResult};
use crate::models::Photo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumResponse {
    pub album_title: String,
    pub album_id: String,
    pub total_photos: usize,
    pub photos: Vec<Photo>,
}

/// Album metadata without the image listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumInfo {
    pub album_id: String,
    pub album_title: String,
    pub album_url: String,
    pub total_photos: u64,
    pub privacy: Option<String>,
    pub description: Option<String>,
    pub date_created: Option<String>,
    pub date_modified: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AlbumUrlQuery {
    #[serde(default)]
    pub url: Option<String>,
}

impl AlbumUrlQuery {
    pub fn require_url(&self) -> AppResult<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::InvalidInput("Query parameter 'url' is required".to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub service: String,
    pub version: String,
    pub endpoints: Vec<String>,
}
