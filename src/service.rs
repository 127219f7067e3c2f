use crate::config::SmugMugConfig;
use crate::constants::{
    ALBUM_VERBOSITY, DEFAULT_ALBUM_TITLE, DEFAULT_IMAGE_FETCH_COUNT, IMAGES_VERBOSITY,
    LOCATOR_ALBUM,
};
use crate::error::{AppError, AppResult};
use crate::models::{AlbumInfo, AlbumResponse, Photo};
use crate::smugmug::normalizer::to_photo;
use crate::smugmug::payload::{AlbumEnvelope, AlbumRecord, ImagesEnvelope, WebUriLookupEnvelope};
use crate::smugmug::resolver::{album_key_from_id, extract_album_key, normalize_album_url};
use crate::smugmug::UpstreamApi;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Album lookups against the upstream API. One instance is shared by all requests.
pub struct AlbumService {
    api: Arc<dyn UpstreamApi>,
    config: SmugMugConfig,
}

impl AlbumService {
    pub fn new(api: Arc<dyn UpstreamApi>, config: SmugMugConfig) -> Self {
        Self { api, config }
    }

    pub async fn resolve_album_key(&self, reference: &str) -> AppResult<String> {
        let url = normalize_album_url(reference);

        if let Some(key) = extract_album_key(&url) {
            debug!("Album key {} extracted from {}", key, url);
            return Ok(key);
        }

        let params = vec![
            ("WebUri".to_string(), url.clone()),
            ("_accept".to_string(), "application/json".to_string()),
        ];
        let lookup: WebUriLookupEnvelope = self
            .request(self.config.web_uri_lookup_url.clone(), params)
            .await?;

        lookup
            .response
            .filter(|body| body.locator.as_deref() == Some(LOCATOR_ALBUM))
            .and_then(|body| body.album)
            .and_then(|album| album.album_key)
            .ok_or_else(|| {
                warn!("No album found for {}", url);
                AppError::album_not_found()
            })
    }

    pub async fn fetch_album(&self, reference: &str) -> AppResult<AlbumResponse> {
        let key = self.resolve_album_key(reference).await?;
        self.fetch_album_by_key(key).await
    }

    pub async fn fetch_album_by_id(&self, identifier: &str) -> AppResult<AlbumResponse> {
        let key = album_key_from_id(identifier)?;
        self.fetch_album_by_key(key).await
    }

    pub async fn fetch_album_info(&self, reference: &str) -> AppResult<AlbumInfo> {
        let key = self.resolve_album_key(reference).await?;
        let album = self.album_record(&key).await?;

        Ok(AlbumInfo {
            album_url: format!(
                "{}/album/{}",
                self.config.web_base_url.trim_end_matches('/'),
                key
            ),
            album_id: key,
            album_title: album
                .title
                .unwrap_or_else(|| DEFAULT_ALBUM_TITLE.to_string()),
            total_photos: album.image_count.unwrap_or(0),
            privacy: album.privacy,
            description: album.description,
            date_created: album.date_created,
            date_modified: album.date_modified,
        })
    }

    async fn fetch_album_by_key(&self, key: String) -> AppResult<AlbumResponse> {
        let album = self.album_record(&key).await?;

        // A reported count of zero may just mean the count is unknown.
        let count = album
            .image_count
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_IMAGE_FETCH_COUNT);

        let params = vec![
            ("_verbosity".to_string(), IMAGES_VERBOSITY.to_string()),
            ("count".to_string(), count.to_string()),
        ];
        let images: ImagesEnvelope = self
            .request(
                format!("{}/album/{}!images", self.config.api_base_url, key),
                params,
            )
            .await?;

        let photos: Vec<Photo> = images.response.album_image.iter().map(to_photo).collect();
        info!("Album {} returned {} photos", key, photos.len());

        Ok(AlbumResponse {
            album_title: album
                .title
                .unwrap_or_else(|| DEFAULT_ALBUM_TITLE.to_string()),
            album_id: key,
            total_photos: photos.len(),
            photos,
        })
    }

    async fn album_record(&self, key: &str) -> AppResult<AlbumRecord> {
        let params = vec![("_verbosity".to_string(), ALBUM_VERBOSITY.to_string())];
        let envelope: AlbumEnvelope = self
            .request(format!("{}/album/{}", self.config.api_base_url, key), params)
            .await?;
        Ok(envelope.response.album)
    }

    /// Run one upstream call on the blocking pool and decode its body.
    async fn request<T>(&self, url: String, params: Vec<(String, String)>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let api = Arc::clone(&self.api);
        let value = tokio::task::spawn_blocking(move || {
            api.get_json(&url, &params).inspect_err(|e| {
                warn!("Upstream request to {} failed: {}", url, e);
            })
        })
        .await??;

        Ok(serde_json::from_value(value)?)
    }
}
