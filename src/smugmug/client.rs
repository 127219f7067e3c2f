use crate::config::{OAuthCredentials, SmugMugConfig};
use crate::error::{AppError, AppResult};
use crate::smugmug::oauth::OAuthSigner;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Blocking access to the upstream JSON API.
///
/// Implementations are called from worker threads, never from the async
/// executor directly.
pub trait UpstreamApi: Send + Sync {
    fn get_json(&self, url: &str, params: &[(String, String)]) -> AppResult<Value>;
}

/// Map an upstream status to the service error taxonomy. Checked once, never retried.
pub fn check_status(status: StatusCode) -> AppResult<()> {
    match status {
        StatusCode::NOT_FOUND => Err(AppError::album_not_found()),
        StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimited),
        s if s.as_u16() >= 400 => Err(AppError::Upstream { status: s.as_u16() }),
        _ => Ok(()),
    }
}

/// Shared OAuth-signed HTTP client for the SmugMug API.
pub struct SmugMugClient {
    http: reqwest::blocking::Client,
    signer: OAuthSigner,
}

impl SmugMugClient {
    /// Build the client. Must run outside the async executor (e.g. in `spawn_blocking`).
    pub fn new(config: &SmugMugConfig) -> AppResult<Self> {
        let credentials = OAuthCredentials::from_config(config)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            signer: OAuthSigner::new(credentials),
        })
    }
}

impl UpstreamApi for SmugMugClient {
    fn get_json(&self, url: &str, params: &[(String, String)]) -> AppResult<Value> {
        let authorization = self.signer.authorization_header("GET", url, params)?;

        let response = self
            .http
            .get(url)
            .query(params)
            .header(AUTHORIZATION, authorization)
            .send()?;

        check_status(response.status())?;
        Ok(response.json()?)
    }
}
