#![cfg(test)]

use crate::app::create_app;
use crate::config::SmugMugConfig;
use crate::error::{AppError, AppResult};
use crate::service::AlbumService;
use crate::smugmug::{check_status, UpstreamApi};
use axum::Router;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum FakeReply {
    Json(Value),
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub params: Vec<(String, String)>,
}

/// In-memory stand-in for the upstream API.
///
/// Replies are keyed by a URL fragment; the longest fragment contained in the
/// requested URL wins, so `album/X` and `album/X!images` can coexist.
#[derive(Default)]
pub struct FakeUpstream {
    replies: Vec<(String, FakeReply)>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, fragment: &str, body: Value) -> Self {
        self.replies
            .push((fragment.to_string(), FakeReply::Json(body)));
        self
    }

    pub fn with_status(mut self, fragment: &str, status: u16) -> Self {
        self.replies
            .push((fragment.to_string(), FakeReply::Status(status)));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl UpstreamApi for FakeUpstream {
    fn get_json(&self, url: &str, params: &[(String, String)]) -> AppResult<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                url: url.to_string(),
                params: params.to_vec(),
            });
        }

        let reply = self
            .replies
            .iter()
            .filter(|(fragment, _)| url.contains(fragment.as_str()))
            .max_by_key(|(fragment, _)| fragment.len())
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(FakeReply::Json(body)) => Ok(body),
            Some(FakeReply::Status(code)) => {
                let status = StatusCode::from_u16(code)
                    .map_err(|_| AppError::Upstream { status: code })?;
                check_status(status)?;
                Ok(Value::Null)
            }
            None => Err(AppError::album_not_found()),
        }
    }
}

/// Wrap an album object in the upstream `Response.Album` envelope.
pub fn album_payload(album: Value) -> Value {
    json!({ "Response": { "Album": album } })
}

/// Create a test app backed by the given fake upstream
pub fn create_test_app(fake: Arc<FakeUpstream>) -> Router {
    let api: Arc<dyn UpstreamApi> = fake;
    let service = Arc::new(AlbumService::new(api, SmugMugConfig::default()));
    create_app(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_fragment_wins() {
        let fake = FakeUpstream::new()
            .with_json("album/A", json!({ "which": "album" }))
            .with_json("album/A!images", json!({ "which": "images" }));

        let body = fake.get_json("https://x/album/A!images", &[]).unwrap();
        assert_eq!(body["which"], "images");

        let body = fake.get_json("https://x/album/A", &[]).unwrap();
        assert_eq!(body["which"], "album");
        assert_eq!(fake.calls().len(), 2);
    }

    #[test]
    fn test_status_replies_use_upstream_mapping() {
        let fake = FakeUpstream::new().with_status("album/A", 429);
        assert!(matches!(
            fake.get_json("https://x/album/A", &[]),
            Err(AppError::RateLimited)
        ));
    }
}
