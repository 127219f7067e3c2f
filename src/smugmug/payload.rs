//! Typed views of the SmugMug v2 JSON payloads.
//!
//! Every field the service reads is optional; defaults are applied here so the
//! normalizer and orchestration never probe raw JSON.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `GET /album/{key}` body. The album object itself is mandatory.
#[derive(Debug, Deserialize)]
pub struct AlbumEnvelope {
    #[serde(rename = "Response")]
    pub response: AlbumBody,
}

#[derive(Debug, Deserialize)]
pub struct AlbumBody {
    #[serde(rename = "Album")]
    pub album: AlbumRecord,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlbumRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub album_key: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub image_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub privacy: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_created: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_modified: Option<String>,
}

/// `GET /album/{key}!images` body. A missing listing means an empty album.
#[derive(Debug, Default, Deserialize)]
pub struct ImagesEnvelope {
    #[serde(rename = "Response", default)]
    pub response: ImagesBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImagesBody {
    #[serde(rename = "AlbumImage", default)]
    pub album_image: Vec<ImageRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageRecord {
    #[serde(rename = "ImageKey", default, deserialize_with = "lenient_string")]
    pub image_key: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(rename = "ThumbnailUrl", default, deserialize_with = "lenient_string")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "SmallUrl", default, deserialize_with = "lenient_string")]
    pub small_url: Option<String>,
    #[serde(rename = "MediumUrl", default, deserialize_with = "lenient_string")]
    pub medium_url: Option<String>,
    #[serde(rename = "LargeUrl", default, deserialize_with = "lenient_string")]
    pub large_url: Option<String>,
    #[serde(rename = "XLargeUrl", default, deserialize_with = "lenient_string")]
    pub xlarge_url: Option<String>,
    #[serde(rename = "X2LargeUrl", default, deserialize_with = "lenient_string")]
    pub x2large_url: Option<String>,
    #[serde(rename = "X3LargeUrl", default, deserialize_with = "lenient_string")]
    pub x3large_url: Option<String>,
    #[serde(rename = "OriginalUrl", default, deserialize_with = "lenient_string")]
    pub original_url: Option<String>,
}

/// `!weburilookup` body.
#[derive(Debug, Default, Deserialize)]
pub struct WebUriLookupEnvelope {
    #[serde(rename = "Response", default)]
    pub response: Option<WebUriLookupBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebUriLookupBody {
    #[serde(rename = "Locator", default, deserialize_with = "lenient_string")]
    pub locator: Option<String>,
    #[serde(rename = "Album", default)]
    pub album: Option<AlbumRecord>,
}

// Non-string values are treated as absent rather than failing the whole payload.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_u64())
}
