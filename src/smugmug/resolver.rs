use crate::error::{AppError, AppResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Album key shapes recognized directly in a URL, tried in order.
static ALBUM_KEY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)/n-([A-Za-z0-9]+)",
        r"(?i)/album/([A-Za-z0-9]+)",
        r"(?i)albumkey=([A-Za-z0-9]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

const NODE_PREFIX: &str = "n-";

pub fn normalize_album_url(reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        reference.to_string()
    } else {
        format!("https://{}", reference)
    }
}

pub fn extract_album_key(url: &str) -> Option<String> {
    ALBUM_KEY_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Turn an explicit album identifier into a key, dropping one leading `n-`.
pub fn album_key_from_id(identifier: &str) -> AppResult<String> {
    if identifier.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Album ID cannot be empty".to_string(),
        ));
    }

    Ok(identifier
        .strip_prefix(NODE_PREFIX)
        .unwrap_or(identifier)
        .to_string())
}
