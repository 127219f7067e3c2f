use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_reload")]
    pub reload: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_reload() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            reload: default_reload(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmugMugConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_web_uri_lookup_url")]
    pub web_uri_lookup_url: String,
    #[serde(default = "default_web_base_url")]
    pub web_base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub access_token_secret: Option<String>,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
    /// Accepted for compatibility; upstream calls are never retried.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_api_base_url() -> String {
    "https://api.smugmug.com/api/v2".to_string()
}

fn default_web_uri_lookup_url() -> String {
    "https://api.smugmug.com/api/v2!weburilookup".to_string()
}

fn default_web_base_url() -> String {
    "https://www.smugmug.com".to_string()
}

fn default_user_agent() -> String {
    "SmugMugPhotoSelector/1.0".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl Default for SmugMugConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            web_uri_lookup_url: default_web_uri_lookup_url(),
            web_base_url: default_web_base_url(),
            user_agent: default_user_agent(),
            api_key: None,
            api_secret: None,
            access_token: None,
            access_token_secret: None,
            request_timeout_seconds: default_request_timeout_seconds(),
            max_retries: default_max_retries(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub smugmug: SmugMugConfig,
}

impl Config {
    /// Overlay values from environment-style variables onto the loaded config.
    ///
    /// Unparseable numeric or boolean values are ignored and the previous value kept.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(reload) = lookup("RELOAD").and_then(|v| parse_bool(&v)) {
            self.server.reload = reload;
        }

        let smugmug = &mut self.smugmug;
        if let Some(v) = lookup("SMUGMUG_API_BASE_URL") {
            smugmug.api_base_url = v;
        }
        if let Some(v) = lookup("SMUGMUG_WEB_URI_LOOKUP") {
            smugmug.web_uri_lookup_url = v;
        }
        if let Some(v) = lookup("SMUGMUG_WEB_BASE_URL") {
            smugmug.web_base_url = v;
        }
        if let Some(v) = lookup("SMUGMUG_USER_AGENT") {
            smugmug.user_agent = v;
        }
        if let Some(v) = lookup("SMUGMUG_API_KEY") {
            smugmug.api_key = Some(v);
        }
        if let Some(v) = lookup("SMUGMUG_API_SECRET") {
            smugmug.api_secret = Some(v);
        }
        if let Some(v) = lookup("SMUGMUG_ACCESS_TOKEN") {
            smugmug.access_token = Some(v);
        }
        if let Some(v) = lookup("SMUGMUG_ACCESS_TOKEN_SECRET") {
            smugmug.access_token_secret = Some(v);
        }
        if let Some(v) = lookup("REQUEST_TIMEOUT").and_then(|v| v.parse().ok()) {
            smugmug.request_timeout_seconds = v;
        }
        if let Some(v) = lookup("MAX_RETRIES").and_then(|v| v.parse().ok()) {
            smugmug.max_retries = v;
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// The four OAuth 1.0a secrets needed to sign upstream requests.
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

impl OAuthCredentials {
    pub fn from_config(config: &SmugMugConfig) -> AppResult<Self> {
        fn present(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        match (
            present(&config.api_key),
            present(&config.api_secret),
            present(&config.access_token),
            present(&config.access_token_secret),
        ) {
            (Some(consumer_key), Some(consumer_secret), Some(token), Some(token_secret)) => {
                Ok(Self {
                    consumer_key,
                    consumer_secret,
                    token,
                    token_secret,
                })
            }
            _ => Err(AppError::Configuration(
                "OAuth credentials not configured".to_string(),
            )),
        }
    }
}

pub fn load_config(config_path: &Path) -> Config {
    if !config_path.exists() {
        return Config::default();
    }

    match fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

pub fn save_default_config(config_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).map_err(|e| std::io::Error::other(e.to_string()))?;
    fs::write(config_path, yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.server.reload);
        assert_eq!(config.smugmug.api_base_url, "https://api.smugmug.com/api/v2");
        assert_eq!(config.smugmug.request_timeout_seconds, 30);
        assert_eq!(config.smugmug.max_retries, 3);
        assert!(config.smugmug.api_key.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("PORT", "9100"),
            ("RELOAD", "false"),
            ("SMUGMUG_API_KEY", "key"),
            ("REQUEST_TIMEOUT", "5"),
            ("MAX_RETRIES", "not-a-number"),
        ]));

        assert_eq!(config.server.port, 9100);
        assert!(!config.server.reload);
        assert_eq!(config.smugmug.api_key.as_deref(), Some("key"));
        assert_eq!(config.smugmug.request_timeout_seconds, 5);
        assert_eq!(config.smugmug.max_retries, 3);
    }

    #[test]
    fn test_credentials_require_all_four_secrets() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("SMUGMUG_API_SECRET", "secret"),
            ("SMUGMUG_ACCESS_TOKEN", "token"),
            ("SMUGMUG_ACCESS_TOKEN_SECRET", "token_secret"),
        ]));
        assert!(matches!(
            OAuthCredentials::from_config(&config.smugmug),
            Err(AppError::Configuration(_))
        ));

        config.smugmug.api_key = Some("   ".to_string());
        assert!(OAuthCredentials::from_config(&config.smugmug).is_err());

        config.smugmug.api_key = Some("key".to_string());
        let credentials = OAuthCredentials::from_config(&config.smugmug).unwrap();
        assert_eq!(credentials.consumer_key, "key");
        assert_eq!(credentials.token_secret, "token_secret");
    }

    #[test]
    fn test_load_config_from_yaml_with_partial_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "server:\n  port: 8123\nsmugmug:\n  user_agent: Tester/2.0\n").unwrap();

        let config = load_config(&path);
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.smugmug.user_agent, "Tester/2.0");
        assert_eq!(config.smugmug.web_base_url, "https://www.smugmug.com");
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.yaml"));
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_save_default_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        save_default_config(&path).unwrap();

        let config = load_config(&path);
        assert_eq!(
            config.smugmug.web_uri_lookup_url,
            "https://api.smugmug.com/api/v2!weburilookup"
        );
    }
}
