use once_cell::sync::Lazy;
use std::path::PathBuf;

pub static CONFIG_PATH: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var("SMUGMUG_PHOTOS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.yaml"))
});

pub const SERVICE_NAME: &str = "SmugMug Photo Extractor";

/// Image count requested when the album reports zero (or no) images.
pub const DEFAULT_IMAGE_FETCH_COUNT: u64 = 5000;

pub const DEFAULT_ALBUM_TITLE: &str = "Untitled album";

pub const ALBUM_VERBOSITY: &str = "1";
pub const IMAGES_VERBOSITY: &str = "2";

pub const LOCATOR_ALBUM: &str = "Album";
