use serde::{Deserialize, Serialize};

/// Upstream size ladder, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSize {
    Thumb,
    Small,
    Medium,
    Large,
    XLarge,
    X2Large,
    X3Large,
    Original,
}

impl ImageSize {
    /// Short code used in SmugMug's derived-size URLs (`/L/photo-L.jpg`).
    pub fn url_code(self) -> &'static str {
        match self {
            ImageSize::Thumb => "Th",
            ImageSize::Small => "S",
            ImageSize::Medium => "M",
            ImageSize::Large => "L",
            ImageSize::XLarge => "XL",
            ImageSize::X2Large => "X2",
            ImageSize::X3Large => "X3",
            ImageSize::Original => "O",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoUrl {
    pub size: ImageSize,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub title: Option<String>,
    pub urls: Vec<PhotoUrl>,
    pub thumbnail_url: Option<String>,
}
