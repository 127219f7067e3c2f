//! Conversion of upstream image records into [`Photo`]s.

use crate::models::{ImageSize, Photo, PhotoUrl};
use crate::smugmug::payload::ImageRecord;

/// Sizes derived from a lone thumbnail, in emission order.
const SYNTHESIZED_SIZES: [ImageSize; 7] = [
    ImageSize::Small,
    ImageSize::Medium,
    ImageSize::Large,
    ImageSize::XLarge,
    ImageSize::X2Large,
    ImageSize::X3Large,
    ImageSize::Original,
];

fn size_fields(record: &ImageRecord) -> [(ImageSize, Option<&str>); 8] {
    [
        (ImageSize::Thumb, record.thumbnail_url.as_deref()),
        (ImageSize::Small, record.small_url.as_deref()),
        (ImageSize::Medium, record.medium_url.as_deref()),
        (ImageSize::Large, record.large_url.as_deref()),
        (ImageSize::XLarge, record.xlarge_url.as_deref()),
        (ImageSize::X2Large, record.x2large_url.as_deref()),
        (ImageSize::X3Large, record.x3large_url.as_deref()),
        (ImageSize::Original, record.original_url.as_deref()),
    ]
}

pub fn extract_photo_urls(record: &ImageRecord) -> Vec<PhotoUrl> {
    let mut urls: Vec<PhotoUrl> = size_fields(record)
        .into_iter()
        .filter_map(|(size, value)| {
            value
                .filter(|url| url.starts_with("http"))
                .map(|url| PhotoUrl {
                    size,
                    url: url.to_string(),
                })
        })
        .collect();

    let derived = match urls.as_slice() {
        [only] if only.size == ImageSize::Thumb => synthesize_sizes(&only.url),
        _ => Vec::new(),
    };
    urls.extend(derived);

    urls
}

/// Best-effort guess at the other sizes from a thumbnail URL.
///
/// Rewrites the `/Th/` path segment and the `-Th.` filename suffix to each
/// size's code. Sizes whose rewrite leaves the URL unchanged are skipped. The
/// resulting URLs are never checked against the upstream host.
pub fn synthesize_sizes(thumbnail_url: &str) -> Vec<PhotoUrl> {
    let thumb_segment = format!("/{}/", ImageSize::Thumb.url_code());
    let thumb_suffix = format!("-{}.", ImageSize::Thumb.url_code());

    SYNTHESIZED_SIZES
        .iter()
        .filter_map(|&size| {
            let code = size.url_code();
            let url = thumbnail_url
                .replace(&thumb_segment, &format!("/{}/", code))
                .replace(&thumb_suffix, &format!("-{}.", code));

            (url != thumbnail_url).then_some(PhotoUrl { size, url })
        })
        .collect()
}

pub fn select_thumbnail(urls: &[PhotoUrl]) -> Option<String> {
    urls.iter()
        .find(|u| u.size == ImageSize::Thumb)
        .or_else(|| urls.first())
        .map(|u| u.url.clone())
}

pub fn to_photo(record: &ImageRecord) -> Photo {
    let urls = extract_photo_urls(record);
    let thumbnail_url = select_thumbnail(&urls);

    Photo {
        id: record.image_key.clone().unwrap_or_default(),
        title: record.title.clone(),
        urls,
        thumbnail_url,
    }
}
