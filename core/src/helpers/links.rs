use serde::{Deserialize, Serialize};

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "dummy.png";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Min,
    Mid,
    Max,
    Sqr,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Min => "min",
            ImageSize::Mid => "mid",
            ImageSize::Max => "max",
            ImageSize::Sqr => "sqr",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    pub cdn_url: String,
    pub image: Option<String>,
    pub size: ImageSize,
    pub undefined_image: Option<String>,
}

pub fn image_url(req: &ImageRequest) -> String {
    let cdn = &req.cdn_url;
    match req.image.as_deref().filter(|s| !s.is_empty()) {
        Some(image) => format!("{}/images/{}/{}", cdn, req.size.as_str(), image),
        None => {
            let placeholder = req
                .undefined_image
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_PLACEHOLDER_IMAGE);
            format!("{}/static/{}", cdn, placeholder)
        }
    }
}

pub fn file_url(cdn_url: &str, file: &str) -> String {
    format!("{}/files/{}", cdn_url, file)
}
