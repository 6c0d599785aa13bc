//! Image handling: inline data-URI uploads and placeholder fallback.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use charity_common::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG format
    Jpeg,
    /// PNG format
    Png,
    /// WebP format
    WebP,
    /// AVIF format
    Avif,
    /// GIF format
    Gif,
    /// SVG format
    Svg,
}

impl ImageFormat {
    /// Get MIME type for this format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
            Self::Avif => "image/avif",
            Self::Gif => "image/gif",
            Self::Svg => "image/svg+xml",
        }
    }

    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            "avif" => Some(Self::Avif),
            "gif" => Some(Self::Gif),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    /// Detect format from MIME type.
    #[must_use]
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::WebP),
            "image/avif" => Some(Self::Avif),
            "image/gif" => Some(Self::Gif),
            "image/svg+xml" => Some(Self::Svg),
            _ => None,
        }
    }

    /// Detect format from an upload's declared type, falling back to its name.
    #[must_use]
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        content_type.and_then(Self::from_mime_type).or_else(|| {
            file_name
                .and_then(|name| name.rsplit_once('.'))
                .and_then(|(_, ext)| Self::from_extension(ext))
        })
    }
}

/// An image as rendered: the source to load and the image to swap in if it
/// fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub src: String,
    pub fallback_src: String,
}

/// Whether `value` is an inline image.
#[must_use]
pub fn is_data_uri(value: &str) -> bool {
    value.starts_with("data:image/")
}

/// Media service.
#[derive(Debug, Clone)]
pub struct MediaService {
    placeholder_url: String,
    upload_limit_bytes: usize,
}

impl MediaService {
    /// Create a media service.
    #[must_use]
    pub const fn new(placeholder_url: String, upload_limit_bytes: usize) -> Self {
        Self {
            placeholder_url,
            upload_limit_bytes,
        }
    }

    /// The known-good placeholder image.
    #[cfg(test)]
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder_url
    }

    /// Size limit applied to uploads on screens that enforce one.
    #[must_use]
    pub const fn upload_limit_bytes(&self) -> usize {
        self.upload_limit_bytes
    }

    /// Resolve a stored image URL for display.
    ///
    /// Blank or unusable values are replaced by the placeholder; this never fails.
    #[must_use]
    pub fn image(&self, stored: &str) -> ImageRef {
        let stored = stored.trim();
        let src = if is_usable(stored) {
            stored.to_string()
        } else {
            if !stored.is_empty() {
                tracing::debug!(url = %truncate(stored), "Unusable image URL, using placeholder");
            }
            self.placeholder_url.clone()
        };
        ImageRef {
            src,
            fallback_src: self.placeholder_url.clone(),
        }
    }

    /// Encode an uploaded image as a `data:<mime>;base64,<payload>` URI.
    ///
    /// `enforce_limit` applies the configured size limit.
    pub fn encode_upload(
        &self,
        content_type: Option<&str>,
        file_name: Option<&str>,
        bytes: &[u8],
        enforce_limit: bool,
    ) -> AppResult<String> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        if enforce_limit && bytes.len() > self.upload_limit_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "Image must be smaller than {}MB",
                self.upload_limit_bytes / (1024 * 1024)
            )));
        }

        let format = ImageFormat::detect(content_type, file_name).ok_or_else(|| {
            AppError::BadRequest("Only image files can be uploaded".to_string())
        })?;

        tracing::debug!(
            mime = format.mime_type(),
            size = bytes.len(),
            "Encoding image upload"
        );

        Ok(format!(
            "data:{};base64,{}",
            format.mime_type(),
            STANDARD.encode(bytes)
        ))
    }
}

/// Inline images, absolute http(s) URLs and site-relative paths are loadable.
fn is_usable(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if is_data_uri(value) {
        return value.contains(";base64,");
    }
    if value.starts_with('/') && !value.starts_with("//") {
        return true;
    }
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

fn truncate(value: &str) -> &str {
    value.get(..64).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: usize = 1024 * 1024;

    fn service() -> MediaService {
        MediaService::new("https://img.example/placeholder.jpg".to_string(), 5 * MB)
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            ImageFormat::detect(Some("image/png"), Some("x.jpg")),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::detect(Some("application/octet-stream"), Some("logo.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::detect(None, Some("report.pdf")), None);
        assert_eq!(ImageFormat::detect(None, None), None);
    }

    #[test]
    fn test_image_falls_back_to_placeholder() {
        let media = service();

        let blank = media.image("  ");
        assert_eq!(blank.src, media.placeholder());

        let broken = media.image("not a url");
        assert_eq!(broken.src, media.placeholder());

        let relative = media.image("/images/banner.jpg");
        assert_eq!(relative.src, "/images/banner.jpg");

        let remote = media.image("https://cdn.example/a.jpg");
        assert_eq!(remote.src, "https://cdn.example/a.jpg");
        assert_eq!(remote.fallback_src, media.placeholder());

        let inline = media.image("data:image/png;base64,AAAA");
        assert_eq!(inline.src, "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_two_megabyte_upload_becomes_data_uri() {
        let bytes = vec![0xAB_u8; 2 * MB];
        let uri = service()
            .encode_upload(Some("image/jpeg"), Some("photo.jpg"), &bytes, true)
            .unwrap();

        assert!(uri.starts_with("data:image/jpeg;base64,"));
        let payload = uri.trim_start_matches("data:image/jpeg;base64,");
        assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
    }

    #[test]
    fn test_limit_only_applies_when_enforced() {
        let media = service();
        assert_eq!(media.upload_limit_bytes(), 5 * MB);
        let bytes = vec![1_u8; 5 * MB + 1];

        let err = media
            .encode_upload(Some("image/png"), None, &bytes, true)
            .unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
        assert!(err.to_string().contains("5MB"));

        assert!(media.encode_upload(Some("image/png"), None, &bytes, false).is_ok());
    }

    #[test]
    fn test_rejects_non_images_and_empty_files() {
        let media = service();
        assert!(matches!(
            media.encode_upload(Some("application/pdf"), Some("a.pdf"), b"%PDF", false),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            media.encode_upload(Some("image/png"), None, b"", false),
            Err(AppError::BadRequest(_))
        ));
    }
}
