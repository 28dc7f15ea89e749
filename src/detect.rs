//! Image format detection for the header logo.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Image formats an office document can embed as a header logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG
    Jpeg,
    /// Graphics Interchange Format
    Gif,
    /// Windows bitmap
    Bmp,
}

impl ImageFormat {
    /// MIME type of the format.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
        }
    }

    /// File extension of the format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MAGIC: &[u8] = b"\xff\xd8\xff";
const GIF87_MAGIC: &[u8] = b"GIF87a";
const GIF89_MAGIC: &[u8] = b"GIF89a";
const BMP_MAGIC: &[u8] = b"BM";

/// Detect the image format from the leading bytes.
///
/// # Returns
/// * `Ok(ImageFormat)` if the data starts with a known signature
/// * `Err(Error::UnsupportedImage)` otherwise, including for empty data
pub fn detect_image_format(data: &[u8]) -> Result<ImageFormat> {
    if data.starts_with(PNG_MAGIC) {
        return Ok(ImageFormat::Png);
    }
    if data.starts_with(JPEG_MAGIC) {
        return Ok(ImageFormat::Jpeg);
    }
    if data.starts_with(GIF87_MAGIC) || data.starts_with(GIF89_MAGIC) {
        return Ok(ImageFormat::Gif);
    }
    // "BM" alone is too weak; require room for the 14-byte file header.
    if data.len() >= 14 && data.starts_with(BMP_MAGIC) {
        return Ok(ImageFormat::Bmp);
    }
    Err(Error::UnsupportedImage)
}

/// Check if bytes represent a supported image.
pub fn is_supported_image(data: &[u8]) -> bool {
    detect_image_format(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
        assert_eq!(detect_image_format(data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_jpeg() {
        let data = b"\xff\xd8\xff\xe0\x00\x10JFIF";
        assert_eq!(detect_image_format(data).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_gif() {
        assert_eq!(detect_image_format(b"GIF89a\x01\x00").unwrap(), ImageFormat::Gif);
        assert_eq!(detect_image_format(b"GIF87a\x01\x00").unwrap(), ImageFormat::Gif);
    }

    #[test]
    fn test_detect_bmp_requires_header() {
        assert!(detect_image_format(b"BM").is_err());
        let mut data = b"BM".to_vec();
        data.resize(14, 0);
        assert_eq!(detect_image_format(&data).unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn test_detect_unknown() {
        let result = detect_image_format(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::UnsupportedImage)));
        assert!(!is_supported_image(b""));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
        assert_eq!(ImageFormat::Png.to_string(), "image/png");
    }
}
