//! Lossy encoders used by the thumbnail compressor.
//!
//! The compressor only needs "encode this image at quality Q and give me the
//! bytes", so the encoder sits behind the [`LossyEncoder`] trait. Production
//! code uses [`JpegThumbnailEncoder`]; tests substitute scripted encoders to
//! drive the quality search deterministically.

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::error::ThumbnailError;

/// Default starting quality for the thumbnail search.
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Minimum allowed JPEG quality.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Maximum allowed JPEG quality.
pub const MAX_JPEG_QUALITY: u8 = 100;

// =============================================================================
// Encoder Trait
// =============================================================================

/// An encoder whose output size is controlled by a quality parameter.
pub trait LossyEncoder {
    /// Encode `image` at `quality` and return the encoded bytes.
    fn encode(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>, ThumbnailError>;
}

impl<E: LossyEncoder + ?Sized> LossyEncoder for &E {
    fn encode(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>, ThumbnailError> {
        (**self).encode(image, quality)
    }
}

// =============================================================================
// JPEG Encoder
// =============================================================================

/// Baseline JPEG encoder backed by the `image` crate.
///
/// Expects an image already normalized to 8-bit RGB or grayscale
/// (see [`normalize_color`](super::normalize_color)).
#[derive(Debug, Clone, Default)]
pub struct JpegThumbnailEncoder {}

impl JpegThumbnailEncoder {
    /// Create a new JPEG encoder.
    pub fn new() -> Self {
        Self {}
    }

    /// Get dimensions of an encoded JPEG without fully decoding it.
    ///
    /// Returns `(width, height)` in pixels.
    pub fn dimensions(&self, source: &[u8]) -> Result<(u32, u32), ThumbnailError> {
        let cursor = std::io::Cursor::new(source);
        let reader = image::ImageReader::with_format(cursor, image::ImageFormat::Jpeg);

        reader
            .into_dimensions()
            .map_err(|e| ThumbnailError::Decode {
                message: e.to_string(),
            })
    }
}

impl LossyEncoder for JpegThumbnailEncoder {
    fn encode(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>, ThumbnailError> {
        let quality = clamp_quality(quality);

        // The JPEG writer happily emits a header for an empty frame, so
        // reject it here instead of producing an unreadable file.
        if image.width() == 0 || image.height() == 0 {
            return Err(ThumbnailError::Encode {
                quality,
                message: format!(
                    "cannot encode {}x{} image",
                    image.width(),
                    image.height()
                ),
            });
        }

        let mut output = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut output, quality);

        image
            .write_with_encoder(encoder)
            .map_err(|e| ThumbnailError::Encode {
                quality,
                message: e.to_string(),
            })?;

        Ok(output)
    }
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Returns `true` if quality is in the valid range (1-100).
#[inline]
pub fn is_valid_quality(quality: u8) -> bool {
    (MIN_JPEG_QUALITY..=MAX_JPEG_QUALITY).contains(&quality)
}

/// Clamp quality to valid range.
#[inline]
pub fn clamp_quality(quality: u8) -> u8 {
    quality.clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY)
}

// =============================================================================
// Tests
// =============================================================================
