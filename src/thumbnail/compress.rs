//! Quality search that fits an encoded thumbnail under a byte budget.
//!
//! # Search policy
//!
//! Starting at the initial quality, the image is encoded and measured. The
//! first quality whose output fits the budget wins; otherwise quality drops
//! by a fixed step and the image is encoded again. The search stops once the
//! quality would reach the floor ([`QUALITY_FLOOR`]), and the last encoding
//! produced is returned even though it is over budget. With the defaults
//! (85, step 5) that is at most 15 encodes, ending at quality 15.
//!
//! No output at all (start quality already at the floor, or an empty frame)
//! is reported as [`ThumbnailError::EncodeFailed`].

use bytes::Bytes;
use image::DynamicImage;
use tracing::debug;

use super::encoder::{JpegThumbnailEncoder, LossyEncoder, DEFAULT_JPEG_QUALITY};
use crate::error::ThumbnailError;

/// Qualities at or below this value are never tried.
pub const QUALITY_FLOOR: u8 = 10;

/// Default byte budget for a thumbnail (250 KiB).
pub const DEFAULT_TARGET_BYTES: usize = 250 * 1024;

/// Default quality decrement between attempts.
pub const DEFAULT_QUALITY_STEP: u8 = 5;

/// Parameters for [`ThumbnailCompressor::compress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionSettings {
    /// Maximum acceptable encoded size in bytes
    pub target_bytes: usize,

    /// Quality of the first attempt
    pub initial_quality: u8,

    /// Amount subtracted from quality after each oversize attempt (min 1)
    pub quality_step: u8,
}

impl CompressionSettings {
    pub fn new(target_bytes: usize, initial_quality: u8, quality_step: u8) -> Self {
        Self {
            target_bytes,
            initial_quality,
            quality_step,
        }
    }

    /// Qualities the search will try, in order.
    pub fn schedule(&self) -> impl Iterator<Item = u8> {
        let step = self.quality_step.max(1);
        let mut next = Some(self.initial_quality);

        std::iter::from_fn(move || {
            let quality = next.filter(|q| *q > QUALITY_FLOOR)?;
            next = quality.checked_sub(step);
            Some(quality)
        })
    }
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            target_bytes: DEFAULT_TARGET_BYTES,
            initial_quality: DEFAULT_JPEG_QUALITY,
            quality_step: DEFAULT_QUALITY_STEP,
        }
    }
}

/// Outcome of a quality search.
#[derive(Debug, Clone)]
pub struct CompressionResult {
    /// Encoded image
    pub data: Bytes,

    /// Quality that produced `data`
    pub quality: u8,

    /// Number of encodes performed
    pub attempts: usize,

    /// Whether `data` fits the budget
    pub within_budget: bool,
}

impl CompressionResult {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Runs the downward quality search with a pluggable encoder.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailCompressor<E = JpegThumbnailEncoder> {
    encoder: E,
}

impl ThumbnailCompressor<JpegThumbnailEncoder> {
    /// Create a compressor backed by the JPEG encoder.
    pub fn new() -> Self {
        Self::with_encoder(JpegThumbnailEncoder::new())
    }
}

impl<E: LossyEncoder> ThumbnailCompressor<E> {
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Encode `image` at the highest scheduled quality that fits the budget.
    ///
    /// Returns the floor-most attempt when nothing fits. Encoder failures
    /// abort the search.
    pub fn compress(
        &self,
        image: &DynamicImage,
        settings: &CompressionSettings,
    ) -> Result<CompressionResult, ThumbnailError> {
        let encode_failed = || ThumbnailError::EncodeFailed {
            width: image.width(),
            height: image.height(),
            initial_quality: settings.initial_quality,
        };

        if image.width() == 0 || image.height() == 0 {
            return Err(encode_failed());
        }

        let mut last: Option<CompressionResult> = None;
        let mut attempts = 0;

        for quality in settings.schedule() {
            let data = self.encoder.encode(image, quality)?;
            attempts += 1;

            debug!(
                quality = quality,
                size = data.len(),
                target = settings.target_bytes,
                "Encoded thumbnail attempt"
            );

            let within_budget = data.len() <= settings.target_bytes;
            let result = CompressionResult {
                data: Bytes::from(data),
                quality,
                attempts,
                within_budget,
            };

            if within_budget {
                return Ok(result);
            }
            last = Some(result);
        }

        last.ok_or_else(encode_failed)
    }
}

/// Compress with the default JPEG encoder.
pub fn compress_to_target_size(
    image: &DynamicImage,
    settings: &CompressionSettings,
) -> Result<CompressionResult, ThumbnailError> {
    ThumbnailCompressor::new().compress(image, settings)
}
