//! Colour normalization and fixed-factor downscaling.

use image::imageops::FilterType;
use image::DynamicImage;

/// Default linear scale applied to thumbnails (1/4 on each side).
pub const DEFAULT_SCALE_FACTOR: f64 = 0.25;

/// A linear downscale ratio in `(0, 1]`, applied identically to both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Create a scale factor, returning `None` outside `(0, 1]` or for NaN.
    pub fn new(factor: f64) -> Option<Self> {
        if factor > 0.0 && factor <= 1.0 {
            Some(Self(factor))
        } else {
            None
        }
    }

    /// The raw ratio.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Fraction of the original area kept by this factor.
    pub fn area_ratio(self) -> f64 {
        self.0 * self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(DEFAULT_SCALE_FACTOR)
    }
}

/// Compute `(floor(width * factor), floor(height * factor))`.
///
/// Truncation can yield zero for very small inputs (3px at 0.25); callers
/// downstream decide what to do with an empty frame.
pub fn scaled_dimensions(width: u32, height: u32, factor: ScaleFactor) -> (u32, u32) {
    let scale = |v: u32| (f64::from(v) * factor.get()).floor() as u32;
    (scale(width), scale(height))
}

/// Convert an image into a colour space the JPEG encoder accepts.
///
/// 8-bit RGB and 8-bit grayscale pass through untouched; everything else
/// (alpha, 16-bit, float) is flattened to 8-bit RGB.
pub fn normalize_color(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => image,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// Downscale `image` by `factor` on both axes using Lanczos3 resampling.
///
/// Does not guard against zero-sized output: an image whose scaled width or
/// height truncates to zero comes back as an empty frame of the same colour
/// type, which the encoder then refuses.
pub fn resize_with_aspect_ratio(image: &DynamicImage, factor: ScaleFactor) -> DynamicImage {
    let (width, height) = scaled_dimensions(image.width(), image.height(), factor);

    if width == 0 || height == 0 {
        return DynamicImage::new(width, height, image.color());
    }

    image.resize_exact(width, height, FilterType::Lanczos3)
}
