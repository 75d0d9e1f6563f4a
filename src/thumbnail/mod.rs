//! Thumbnail generation.
//!
//! Pictures are downscaled by a fixed linear factor and re-encoded as JPEG,
//! lowering quality until the output fits a byte budget.
//!
//! # Pipeline
//!
//! ```text
//! source file ──decode──▶ DynamicImage
//!                              │ normalize_color (RGB8 / Luma8)
//!                              ▼
//!                    resize_with_aspect_ratio (Lanczos3, floor(W·f) × floor(H·f))
//!                              │
//!                              ▼
//!                    ThumbnailCompressor (quality 85, 80, … until ≤ budget)
//!                              │
//!                              ▼
//!                    <output_dir>/<stem>.jpg
//! ```
//!
//! # Components
//!
//! - [`ThumbnailGenerator`]: batch driver over a picture directory
//! - [`ThumbnailCompressor`]: downward quality search against a byte budget
//! - [`LossyEncoder`] / [`JpegThumbnailEncoder`]: the encode step the search drives
//! - [`resize_with_aspect_ratio`], [`normalize_color`]: pixel transforms
//!
//! # Example
//!
//! ```no_run
//! use personal_site::thumbnail::{CompressionSettings, ScaleFactor, ThumbnailGenerator};
//!
//! let generator = ThumbnailGenerator::new("assets/pictures", "assets/thumbnails")
//!     .with_scale(ScaleFactor::new(0.25).unwrap())
//!     .with_settings(CompressionSettings::new(250 * 1024, 85, 5));
//!
//! let summary = generator.generate_all().unwrap();
//! println!("{} thumbnails", summary.generated());
//! ```

mod compress;
mod encoder;
mod generator;
mod resize;

pub use compress::{
    compress_to_target_size, CompressionResult, CompressionSettings, ThumbnailCompressor,
    DEFAULT_QUALITY_STEP, DEFAULT_TARGET_BYTES, QUALITY_FLOOR,
};
pub use encoder::{
    clamp_quality, is_valid_quality, JpegThumbnailEncoder, LossyEncoder, DEFAULT_JPEG_QUALITY,
    MAX_JPEG_QUALITY, MIN_JPEG_QUALITY,
};
pub use generator::{
    BatchEntry, BatchSummary, ThumbnailGenerator, ThumbnailReport, DEFAULT_THUMBNAILS_DIR,
};
pub use resize::{
    normalize_color, resize_with_aspect_ratio, scaled_dimensions, ScaleFactor,
    DEFAULT_SCALE_FACTOR,
};
