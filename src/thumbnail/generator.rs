//! Batch thumbnail generation over a picture directory.
//!
//! Each picture is fully processed (decode → normalize → resize → quality
//! search → write) before the next is opened. A failure on one file is
//! recorded in the summary and the batch moves on.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageReader;
use tracing::{info, warn};

use super::compress::{CompressionSettings, ThumbnailCompressor};
use super::encoder::{JpegThumbnailEncoder, LossyEncoder};
use super::resize::{normalize_color, resize_with_aspect_ratio, ScaleFactor};
use crate::error::{InventoryError, ThumbnailError};
use crate::inventory::{file_name, ImageDimensions, ImageInventory};

/// Default directory thumbnails are written to.
pub const DEFAULT_THUMBNAILS_DIR: &str = "assets/thumbnails";

// =============================================================================
// Reports
// =============================================================================

/// Result of generating one thumbnail.
#[derive(Debug, Clone)]
pub struct ThumbnailReport {
    /// Source filename
    pub name: String,

    /// Where the thumbnail was written
    pub output_path: PathBuf,

    pub original_dimensions: ImageDimensions,
    pub thumbnail_dimensions: ImageDimensions,

    /// Size of the source file on disk
    pub original_bytes: u64,

    /// Size of the written thumbnail
    pub final_bytes: u64,

    /// JPEG quality chosen by the search
    pub quality: u8,

    /// False when even the lowest attempted quality overshot the budget
    pub within_budget: bool,
}

impl ThumbnailReport {
    /// How many times smaller the thumbnail is than the source.
    pub fn compression_ratio(&self) -> f64 {
        self.original_bytes as f64 / self.final_bytes as f64
    }

    /// Percentage of the source size removed.
    pub fn size_reduction_percent(&self) -> f64 {
        (1.0 - self.final_bytes as f64 / self.original_bytes as f64) * 100.0
    }
}

/// Per-file outcome within a batch.
#[derive(Debug)]
pub struct BatchEntry {
    pub name: String,
    pub result: Result<ThumbnailReport, ThumbnailError>,
}

/// Everything a batch run produced, in filename order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub entries: Vec<BatchEntry>,
}

impl BatchSummary {
    /// Successful thumbnails.
    pub fn reports(&self) -> impl Iterator<Item = &ThumbnailReport> {
        self.entries.iter().filter_map(|e| e.result.as_ref().ok())
    }

    /// Files that failed, with their error.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &ThumbnailError)> {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().err().map(|err| (e.name.as_str(), err)))
    }

    pub fn generated(&self) -> usize {
        self.reports().count()
    }

    pub fn total_original_bytes(&self) -> u64 {
        self.reports().map(|r| r.original_bytes).sum()
    }

    pub fn total_final_bytes(&self) -> u64 {
        self.reports().map(|r| r.final_bytes).sum()
    }

    /// Total original size over total thumbnail size; `None` when nothing
    /// was generated.
    pub fn average_compression(&self) -> Option<f64> {
        let total_final = self.total_final_bytes();
        if self.generated() == 0 || total_final == 0 {
            return None;
        }
        Some(self.total_original_bytes() as f64 / total_final as f64)
    }

    /// Percentage of the total original size saved; `None` when nothing
    /// was generated.
    pub fn space_saved_percent(&self) -> Option<f64> {
        let total_original = self.total_original_bytes();
        if self.generated() == 0 || total_original == 0 {
            return None;
        }
        Some((1.0 - self.total_final_bytes() as f64 / total_original as f64) * 100.0)
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Produces `<stem>.jpg` thumbnails for a directory of pictures.
#[derive(Debug, Clone)]
pub struct ThumbnailGenerator<E = JpegThumbnailEncoder> {
    source_dir: PathBuf,
    output_dir: PathBuf,
    scale: ScaleFactor,
    settings: CompressionSettings,
    compressor: ThumbnailCompressor<E>,
}

impl ThumbnailGenerator<JpegThumbnailEncoder> {
    /// Create a generator with default scale and compression settings.
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            scale: ScaleFactor::default(),
            settings: CompressionSettings::default(),
            compressor: ThumbnailCompressor::new(),
        }
    }
}

impl<E: LossyEncoder> ThumbnailGenerator<E> {
    pub fn with_scale(mut self, scale: ScaleFactor) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_settings(mut self, settings: CompressionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Swap the encoder used by the quality search.
    pub fn with_encoder<F: LossyEncoder>(self, encoder: F) -> ThumbnailGenerator<F> {
        ThumbnailGenerator {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            scale: self.scale,
            settings: self.settings,
            compressor: ThumbnailCompressor::with_encoder(encoder),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    pub fn settings(&self) -> &CompressionSettings {
        &self.settings
    }

    /// Generate a thumbnail for a single source file.
    ///
    /// The output directory must already exist.
    pub fn generate(&self, path: &Path) -> Result<ThumbnailReport, ThumbnailError> {
        let original_bytes = fs::metadata(path)
            .map_err(|e| ThumbnailError::io(path, e))?
            .len();

        // The reader owns the file handle and is consumed by decode(), so the
        // file is closed before any encoding starts.
        let decoded = ImageReader::open(path)
            .map_err(|e| ThumbnailError::io(path, e))?
            .with_guessed_format()
            .map_err(|e| ThumbnailError::io(path, e))?
            .decode()
            .map_err(|e| ThumbnailError::Decode {
                message: e.to_string(),
            })?;

        let original_dimensions = ImageDimensions::new(decoded.width(), decoded.height());

        let resized = resize_with_aspect_ratio(&normalize_color(decoded), self.scale);
        let thumbnail_dimensions = ImageDimensions::new(resized.width(), resized.height());

        let compressed = self.compressor.compress(&resized, &self.settings)?;

        let output_path = self.output_path_for(path);
        fs::write(&output_path, &compressed.data)
            .map_err(|e| ThumbnailError::io(&output_path, e))?;

        Ok(ThumbnailReport {
            name: file_name(path),
            output_path,
            original_dimensions,
            thumbnail_dimensions,
            original_bytes,
            final_bytes: compressed.len() as u64,
            quality: compressed.quality,
            within_budget: compressed.within_budget,
        })
    }

    /// Generate thumbnails for every picture in the source directory.
    ///
    /// Creates the output directory if needed. Only a missing or unreadable
    /// source directory fails the whole batch.
    pub fn generate_all(&self) -> Result<BatchSummary, InventoryError> {
        let files = ImageInventory::new(&self.source_dir).scan()?;

        fs::create_dir_all(&self.output_dir).map_err(|source| InventoryError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut summary = BatchSummary::default();

        for path in files {
            let name = file_name(&path);
            let result = self.generate(&path);

            match &result {
                Ok(report) => info!(
                    file = %name,
                    original = %report.original_dimensions,
                    thumbnail = %report.thumbnail_dimensions,
                    quality = report.quality,
                    bytes = report.final_bytes,
                    "Generated thumbnail"
                ),
                Err(e) => warn!(file = %name, error = %e, "Thumbnail generation failed"),
            }

            summary.entries.push(BatchEntry { name, result });
        }

        Ok(summary)
    }

    /// Thumbnail path for a source file: `<output_dir>/<stem>.jpg`.
    pub fn output_path_for(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.output_dir.join(format!("{}.jpg", stem))
    }
}
