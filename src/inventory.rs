//! Picture directory inventory.
//!
//! Lists the image files in a directory and reports their dimensions. The
//! extension filter is a literal, case-sensitive set: `photo.JPG` matches but
//! `photo.Jpg` does not.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use image::ImageReader;

use crate::error::InventoryError;

/// Extensions (without the dot) recognised as images.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "JPG", "JPEG", "PNG",
];

/// Default directory holding full-size pictures.
pub const DEFAULT_PICTURES_DIR: &str = "assets/pictures";

/// Check whether `path` carries one of [`IMAGE_EXTENSIONS`] verbatim.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Formats as `HEIGHTxWIDTH`, the order used by every report.
impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// One file in the inventory with its dimensions or the reason they could
/// not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub dimensions: Result<ImageDimensions, String>,
}

/// A directory of pictures.
#[derive(Debug, Clone)]
pub struct ImageInventory {
    dir: PathBuf,
}

impl ImageInventory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List image files in the directory, sorted by filename.
    ///
    /// Subdirectories and files with other extensions are skipped.
    pub fn scan(&self) -> Result<Vec<PathBuf>, InventoryError> {
        if !self.dir.is_dir() {
            return Err(InventoryError::DirectoryNotFound(self.dir.clone()));
        }

        let io_err = |source| InventoryError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && has_image_extension(&path) {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Scan the directory and lazily read dimensions for each file.
    ///
    /// Each call re-scans, so the sequence can be restarted after the
    /// directory changes. Headers are read one file at a time as the
    /// iterator advances.
    pub fn entries(
        &self,
    ) -> Result<impl ExactSizeIterator<Item = InventoryEntry>, InventoryError> {
        let files = self.scan()?;

        Ok(files.into_iter().map(|path| {
            let dimensions = read_dimensions(&path).map_err(|e| e.to_string());
            InventoryEntry {
                name: file_name(&path),
                path,
                dimensions,
            }
        }))
    }
}

/// Read image dimensions from the file header without decoding pixels.
pub fn read_dimensions(path: &Path) -> image::ImageResult<ImageDimensions> {
    let (width, height) = ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(ImageDimensions::new(width, height))
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
