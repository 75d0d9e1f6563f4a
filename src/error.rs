use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing a single thumbnail
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// Reading the source or writing the output failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not a decodable image
    #[error("Failed to decode image: {message}")]
    Decode { message: String },

    /// The encoder rejected an attempt at a given quality
    #[error("Failed to encode at quality {quality}: {message}")]
    Encode { quality: u8, message: String },

    /// No encoding attempt ever produced output
    #[error(
        "No encoding produced for {width}x{height} image starting at quality {initial_quality}"
    )]
    EncodeFailed {
        width: u32,
        height: u32,
        initial_quality: u8,
    },
}

impl ThumbnailError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ThumbnailError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while scanning a picture directory
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The directory to scan does not exist
    #[error("Directory '{}' not found", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Listing the directory failed
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors returned by the static file routes (mapped to HTTP responses)
#[derive(Debug, Error)]
pub enum SiteError {
    /// Requested file does not exist under its mount
    #[error("File not found: {0}")]
    NotFound(String),

    /// Filename is not a single plain path component
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Filesystem error while looking up the file
    #[error("I/O error: {0}")]
    Io(String),
}
