//! # Personal Site
//!
//! Static website server plus two offline picture utilities.
//!
//! ## Features
//!
//! - **Static serving**: HTML pages, scripts, styles, pictures, PDFs and
//!   thumbnails straight from the filesystem
//! - **Thumbnail generation**: 1/4-scale JPEG thumbnails squeezed under a byte
//!   budget by a downward quality search
//! - **Picture inventory**: HEIGHTxWIDTH report for a picture directory
//!
//! ## Architecture
//!
//! - [`server`] - Axum router and file handlers
//! - [`thumbnail`] - Resize, quality search and batch driver
//! - [`inventory`] - Picture directory scanning
//! - [`report`] - Console lines for the offline commands
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use personal_site::{create_router, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = create_router(RouterConfig::new("."));
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod inventory;
pub mod report;
pub mod server;
pub mod thumbnail;

// Re-export commonly used types
pub use config::{AnalyzeConfig, Cli, Command, ServeConfig, ThumbnailsConfig};
pub use error::{InventoryError, SiteError, ThumbnailError};
pub use inventory::{
    has_image_extension, read_dimensions, ImageDimensions, ImageInventory, InventoryEntry,
    IMAGE_EXTENSIONS,
};
pub use server::{
    asset_handler, create_router, health_handler, page_handler, ErrorResponse, HealthResponse,
    RouterConfig,
};
pub use thumbnail::{
    compress_to_target_size, normalize_color, resize_with_aspect_ratio, scaled_dimensions,
    BatchSummary, CompressionResult, CompressionSettings, JpegThumbnailEncoder, LossyEncoder,
    ScaleFactor, ThumbnailCompressor, ThumbnailGenerator, ThumbnailReport, QUALITY_FLOOR,
};
