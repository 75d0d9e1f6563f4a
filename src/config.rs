//! Configuration management for the personal site.
//!
//! This module provides a flexible configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `SITE_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Commands
//!
//! - `serve` (default) - Serve the site over HTTP
//! - `thumbnails` - Generate compressed thumbnails for a picture directory
//! - `analyze` - Print the dimensions of every picture in a directory
//!
//! # Environment Variables
//!
//! - `SITE_HOST` - Server bind address (default: 0.0.0.0)
//! - `SITE_PORT` - Server port (default: 8000)
//! - `SITE_ROOT` - Directory holding `views/`, `assets/`, `scripts/`, `styles/` (default: .)
//! - `SITE_CACHE_MAX_AGE` - HTTP cache max-age seconds (default: 3600)
//! - `SITE_CORS_ORIGINS` - Comma-separated allowed origins (default: any)
//! - `SITE_THUMB_TARGET_BYTES` - Thumbnail byte budget (default: 256000)
//! - `SITE_THUMB_SCALE` - Thumbnail linear scale (default: 0.25)
//! - `SITE_THUMB_QUALITY` - Starting JPEG quality (default: 85)
//! - `SITE_THUMB_QUALITY_STEP` - Quality decrement (default: 5)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::inventory::DEFAULT_PICTURES_DIR;
use crate::thumbnail::{
    CompressionSettings, ScaleFactor, DEFAULT_JPEG_QUALITY, DEFAULT_QUALITY_STEP,
    DEFAULT_SCALE_FACTOR, DEFAULT_TARGET_BYTES, DEFAULT_THUMBNAILS_DIR, MAX_JPEG_QUALITY,
    QUALITY_FLOOR,
};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default site root.
pub const DEFAULT_ROOT: &str = ".";

/// Default HTTP cache max-age in seconds (1 hour).
pub const DEFAULT_CACHE_MAX_AGE: u32 = 3600;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Personal site - static pages, pictures and documents over HTTP.
///
/// Runs the web server when invoked without a subcommand.
#[derive(Parser, Debug, Clone)]
#[command(name = "personal-site")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub serve: ServeConfig,
}

impl Cli {
    /// Resolve the command to run, falling back to `serve`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve(self.serve))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the site over HTTP
    Serve(ServeConfig),

    /// Generate compressed thumbnails for a picture directory
    Thumbnails(ThumbnailsConfig),

    /// Print HEIGHTxWIDTH for every picture in a directory
    Analyze(AnalyzeConfig),
}

// =============================================================================
// Serve
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "SITE_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "SITE_PORT")]
    pub port: u16,

    /// Site root directory containing views/, assets/, scripts/ and styles/.
    #[arg(long, default_value = DEFAULT_ROOT, env = "SITE_ROOT")]
    pub root: PathBuf,

    /// HTTP Cache-Control max-age in seconds.
    #[arg(long, default_value_t = DEFAULT_CACHE_MAX_AGE, env = "SITE_CACHE_MAX_AGE")]
    pub cache_max_age: u32,

    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "SITE_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.root.is_dir() {
            return Err(format!(
                "Site root '{}' is not a directory. Set --root or SITE_ROOT",
                self.root.display()
            ));
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Thumbnails
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct ThumbnailsConfig {
    /// Directory of full-size pictures.
    #[arg(long, default_value = DEFAULT_PICTURES_DIR)]
    pub source: PathBuf,

    /// Directory thumbnails are written to (created if missing).
    #[arg(long, default_value = DEFAULT_THUMBNAILS_DIR)]
    pub output: PathBuf,

    /// Maximum thumbnail size in bytes.
    #[arg(long, default_value_t = DEFAULT_TARGET_BYTES, env = "SITE_THUMB_TARGET_BYTES")]
    pub target_bytes: usize,

    /// Linear scale applied to width and height (0 < scale <= 1).
    #[arg(long, default_value_t = DEFAULT_SCALE_FACTOR, env = "SITE_THUMB_SCALE")]
    pub scale: f64,

    /// JPEG quality of the first attempt.
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, env = "SITE_THUMB_QUALITY")]
    pub quality: u8,

    /// Quality decrement between attempts.
    #[arg(long, default_value_t = DEFAULT_QUALITY_STEP, env = "SITE_THUMB_QUALITY_STEP")]
    pub quality_step: u8,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl ThumbnailsConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if ScaleFactor::new(self.scale).is_none() {
            return Err(format!("scale must be in (0, 1], got {}", self.scale));
        }

        if self.quality <= QUALITY_FLOOR || self.quality > MAX_JPEG_QUALITY {
            return Err(format!(
                "quality must be between {} and {}",
                QUALITY_FLOOR + 1,
                MAX_JPEG_QUALITY
            ));
        }

        if self.quality_step == 0 {
            return Err("quality_step must be greater than 0".to_string());
        }

        if self.target_bytes == 0 {
            return Err("target_bytes must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Scale factor, falling back to the default when out of range.
    pub fn scale_factor(&self) -> ScaleFactor {
        ScaleFactor::new(self.scale).unwrap_or_default()
    }

    pub fn compression_settings(&self) -> CompressionSettings {
        CompressionSettings::new(self.target_bytes, self.quality, self.quality_step)
    }
}

// =============================================================================
// Analyze
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct AnalyzeConfig {
    /// Directory of pictures to inspect.
    #[arg(long, default_value = DEFAULT_PICTURES_DIR)]
    pub dir: PathBuf,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

// =============================================================================
// Tests
// =============================================================================
