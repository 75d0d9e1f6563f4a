//! HTTP request handlers for the site.
//!
//! # Endpoints
//!
//! - `GET /{mount}/{filename}` - Serve a file from one of the asset directories
//! - `GET /`, `/essays`, ... - Serve a fixed HTML page from `views/`
//! - `GET /health` - Health check endpoint

use std::io::ErrorKind;
use std::path::{Component, Path as FsPath, PathBuf};

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{debug, error, warn};

use crate::error::SiteError;

// =============================================================================
// Handler State
// =============================================================================

/// A directory whose files are served by name.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    /// Directory on disk
    pub dir: PathBuf,

    /// Cache-Control max-age in seconds
    pub cache_max_age: u32,
}

impl StaticFiles {
    pub fn new(dir: impl Into<PathBuf>, cache_max_age: u32) -> Self {
        Self {
            dir: dir.into(),
            cache_max_age,
        }
    }

    /// Serve `name` from this directory.
    ///
    /// `name` must already be validated as a single path component.
    /// Content-Type, conditional requests and ranges are handled by
    /// [`ServeFile`].
    pub async fn serve(&self, name: &str, request: Request) -> Result<Response, SiteError> {
        let path = self.dir.join(name);

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(SiteError::NotFound(name.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SiteError::NotFound(name.to_string()))
            }
            Err(e) => return Err(SiteError::Io(e.to_string())),
        }

        let response = match ServeFile::new(&path).oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let mut response = response.map(Body::new);
        if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", self.cache_max_age))
        {
            response.headers_mut().insert(header::CACHE_CONTROL, value);
        }

        debug!(path = %path.display(), status = response.status().as_u16(), "Served file");
        Ok(response)
    }
}

/// A named page backed by a single HTML file.
#[derive(Debug, Clone)]
pub struct PageFile {
    pub files: StaticFiles,
    pub file: &'static str,
}

impl PageFile {
    pub fn new(files: StaticFiles, file: &'static str) -> Self {
        Self { files, file }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "not_found", "invalid_path")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code (included for convenience)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: None,
        }
    }

    /// Create a new error response with status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: Some(status.as_u16()),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert SiteError to HTTP response.
///
/// - 5xx errors are logged at ERROR level
/// - 404s are logged at DEBUG level (common and expected)
/// - other 4xx errors are logged at WARN level
impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            SiteError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            SiteError::InvalidPath(_) => (StatusCode::BAD_REQUEST, "invalid_path"),
            SiteError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
        };
        let message = self.to_string();

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                message
            );
        } else if status == StatusCode::NOT_FOUND {
            debug!(
                error_type = error_type,
                status = status.as_u16(),
                "Resource not found: {}",
                message
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                message
            );
        }

        let error_response = ErrorResponse::with_status(error_type, message, status);

        (status, Json(error_response)).into_response()
    }
}

// =============================================================================
// Path Validation
// =============================================================================

/// Accept only a single plain filename.
///
/// Rejects empty names, `.` and `..`, and anything containing a path
/// separator (axum has already percent-decoded the segment, so `%2F` shows
/// up here as `/`).
pub fn validate_filename(name: &str) -> Result<(), SiteError> {
    let mut components = FsPath::new(name).components();

    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(SiteError::InvalidPath(name.to_string())),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle asset requests.
///
/// # Endpoint
///
/// `GET /{mount}/{filename}` where mount is one of `scripts`,
/// `assets/pictures`, `assets/pdf`, `assets/thumbnails`, `styles`.
///
/// # Response
///
/// - `200 OK`: File contents with a Content-Type guessed from the extension
/// - `304 Not Modified`: Conditional request matched
/// - `400 Bad Request`: Filename is not a plain file name
/// - `404 Not Found`: No such file in the mount directory
pub async fn asset_handler(
    State(files): State<StaticFiles>,
    Path(filename): Path<String>,
    request: Request,
) -> Result<Response, SiteError> {
    validate_filename(&filename)?;
    files.serve(&filename, request).await
}

/// Handle requests for a fixed HTML page.
pub async fn page_handler(
    State(page): State<PageFile>,
    request: Request,
) -> Result<Response, SiteError> {
    page.files.serve(page.file, request).await
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
