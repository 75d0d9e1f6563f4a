//! Router configuration for the site.
//!
//! # Route Structure
//!
//! ```text
//! /health                          - Health check
//! /                                - views/index.html
//! /essays, /photography, ...       - views/<page>.html
//! /scripts/{filename}              - scripts/<filename>
//! /assets/pictures/{filename}      - assets/pictures/<filename>
//! /assets/pdf/{filename}           - assets/pdf/<filename>
//! /assets/thumbnails/{filename}    - assets/thumbnails/<filename>
//! /styles/{filename}               - styles/<filename>
//! ```
//!
//! # Example
//!
//! ```ignore
//! use personal_site::server::routes::{create_router, RouterConfig};
//!
//! let router = create_router(RouterConfig::new("/srv/site"));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::path::PathBuf;
use std::time::Duration;

use axum::{routing::get, Router};
use http::header::{CONTENT_TYPE, IF_MODIFIED_SINCE, RANGE};
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{asset_handler, health_handler, page_handler, PageFile, StaticFiles};

// =============================================================================
// Site Layout
// =============================================================================

/// A URL prefix whose single trailing segment names a file in `dir`.
#[derive(Debug, Clone, Copy)]
pub struct AssetMount {
    pub prefix: &'static str,
    pub dir: &'static str,
}

/// A fixed route answered with one HTML file from [`VIEWS_DIR`].
#[derive(Debug, Clone, Copy)]
pub struct PageRoute {
    pub path: &'static str,
    pub file: &'static str,
}

/// Directory (under the site root) holding the HTML pages.
pub const VIEWS_DIR: &str = "views";

pub const ASSET_MOUNTS: &[AssetMount] = &[
    AssetMount {
        prefix: "/scripts",
        dir: "scripts",
    },
    AssetMount {
        prefix: "/assets/pictures",
        dir: "assets/pictures",
    },
    AssetMount {
        prefix: "/assets/pdf",
        dir: "assets/pdf",
    },
    AssetMount {
        prefix: "/assets/thumbnails",
        dir: "assets/thumbnails",
    },
    AssetMount {
        prefix: "/styles",
        dir: "styles",
    },
];

pub const PAGES: &[PageRoute] = &[
    PageRoute {
        path: "/",
        file: "index.html",
    },
    PageRoute {
        path: "/essays",
        file: "essays.html",
    },
    PageRoute {
        path: "/photography",
        file: "photography.html",
    },
    PageRoute {
        path: "/videos",
        file: "videos.html",
    },
    PageRoute {
        path: "/hobbies",
        file: "hobbies.html",
    },
];

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Site root; mounts and views are resolved relative to it
    pub root: PathBuf,

    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Cache-Control max-age in seconds
    pub cache_max_age: u32,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a new router configuration serving files under `root`.
    ///
    /// By default:
    /// - CORS allows any origin
    /// - Cache max-age is 1 hour (3600 seconds)
    /// - Tracing is enabled
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cors_origins: None,
            cache_max_age: 3600,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Allow any CORS origin.
    pub fn with_cors_any_origin(mut self) -> Self {
        self.cors_origins = None;
        self
    }

    /// Set the Cache-Control max-age in seconds.
    pub fn with_cache_max_age(mut self, seconds: u32) -> Self {
        self.cache_max_age = seconds;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// Every asset mount and page gets its own route with the directory it
/// serves baked into the route state, so a request can never reach a file
/// outside the mount it names.
pub fn create_router(config: RouterConfig) -> Router {
    let mut router = Router::new().route("/health", get(health_handler));

    for mount in ASSET_MOUNTS {
        let files = StaticFiles::new(config.root.join(mount.dir), config.cache_max_age);
        router = router.route(
            &format!("{}/{{filename}}", mount.prefix),
            get(asset_handler).with_state(files),
        );
    }

    let views = StaticFiles::new(config.root.join(VIEWS_DIR), config.cache_max_age);
    for page in PAGES {
        router = router.route(
            page.path,
            get(page_handler).with_state(PageFile::new(views.clone(), page.file)),
        );
    }

    let router = router.layer(build_cors_layer(&config));

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, RANGE, IF_MODIFIED_SINCE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => cors,
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
