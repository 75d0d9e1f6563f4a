//! HTTP server layer.
//!
//! Static pages and assets are read straight from the site root on every
//! request; nothing is cached in memory.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │   GET /  /essays  /scripts/{f}  /assets/pictures/{f}  ...       │
//! │                                                                 │
//! │  ┌──────────────────────────┐  ┌──────────────────────────────┐ │
//! │  │        handlers          │  │           routes             │ │
//! │  │ (file lookup, errors)    │  │ (mounts, pages, CORS, trace) │ │
//! │  └──────────────────────────┘  └──────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    asset_handler, health_handler, page_handler, validate_filename, ErrorResponse,
    HealthResponse, PageFile, StaticFiles,
};
pub use routes::{
    create_router, AssetMount, PageRoute, RouterConfig, ASSET_MOUNTS, PAGES, VIEWS_DIR,
};
