//! HTTP integration tests for page and asset routes.
//!
//! Tests verify:
//! - Each named page maps to its views/ file
//! - Each asset mount serves files from its own directory only
//! - Content-Type, Cache-Control and conditional request handling
//! - Traversal attempts and missing files produce JSON errors

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};

use personal_site::{create_router, RouterConfig};

use super::test_utils::{
    body_bytes, body_json, get, is_valid_jpeg, send, TestSite, INDEX_HTML, MAIN_JS, SITE_CSS,
};

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_index_page() {
    let site = TestSite::new();
    let response = get(site.router(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = body_bytes(response).await;
    assert_eq!(&body[..], INDEX_HTML.as_bytes());
}

#[tokio::test]
async fn test_named_pages() {
    let site = TestSite::new();

    for page in ["essays", "photography", "videos", "hobbies"] {
        let response = get(site.router(), &format!("/{}", page)).await;
        assert_eq!(response.status(), StatusCode::OK, "page {}", page);

        let body = body_bytes(response).await;
        assert!(String::from_utf8_lossy(&body).contains(page));
    }
}

#[tokio::test]
async fn test_missing_page_file_is_404() {
    let site = TestSite::new();
    std::fs::remove_file(site.root().join("views/videos.html")).unwrap();

    let response = get(site.router(), "/videos").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error = body_json(response).await;
    assert_eq!(error["error"], "not_found");
    assert_eq!(error["status"], 404);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let site = TestSite::new();
    let response = get(site.router(), "/about").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Assets
// =============================================================================

#[tokio::test]
async fn test_script_and_style() {
    let site = TestSite::new();

    let response = get(site.router(), "/scripts/main.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().contains("javascript"));
    assert_eq!(&body_bytes(response).await[..], MAIN_JS.as_bytes());

    let response = get(site.router(), "/styles/site.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/css"));
    assert_eq!(&body_bytes(response).await[..], SITE_CSS.as_bytes());
}

#[tokio::test]
async fn test_pictures_and_thumbnails() {
    let site = TestSite::new();

    for uri in ["/assets/pictures/beach.jpg", "/assets/thumbnails/beach.jpg"] {
        let response = get(site.router(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/jpeg"
        );
        assert!(is_valid_jpeg(&body_bytes(response).await));
    }
}

#[tokio::test]
async fn test_pdf() {
    let site = TestSite::new();
    let response = get(site.router(), "/assets/pdf/cv.pdf").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert!(body_bytes(response).await.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_mounts_do_not_share_files() {
    let site = TestSite::new();

    // main.js lives under scripts/, not styles/
    let response = get(site.router(), "/styles/main.js").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_asset_is_json_404() {
    let site = TestSite::new();
    let response = get(site.router(), "/assets/pictures/nope.jpg").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = body_json(response).await;
    assert_eq!(error["error"], "not_found");
    assert!(error["message"].as_str().unwrap().contains("nope.jpg"));
}

#[tokio::test]
async fn test_directory_name_is_not_served() {
    let site = TestSite::new();
    std::fs::create_dir(site.root().join("scripts/vendor")).unwrap();

    let response = get(site.router(), "/scripts/vendor").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_nested_path_does_not_match_route() {
    let site = TestSite::new();
    let response = get(site.router(), "/scripts/vendor/lib.js").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_encoded_traversal_rejected() {
    let site = TestSite::new();

    for uri in [
        "/scripts/..%2Fsecret.txt",
        "/scripts/..%2F..%2Fsecret.txt",
        "/styles/%2E%2E",
        "/assets/pdf/..%5Csecret.txt",
    ] {
        let response = get(site.router(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let error = body_json(response).await;
        assert_eq!(error["error"], "invalid_path");
    }
}

// =============================================================================
// Headers and Methods
// =============================================================================

#[tokio::test]
async fn test_cache_control_header() {
    let site = TestSite::new();
    let router = create_router(
        RouterConfig::new(site.root())
            .with_cache_max_age(120)
            .with_tracing(false),
    );

    let response = get(router, "/styles/site.css").await;
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=120"
    );
}

#[tokio::test]
async fn test_head_request_has_no_body() {
    let site = TestSite::new();
    let request = Request::builder()
        .method(Method::HEAD)
        .uri("/scripts/main.js")
        .body(Body::empty())
        .unwrap();

    let response = send(site.router(), request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_conditional_request_not_modified() {
    let site = TestSite::new();

    let response = get(site.router(), "/styles/site.css").await;
    let last_modified = response
        .headers()
        .get(header::LAST_MODIFIED)
        .expect("file responses carry Last-Modified")
        .clone();

    let request = Request::get("/styles/site.css")
        .header(header::IF_MODIFIED_SINCE, last_modified)
        .body(Body::empty())
        .unwrap();
    let response = send(site.router(), request).await;
    assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn test_post_not_allowed() {
    let site = TestSite::new();
    let request = Request::post("/scripts/main.js")
        .body(Body::empty())
        .unwrap();

    let response = send(site.router(), request).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let site = TestSite::new();
    let response = get(site.router(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let health = body_json(response).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_cors_any_origin() {
    let site = TestSite::new();
    let request = Request::get("/styles/site.css")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .unwrap();

    let response = send(site.router(), request).await;
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
