//! Embedded static assets via rust-embed.
//!
//! The `static/` directory (upload form and API docs page) is baked into the
//! binary at compile time and served with a Content-Type guessed from the
//! file extension.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Static assets compiled from the static/ directory.
///
/// The `folder` path is resolved relative to the crate root at compile time.
#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

/// GET /UploadForm.html
pub async fn upload_form() -> Response {
    serve_asset("UploadForm.html")
}

/// GET /docs
pub async fn docs_page() -> Response {
    serve_asset("docs.html")
}

/// Serve one embedded asset, or 404 if it was not embedded
fn serve_asset(path: &str) -> Response {
    match StaticAssets::get(path) {
        Some(file) => serve_file(path, &file.data),
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}

/// Build an HTTP response with the correct Content-Type for the given file path.
fn serve_file(path: &str, data: &[u8]) -> Response {
    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    let mut response = Response::new(Body::from(data.to_vec()));
    if let Ok(value) = mime.parse() {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_are_embedded() {
        assert!(StaticAssets::get("UploadForm.html").is_some());
        assert!(StaticAssets::get("docs.html").is_some());
    }

    #[tokio::test]
    async fn test_upload_form_is_html_posting_to_write() {
        let resp = upload_form().await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/html");

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(r#"action="/write""#));
        assert!(html.contains(r#"name="note_name""#));
        assert!(html.contains(r#"name="note""#));
    }

    #[test]
    fn test_missing_asset_is_404() {
        assert_eq!(serve_asset("nope.html").status(), StatusCode::NOT_FOUND);
    }
}
