//! Serving the prebuilt UI bundle with a single-page-application fallback.

use super::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path, PathBuf};

const INDEX_FILE: &str = "index.html";

/// Fallback for every path no API route matched.
///
/// A GET or HEAD for an existing file in the bundle returns that file; any
/// other GET or HEAD returns `index.html`. Other methods, paths that try to
/// leave the bundle, and a missing bundle are 404.
pub(crate) async fn serve_static(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::NOT_FOUND.into_response();
    }

    let Some(relative) = bundle_relative_path(uri.path()) else {
        tracing::debug!(path = %uri.path(), "Rejected static path");
        return StatusCode::NOT_FOUND.into_response();
    };

    let candidate = state.static_dir.join(&relative);
    let target = if !relative.as_os_str().is_empty() && is_file(&candidate).await {
        candidate
    } else {
        state.static_dir.join(INDEX_FILE)
    };

    match tokio::fs::read(&target).await {
        Ok(bytes) => {
            let mut resp = if method == Method::HEAD {
                Response::new(Body::empty())
            } else {
                Response::new(Body::from(bytes))
            };
            resp.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(content_type(&target)),
            );
            resp
        }
        Err(e) => {
            tracing::debug!(path = %target.display(), error = %e, "Static bundle file unavailable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Decode a request path into a path relative to the bundle root.
///
/// Returns `None` if the path contains any component other than a plain
/// name. A path that does not decode to UTF-8 names no bundle file and maps
/// to the root, so it gets `index.html`.
fn bundle_relative_path(request_path: &str) -> Option<PathBuf> {
    let Ok(decoded) = urlencoding::decode(request_path) else {
        return Some(PathBuf::new());
    };
    if decoded.contains('\\') || decoded.contains('\0') {
        return None;
    }

    let mut relative = PathBuf::new();
    for component in Path::new(decoded.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(relative)
}

fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") | Some("map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
