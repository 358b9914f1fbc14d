use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use actix_web::{web, HttpRequest, HttpResponse};

use tokio::fs;

const NOT_FOUND_BODY: &str =
    "<h1>404 - Page Not Found</h1><p>The page you're looking for doesn't exist.</p>";

/// Root directory of the public site assets, shared as app data
pub struct PublicDir(pub PathBuf);

/// A request path mapped onto the filesystem
#[derive(Debug, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub path: PathBuf,
    pub content_type: &'static str,
}

/// Map a request path to a file under the public directory.
///
/// The root path resolves to the index document. Paths already inside the
/// public subtree pass through unchanged; anything else is taken relative
/// to the public directory, with the `.html` extension appended when the
/// path carries none.
pub fn resolve(root: &Path, request_path: &str) -> ResolvedAsset {
    let path = request_path.split('?').next().unwrap_or_default();
    let relative = path.trim_start_matches('/');

    let file = if relative.is_empty() {
        root.join("index.html")
    } else if Path::new(relative).starts_with(root) {
        PathBuf::from(relative)
    } else {
        let mut file = root.join(relative);
        if file.extension().is_none() {
            file.set_extension("html");
        }
        file
    };

    let content_type = content_type_for(file.extension().and_then(|ext| ext.to_str()));

    ResolvedAsset {
        path: file,
        content_type,
    }
}

fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

/// Resolve and serve a static asset request
#[tracing::instrument(
    name = "Serve static asset",
    skip(req, public_dir),
    fields(path = %req.path())
)]
pub async fn serve(req: HttpRequest, public_dir: web::Data<PublicDir>) -> HttpResponse {
    // Parent components never resolve to a served asset
    if req.path().contains("..") {
        return not_found();
    }

    let asset = resolve(&public_dir.0, req.path());

    match fs::read(&asset.path).await {
        Ok(content) => HttpResponse::Ok()
            .content_type(asset.content_type)
            .body(content),
        Err(e) if e.kind() == ErrorKind::NotFound => not_found(),
        Err(e) => {
            tracing::error!("failed to read asset {}: {}", asset.path.display(), e);
            HttpResponse::InternalServerError()
                .content_type("text/plain")
                .body(format!(
                    "Sorry, check with the site admin for error: {}",
                    e.kind()
                ))
        }
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html")
        .body(NOT_FOUND_BODY)
}
