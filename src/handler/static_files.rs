use std::fs::File;
use std::io::ErrorKind::*;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::config;
use crate::handler::responses;
use crate::http::response::HttpResponse;
use crate::http::status::HttpStatus;

pub fn serve(uri: &str) -> HttpResponse {
    serve_from(&config().static_files_root, uri)
}

fn serve_from(root: &Path, uri: &str) -> HttpResponse {
    let Some(full_path) = resolve(root, uri) else {
        return responses::bad_request();
    };
    tracing::debug!(path = %full_path.display(), "serving static file");

    let mut file = match File::open(&full_path) {
        Ok(f) => f,
        Err(err) => match err.kind() {
            NotFound => return responses::not_found(),
            PermissionDenied => return responses::forbidden(),
            _ => {
                tracing::warn!(path = %full_path.display(), error = %err, "failed to open file");
                return responses::internal_server_error();
            }
        },
    };

    let mut body = Vec::new();
    if let Err(err) = file.read_to_end(&mut body) {
        // directories open fine on unix but cannot be read
        if err.kind() == IsADirectory {
            return responses::not_found();
        }
        tracing::warn!(path = %full_path.display(), error = %err, "failed to read file");
        return responses::internal_server_error();
    }

    let mut response = HttpResponse::new(HttpStatus::Ok);
    response.set_body(guess_mime(&full_path), body);
    response
}

/// Maps a target resource onto a file under `root`.
///
/// Query and fragment are dropped, absolute URIs contribute only their path.
/// `None` if the path tries to leave `root`.
fn resolve(root: &Path, uri: &str) -> Option<PathBuf> {
    let path = match url::Url::parse(uri) {
        Ok(url) => url.path().to_string(),
        Err(_) => uri
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let mut full_path = root.to_path_buf();
    for segment in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
        if segment == ".." {
            return None;
        }
        full_path.push(segment);
    }

    if full_path == root {
        full_path.push("index.html");
    }
    Some(full_path)
}

fn guess_mime(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("htm") | Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("txt") => "text/plain",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
