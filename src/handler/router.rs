use crate::handler::responses;
use crate::handler::static_files;
use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;
use crate::redirection::RedirectionTable;

pub fn route(req: &HttpRequest, redirections: &RedirectionTable) -> HttpResponse {
    if let Some(destination) = redirections.lookup(req.uri()) {
        tracing::info!(uri = req.uri(), destination, "redirecting");
        return responses::redirect(&location(destination));
    }

    static_files::serve(req.uri())
}

fn location(destination: &str) -> String {
    if url::Url::parse(destination).is_ok() || destination.starts_with('/') {
        destination.to_string()
    } else {
        format!("/{destination}")
    }
}
