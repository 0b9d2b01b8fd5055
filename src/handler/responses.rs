use crate::http::response::{HttpResponse, ResponseHeader};
use crate::http::status::HttpStatus;

fn page(status: HttpStatus, message: &str) -> HttpResponse {
    let mut res = HttpResponse::new(status);
    let body = format!(
        "<html><body><h1>{} {}</h1><p>{}</p></body></html>",
        status.code(),
        status.reason(),
        message
    );
    res.set_body("text/html", body.into_bytes());
    res
}

pub fn redirect(location: &str) -> HttpResponse {
    let mut res = page(
        HttpStatus::MovedPermanently,
        &format!("The resource has moved to <a href=\"{location}\">{location}</a>."),
    );
    res.set_header(ResponseHeader::Location, location);
    res
}

pub fn bad_request() -> HttpResponse {
    page(HttpStatus::BadRequest, "The request could not be understood.")
}

pub fn forbidden() -> HttpResponse {
    page(HttpStatus::Forbidden, "Access to this resource is denied.")
}

pub fn not_found() -> HttpResponse {
    page(HttpStatus::NotFound, "The requested resource was not found.")
}

pub fn internal_server_error() -> HttpResponse {
    page(HttpStatus::InternalServerError, "The server failed to handle the request.")
}

pub fn any_error(err: HttpStatus) -> HttpResponse {
    match err {
        HttpStatus::BadRequest => bad_request(),
        HttpStatus::Forbidden => forbidden(),
        HttpStatus::NotFound => not_found(),
        HttpStatus::InternalServerError => internal_server_error(),
        other => HttpResponse::new(other),
    }
}
