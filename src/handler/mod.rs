mod middleware;
mod responses;
mod router;
mod static_files;

use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;
use crate::http::status::HttpStatus;
use crate::redirection::RedirectionTable;

pub fn handle_request(req: &HttpRequest, redirections: &RedirectionTable) -> HttpResponse {
    let mut res = router::route(req, redirections);
    middleware::apply(&mut res);
    res
}

pub fn handle_error(err: HttpStatus) -> HttpResponse {
    let mut res = responses::any_error(err);
    middleware::apply(&mut res);
    res
}
