use std::time::SystemTime;

use crate::config::config;
use crate::http::response::{HttpResponse, ResponseHeader};

/// Headers every response carries. Connections are never reused.
pub fn apply(res: &mut HttpResponse) {
    res.set_header(ResponseHeader::Server, &config().server_name);
    res.set_header(ResponseHeader::Date, &httpdate::fmt_http_date(SystemTime::now()));
    res.set_header(ResponseHeader::Connection, "close");

    if !res.headers.contains("Content-Length") {
        res.set_header(ResponseHeader::ContentLength, &res.body.len().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::status::HttpStatus;

    #[test]
    fn adds_common_headers() {
        let mut res = HttpResponse::new(HttpStatus::Ok);
        apply(&mut res);

        assert_eq!(res.headers.get("Connection"), Some("close"));
        assert_eq!(res.headers.get("Content-Length"), Some("0"));
        assert!(res.headers.get("Server").is_some());

        let date = res.headers.get("Date").unwrap();
        assert!(httpdate::parse_http_date(date).is_ok());
    }
}
