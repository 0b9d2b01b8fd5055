use redirnet::http::request::{HttpRequest, URI_HEADER};
use redirnet::http::{HttpMethod, HttpVersion};

#[test]
fn get_with_host_header() {
    let req = HttpRequest::parse("GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n")
        .expect("request should parse");

    assert_eq!(req.method(), HttpMethod::Get);
    assert_eq!(req.uri(), "/index.html");
    assert_eq!(req.http_version(), HttpVersion::V1_1);
    assert_eq!(req.headers().get("Host"), Some("example.com"));
    assert_eq!(req.headers().get(URI_HEADER), Some("/index.html"));
    assert!(req.body().is_empty());
}

#[test]
fn post_is_rejected() {
    assert!(HttpRequest::parse("POST /x HTTP/1.1\r\nHost: a\r\n\r\n").is_none());
}

#[test]
fn unknown_version_is_rejected() {
    assert!(HttpRequest::parse("GET /x HTTP/9.9\r\nHost: a\r\n\r\n").is_none());
}

#[test]
fn header_without_colon_is_rejected() {
    assert!(HttpRequest::parse("GET /x HTTP/1.1\r\nBadHeaderNoColon\r\n\r\n").is_none());
}

#[test]
fn missing_blank_line_is_rejected() {
    assert!(HttpRequest::parse("GET /x HTTP/1.1\r\nHost: a\r\nBody line").is_none());
}

#[test]
fn body_lines_after_blank_line() {
    let req = HttpRequest::parse("GET /x HTTP/1.1\r\nHost: a\r\n\r\nline1\r\nline2").unwrap();
    assert_eq!(req.body(), ["line1", "line2"]);
}

#[test]
fn lowercase_get_is_accepted() {
    let req = HttpRequest::parse("get /x HTTP/1.0\r\n\r\n\r\n").unwrap();

    assert_eq!(req.method(), HttpMethod::Get);
    assert_eq!(req.http_version(), HttpVersion::V1_0);
    assert_eq!(req.headers().len(), 1);
}

#[test]
fn absolute_target_is_accepted() {
    let req = HttpRequest::parse("GET http://example.com/a?b=c HTTP/1.1\r\n\r\n").unwrap();
    assert_eq!(req.uri(), "http://example.com/a?b=c");
}

#[test]
fn malformed_target_is_rejected() {
    for target in ["/a b", "/%G0", "/a#b#c", "/\u{7f}"] {
        let raw = format!("GET {target} HTTP/1.1\r\nHost: a\r\n\r\n");
        assert!(HttpRequest::parse(&raw).is_none(), "{target:?}");
    }
}

#[test]
fn same_input_parses_identically() {
    let raw = "GET /x HTTP/1.1\r\nHost: a\r\nHost: b\r\n\r\nbody";
    let first = HttpRequest::parse(raw).unwrap();
    let second = HttpRequest::parse(raw).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.headers().get("Host"), Some("b"));
}
