use crate::http::headers::HttpHeaders;
use crate::http::parser::RequestParser;
use crate::http::{HttpMethod, HttpVersion};

/// Name of the synthetic header holding the target resource.
pub const URI_HEADER: &str = "URI";

/// A request that went through [`RequestParser`] successfully.
///
/// There is no way to build one outside of [`RequestBuilder::build`], and
/// nothing can change it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: HttpMethod,
    uri: String,
    http_version: HttpVersion,
    headers: HttpHeaders,
    body: Vec<String>,
}

impl HttpRequest {
    /// Parses a fully buffered request, `None` if it is rejected.
    pub fn parse(raw: &str) -> Option<HttpRequest> {
        RequestParser::parse(raw).ok()
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn http_version(&self) -> HttpVersion {
        self.http_version
    }

    /// Header table, including the synthetic [`URI_HEADER`] entry.
    pub fn headers(&self) -> &HttpHeaders {
        &self.headers
    }

    /// Lines after the blank-line separator, unvalidated.
    pub fn body(&self) -> &[String] {
        &self.body
    }
}

/// Accumulates the parts of a request while it is being parsed.
///
/// Only the parser holds one; it is consumed by [`build`](Self::build) once
/// every stage has succeeded.
#[derive(Debug)]
pub(crate) struct RequestBuilder {
    method: HttpMethod,
    uri: String,
    http_version: HttpVersion,
    headers: HttpHeaders,
    body: Vec<String>,
}

impl RequestBuilder {
    pub(crate) fn new() -> Self {
        Self {
            method: HttpMethod::Unknown,
            uri: String::new(),
            http_version: HttpVersion::Unknown,
            headers: HttpHeaders::new(),
            body: Vec::new(),
        }
    }

    pub(crate) fn request_line(&mut self, method: HttpMethod, uri: &str, version: HttpVersion) {
        self.method = method;
        self.uri = uri.to_string();
        self.http_version = version;
        self.headers.set_raw(URI_HEADER, uri);
    }

    pub(crate) fn header(&mut self, name: &str, value: &str) {
        self.headers.set_raw(name, value);
    }

    pub(crate) fn body(&mut self, lines: &[&str]) {
        self.body = lines.iter().map(|l| l.to_string()).collect();
    }

    pub(crate) fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            uri: self.uri,
            http_version: self.http_version,
            headers: self.headers,
            body: self.body,
        }
    }
}
