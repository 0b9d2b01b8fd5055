use crate::http::headers::HttpHeaders;
use crate::http::status::HttpStatus;

pub enum ResponseHeader {
    ContentLength,
    ContentType,
    Connection,
    Date,
    Location,
    Server,
}

#[derive(Debug)]
pub struct HttpResponse {
    pub status: HttpStatus,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: HttpStatus) -> Self {
        Self {
            status,
            headers: HttpHeaders::new(),
            body: Vec::new(),
        }
    }

    pub fn set_header(&mut self, h: ResponseHeader, value: &str) {
        let name = match h {
            ResponseHeader::ContentType => "Content-Type",
            ResponseHeader::ContentLength => "Content-Length",
            ResponseHeader::Connection => "Connection",
            ResponseHeader::Date => "Date",
            ResponseHeader::Location => "Location",
            ResponseHeader::Server => "Server",
        };

        self.headers.set_raw(name, value);
    }

    /// Replaces the body and keeps `Content-Length` in sync with it.
    pub fn set_body(&mut self, content_type: &str, body: Vec<u8>) {
        self.set_header(ResponseHeader::ContentType, content_type);
        self.set_header(ResponseHeader::ContentLength, &body.len().to_string());
        self.body = body;
    }

    pub fn build_headers(&self) -> String {
        // HTTP/1.1 <status> <reason>\r\n
        // <header_name>: <header_value>\r\n
        // ...
        // \r\n
        format!(
            "HTTP/1.1 {} {}\r\n{}\r\n",
            self.status.code(),
            self.status.reason(),
            self.headers.stringify(),
        )
    }
}
