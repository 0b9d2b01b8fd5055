pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod status;
pub mod validator;

/// HTTP versions a request line may announce.
///
/// Classification is an exact match on the literal token, anything else
/// is [`HttpVersion::Unknown`]. Whether a version is acceptable is decided
/// by the [`validator`], not here.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum HttpVersion {
    V0_9,
    V1_0,
    V1_1,
    Unknown,
}

impl HttpVersion {
    pub fn from_token(token: &str) -> HttpVersion {
        match token {
            "HTTP/1.1" => HttpVersion::V1_1,
            "HTTP/1.0" => HttpVersion::V1_0,
            "HTTP/0.9" => HttpVersion::V0_9,
            _ => HttpVersion::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVersion::V0_9 => "HTTP/0.9",
            HttpVersion::V1_0 => "HTTP/1.0",
            HttpVersion::V1_1 => "HTTP/1.1",
            HttpVersion::Unknown => "UNKNOWN",
        }
    }
}

/// Request methods the server recognizes.
///
/// `Post` and `Head` are known but never accepted, see
/// [`Validator::validate_method`](validator::Validator::validate_method).
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Post,
    Head,
    Unknown,
}

impl HttpMethod {
    /// Case-insensitive, total: unrecognized tokens map to `Unknown`.
    pub fn from_token(token: &str) -> HttpMethod {
        if token.eq_ignore_ascii_case("GET") {
            HttpMethod::Get
        } else if token.eq_ignore_ascii_case("POST") {
            HttpMethod::Post
        } else if token.eq_ignore_ascii_case("HEAD") {
            HttpMethod::Head
        } else {
            HttpMethod::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Head => "HEAD",
            HttpMethod::Unknown => "UNKNOWN",
        }
    }
}
