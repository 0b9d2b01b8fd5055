//! Acceptance rules applied to a classified request line.
//!
//! Classification ([`HttpMethod::from_token`], [`HttpVersion::from_token`]) never
//! fails; this module decides which classified values the server serves and
//! whether the target resource is a well-formed URI reference.

use thiserror::Error;

use crate::http::status::HttpStatus;
use crate::http::{HttpMethod, HttpVersion};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    #[error("method {} is not supported", .0.as_str())]
    UnsupportedMethod(HttpMethod),

    #[error("unknown protocol version")]
    UnknownVersion,

    #[error("target resource {0:?} is not a well-formed URI")]
    MalformedUri(String),
}

impl ValidatorError {
    pub fn into_http_status(self) -> HttpStatus {
        match self {
            ValidatorError::UnsupportedMethod(_) => HttpStatus::BadRequest,
            ValidatorError::UnknownVersion => HttpStatus::BadRequest,
            ValidatorError::MalformedUri(_) => HttpStatus::BadRequest,
        }
    }
}

pub struct Validator;

impl Validator {
    /// Only GET is served, even though POST and HEAD are recognized.
    pub fn validate_method(method: HttpMethod) -> Result<(), ValidatorError> {
        match method {
            HttpMethod::Get => Ok(()),
            other => Err(ValidatorError::UnsupportedMethod(other)),
        }
    }

    pub fn validate_version(version: HttpVersion) -> Result<(), ValidatorError> {
        match version {
            HttpVersion::Unknown => Err(ValidatorError::UnknownVersion),
            _ => Ok(()),
        }
    }

    /// Accepts an absolute URI or a relative reference (RFC 3986).
    ///
    /// Every character must be unreserved, a delimiter, or part of a `%XX`
    /// escape. A reference whose first segment holds a `:` must start with a
    /// valid scheme and is then checked as an absolute URL. Brackets are only
    /// allowed inside the authority of an absolute URL.
    pub fn validate_uri(uri: &str) -> Result<(), ValidatorError> {
        let malformed = || ValidatorError::MalformedUri(uri.to_string());

        if uri.is_empty() || !has_legal_chars(uri) {
            return Err(malformed());
        }

        if uri.matches('#').count() > 1 {
            return Err(malformed());
        }

        let first_delim = uri.find([':', '/', '?', '#']);
        if let Some(i) = first_delim.filter(|&i| uri.as_bytes()[i] == b':') {
            if !is_scheme(&uri[..i]) {
                return Err(malformed());
            }
            return url::Url::parse(uri).map(|_| ()).map_err(|_| malformed());
        }

        if uri.contains(['[', ']']) {
            return Err(malformed());
        }

        Ok(())
    }
}

fn has_legal_chars(uri: &str) -> bool {
    let bytes = uri.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escape = bytes.get(i + 1..i + 3);
                if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                    return false;
                }
                i += 3;
            }
            b if is_uri_char(b) => i += 1,
            _ => return false,
        }
    }
    true
}

fn is_uri_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            // unreserved
            b'-' | b'.' | b'_' | b'~'
            // gen-delims
            | b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@'
            // sub-delims
            | b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
        )
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
