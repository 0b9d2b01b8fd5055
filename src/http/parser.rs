use thiserror::Error;

use crate::http::request::{HttpRequest, RequestBuilder};
use crate::http::status::HttpStatus;
use crate::http::validator::{Validator, ValidatorError};
use crate::http::{HttpMethod, HttpVersion};

const LINE_SEPARATOR: &str = "\r\n";

/// Reasons a raw request is rejected.
///
/// Callers only need to know that parsing failed; the variants are kept for
/// logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error("request has {0} lines, at least 3 are required")]
    TooFewLines(usize),

    #[error("request line has {0} tokens, expected 3")]
    MalformedRequestLine(usize),

    #[error(transparent)]
    Invalid(#[from] ValidatorError),

    #[error("header line {0:?} has no ':' separator")]
    MalformedHeader(String),

    #[error("no blank line between headers and body")]
    MissingBlankLine,
}

impl ParserError {
    pub fn into_http_status(self) -> HttpStatus {
        match self {
            ParserError::Invalid(err) => err.into_http_status(),
            _ => HttpStatus::BadRequest,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum RequestParserState {
    Start,
    RequestLineParsed,
    HeadersLoaded,
    BlankLineValidated,
    Complete,
}

/// Single-pass parser over a fully buffered request.
///
/// Each call owns a fresh [`RequestBuilder`]; nothing is shared between calls,
/// and the builder is only turned into an [`HttpRequest`] once every state has
/// been passed.
pub struct RequestParser<'a> {
    lines: Vec<&'a str>,
    // index of the first blank line after the request line, if any
    blank_line: Option<usize>,
    state: RequestParserState,
    builder: RequestBuilder,
}

impl<'a> RequestParser<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            lines: raw.split(LINE_SEPARATOR).collect(),
            blank_line: None,
            state: RequestParserState::Start,
            builder: RequestBuilder::new(),
        }
    }

    pub fn parse(raw: &str) -> Result<HttpRequest, ParserError> {
        let result = RequestParser::new(raw).run();
        if let Err(err) = &result {
            tracing::debug!(error = %err, "rejected request");
        }
        result
    }

    fn run(mut self) -> Result<HttpRequest, ParserError> {
        loop {
            match self.state {
                RequestParserState::Start => {
                    if self.lines.len() < 3 {
                        return Err(ParserError::TooFewLines(self.lines.len()));
                    }
                    self.parse_request_line()?;
                    self.state = RequestParserState::RequestLineParsed;
                }
                RequestParserState::RequestLineParsed => {
                    self.load_headers()?;
                    self.state = RequestParserState::HeadersLoaded;
                }
                RequestParserState::HeadersLoaded => {
                    if self.blank_line.is_none() {
                        return Err(ParserError::MissingBlankLine);
                    }
                    self.state = RequestParserState::BlankLineValidated;
                }
                RequestParserState::BlankLineValidated => {
                    self.load_body();
                    self.state = RequestParserState::Complete;
                }
                RequestParserState::Complete => return Ok(self.builder.build()),
            }
        }
    }

    // METHOD SP TARGET SP VERSION
    fn parse_request_line(&mut self) -> Result<(), ParserError> {
        let tokens: Vec<&str> = self.lines[0].split(' ').collect();
        let &[method, uri, version] = tokens.as_slice() else {
            return Err(ParserError::MalformedRequestLine(tokens.len()));
        };

        let method = HttpMethod::from_token(method);
        Validator::validate_method(method)?;

        let version = HttpVersion::from_token(version);
        Validator::validate_version(version)?;
        Validator::validate_uri(uri)?;

        self.builder.request_line(method, uri, version);
        Ok(())
    }

    fn load_headers(&mut self) -> Result<(), ParserError> {
        let end = self.lines[1..]
            .iter()
            .position(|line| line.is_empty())
            .map(|i| i + 1);
        self.blank_line = end;

        let header_lines = &self.lines[1..end.unwrap_or(self.lines.len())];
        for line in header_lines {
            let Some((name, value)) = line.split_once(':') else {
                return Err(ParserError::MalformedHeader(line.to_string()));
            };
            self.builder.header(name.trim(), value.trim());
        }

        Ok(())
    }

    fn load_body(&mut self) {
        let Some(blank) = self.blank_line else {
            return;
        };
        let mut body = &self.lines[blank + 1..];
        // a CRLF terminating the last body line is not a line of its own
        if let [rest @ .., ""] = body {
            body = rest;
        }
        self.builder.body(body);
    }
}
