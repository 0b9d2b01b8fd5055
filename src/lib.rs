//! A small GET-only HTTP server that consults a table of redirection rules
//! before serving static files.
//!
//! The interesting part is [`http::parser`], which turns a fully buffered
//! request into an immutable [`http::request::HttpRequest`] or rejects it.

pub mod config;
pub mod handler;
pub mod http;
pub mod net;
pub mod redirection;
