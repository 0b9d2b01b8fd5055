//! Core HTTP server implementation.
//!
//! This module only deals with networking:
//! - accepting TCP connections,
//! - buffering the raw request text from the stream,
//! - writing the serialized response back to the client.
//!
//! Parsing is delegated to [`RequestParser`] and response generation to
//! [`handler`](crate::handler). Each connection carries exactly one request
//! and is closed once the response has been written.
//!
//! ## Request handling flow
//!
//! 1. Accept a TCP connection and spawn a task for it
//! 2. Read until the blank line ending the header section, EOF, the size
//!    limit or the read timeout
//! 3. Parse the buffered text into an [`HttpRequest`](crate::http::request::HttpRequest)
//! 4. Consult the [`RedirectionTable`], then fall back to static files
//! 5. Write the response and close the connection

use async_std::io;
use async_std::net::{TcpListener, TcpStream};
use async_std::prelude::*;
use async_std::task;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use thiserror::Error;
use tracing::Instrument;

use crate::config::config;
use crate::handler;
use crate::http::parser::RequestParser;
use crate::http::response::HttpResponse;
use crate::http::status::HttpStatus;
use crate::redirection::RedirectionTable;

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}:{port}: {source}")]
    Bind {
        address: IpAddr,
        port: u16,
        source: std::io::Error,
    },
}

pub struct Server {
    listener: TcpListener,
    redirections: Arc<RedirectionTable>,
}

/// Reasons a request could not be read off the stream.
enum ReadError {
    Io(std::io::Error),
    ConnectionClosed,
    TooLarge,
}

impl Server {
    pub async fn bind(
        address: IpAddr,
        port: u16,
        redirections: RedirectionTable,
    ) -> Result<Self, ServerError> {
        let listener = TcpListener::bind((address, port))
            .await
            .map_err(|source| ServerError::Bind {
                address,
                port,
                source,
            })?;

        Ok(Self {
            listener,
            redirections: Arc::new(redirections),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections until the listener fails, one task per client.
    pub async fn run(&self) -> std::io::Result<()> {
        tracing::info!(address = %self.local_addr()?, "server listening");

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(err) => {
                    tracing::warn!(error = %err, "failed to accept connection");
                    continue;
                }
            };

            let redirections = Arc::clone(&self.redirections);
            let span = tracing::info_span!("connection", peer = %peer);
            task::spawn(
                async move {
                    if let Err(err) = Self::handle_client(stream, &redirections).await {
                        tracing::warn!(error = %err, "failed to write response");
                    }
                }
                .instrument(span),
            );
        }
    }

    /// Buffers one full request from the stream.
    ///
    /// Reading stops once the header section is terminated, on EOF, or when
    /// the read timeout elapses; whatever was received is returned and left
    /// to the parser to judge.
    async fn read_request(stream: &mut TcpStream) -> Result<String, ReadError> {
        let cfg = config();
        let mut raw = Vec::new();
        let mut buffer = vec![0; cfg.buffer_size];

        loop {
            let n = match io::timeout(cfg.read_timeout, stream.read(&mut buffer)).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                    tracing::debug!(received = raw.len(), "read timed out");
                    break;
                }
                Err(e) => return Err(ReadError::Io(e)),
            };

            raw.extend_from_slice(&buffer[..n]);
            if raw.len() > cfg.max_request_size {
                return Err(ReadError::TooLarge);
            }
            if raw
                .windows(HEADER_TERMINATOR.len())
                .any(|w| w == HEADER_TERMINATOR)
            {
                break;
            }
        }

        if raw.is_empty() {
            return Err(ReadError::ConnectionClosed);
        }

        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    async fn write_response(stream: &mut TcpStream, response: &HttpResponse) -> std::io::Result<()> {
        let headers = response.build_headers();
        stream.write_all(headers.as_bytes()).await?;
        stream.write_all(&response.body).await?;
        stream.flush().await
    }

    async fn handle_client(
        mut stream: TcpStream,
        redirections: &RedirectionTable,
    ) -> std::io::Result<()> {
        let response = match Self::read_request(&mut stream).await {
            Ok(raw) => match RequestParser::parse(&raw) {
                Ok(req) => {
                    tracing::info!(method = req.method().as_str(), uri = req.uri(), "request");
                    handler::handle_request(&req, redirections)
                }
                Err(err) => handler::handle_error(err.into_http_status()),
            },
            Err(ReadError::Io(err)) => {
                tracing::warn!(error = %err, "I/O error while reading request");
                return Ok(());
            }
            Err(ReadError::ConnectionClosed) => return Ok(()),
            Err(ReadError::TooLarge) => {
                tracing::debug!("request exceeds size limit");
                handler::handle_error(HttpStatus::BadRequest)
            }
        };

        tracing::info!(status = response.status.code(), "response");
        io::timeout(
            config().write_timeout,
            Self::write_response(&mut stream, &response),
        )
        .await
    }
}
