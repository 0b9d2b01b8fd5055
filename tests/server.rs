use async_std::net::TcpStream;
use async_std::prelude::*;
use async_std::task;
use std::net::{IpAddr, Ipv4Addr, Shutdown, SocketAddr};

use redirnet::net::server::Server;
use redirnet::redirection::RedirectionTable;

async fn start_server() -> SocketAddr {
    let table = RedirectionTable::parse("aboutus.html,aboutus2.html\n/old,https://example.com/new\n")
        .unwrap();
    let server = Server::bind(IpAddr::V4(Ipv4Addr::LOCALHOST), 0, table)
        .await
        .unwrap();
    let addr = server.local_addr().unwrap();
    task::spawn(async move { server.run().await });
    addr
}

async fn send(addr: SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();
    stream.shutdown(Shutdown::Write).unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[async_std::test]
async fn redirects_known_resource() {
    let addr = start_server().await;
    let response = send(addr, "GET /aboutus.html HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 301 Moved Permanently\r\n"), "{response}");
    assert!(response.contains("Location: /aboutus2.html\r\n"));
    assert!(response.contains("Connection: close\r\n"));
}

#[async_std::test]
async fn redirects_to_absolute_destination() {
    let addr = start_server().await;
    let response = send(addr, "GET /old HTTP/1.0\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 301"), "{response}");
    assert!(response.contains("Location: https://example.com/new\r\n"));
}

#[async_std::test]
async fn rejects_unsupported_method() {
    let addr = start_server().await;
    let response = send(addr, "POST /x HTTP/1.1\r\nHost: a\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"), "{response}");
}

#[async_std::test]
async fn rejects_request_without_blank_line() {
    let addr = start_server().await;
    let response = send(addr, "GET /x HTTP/1.1\r\nHost: a\r\nBody line").await;

    assert!(response.starts_with("HTTP/1.1 400"), "{response}");
}

#[async_std::test]
async fn missing_file_is_not_found() {
    let addr = start_server().await;
    let response = send(addr, "GET /no-such-file.html HTTP/1.1\r\nHost: a\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"), "{response}");
    assert!(response.contains("Date: "));
}
