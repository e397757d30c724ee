//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Start a backend that answers every request with the `User-Agent`
/// headers it received, as JSON:
///
/// `{"headers": {"User-Agent": <first value or null>}, "user_agent_count": n}`
pub async fn start_echo_backend() -> SocketAddr {
    start_echo_backend_with_status(200).await
}

/// Same as [`start_echo_backend`], replying with `status`.
pub async fn start_echo_backend_with_status(status: u16) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    tokio::spawn(handle(socket, status));
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn handle(mut socket: TcpStream, status: u16) {
    let head = match read_head(&mut socket).await {
        Some(head) => head,
        None => return,
    };

    let user_agents: Vec<&str> = head
        .lines()
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .filter(|(name, _)| name.trim().eq_ignore_ascii_case("user-agent"))
        .map(|(_, value)| value.trim())
        .collect();

    let body = json!({
        "headers": { "User-Agent": user_agents.first() },
        "user_agent_count": user_agents.len(),
    })
    .to_string();

    let status_text = match status {
        200 => "200 OK",
        403 => "403 Forbidden",
        500 => "500 Internal Server Error",
        _ => "200 OK",
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
    tokio::time::sleep(Duration::from_millis(10)).await;
}

/// Read until the end of the request head.
async fn read_head(socket: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8(buf).ok()
}
