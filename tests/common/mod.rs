//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use board_dev_server::{DevServer, DevServerConfig, MockDataset, Shutdown};

/// Start a fake Asset Server on an ephemeral port.
///
/// Every response body is `"<METHOD> <path>"` as received, so tests can see
/// exactly what the dev server asked for. `/missing.js` answers 404.
/// Returns the address and a counter of requests served.
pub async fn start_asset_server() -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let counter = counter.clone();
                    tokio::spawn(async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        serve_one(socket).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, hits)
}

/// Start an upstream whose every connection is handed to `f` after the
/// request head has been read. `f` receives the socket and the request line.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(TcpStream, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                let request_line = read_request_head(&mut socket).await;
                f(socket, request_line).await;
            });
        }
    });

    addr
}

/// Read up to the blank line ending the request head; returns the request line.
pub async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

async fn serve_one(mut socket: TcpStream) {
    let request_line = read_request_head(&mut socket).await;
    let mut request_line = request_line.split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();

    let (status, body) = if path == "/missing.js" {
        ("404 Not Found", "missing".to_string())
    } else {
        ("200 OK", format!("{method} {path}"))
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nX-Asset-Server: fake\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// An `http://` origin on which nothing is listening.
pub fn closed_origin() -> String {
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    format!("http://{addr}")
}

/// Start a dev server forwarding to `origin`. Trigger the returned
/// `Shutdown` to stop it.
pub async fn start_dev_server(origin: &str) -> (SocketAddr, Shutdown) {
    let mut config = DevServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.origin = origin.to_string();

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = DevServer::new(config, MockDataset::new());
    let server_shutdown = shutdown.clone();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// A client that never pools or goes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
