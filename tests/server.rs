//! Server lifecycle: start on an ephemeral port, serve, shut down

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use time_booking::server::{ServerHandle, ServerOptions};
use time_booking::{AppConfig, DatabaseConfig};

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.server.shutdown_timeout = 5;
    config.database = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    config
}

async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
        path, addr
    );
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn serves_seeded_data_and_shuts_down() {
    let handle = ServerHandle::start(ServerOptions {
        config: test_config(),
        auto_migrate: true,
        seed: true,
    })
    .await
    .unwrap();
    assert!(handle.is_running());

    let health = raw_get(handle.local_addr, "/health").await;
    assert!(health.starts_with("HTTP/1.1 200"), "{}", health);

    let departments = raw_get(handle.local_addr, "/api/departments").await;
    assert!(departments.contains("IoT Solutions"));

    let metrics = raw_get(handle.local_addr, "/metrics").await;
    assert!(metrics.starts_with("HTTP/1.1 200"), "{}", metrics);

    let signal = handle.shutdown_signal();
    handle.shutdown().await;
    assert!(signal.is_triggered());
}
