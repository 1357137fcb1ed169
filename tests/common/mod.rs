#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Once;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use serde_json::{Value, json};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static TRACING: Once = Once::new();

/// Installs a tracing subscriber once per test binary so client-side logs
/// show up under `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ))
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
    });
}

/// Serves the given router on an ephemeral local port, standing in for the
/// platform backend. Returns the base URL to point the client at.
pub async fn spawn_backend(router: Router) -> String {
    init_tracing();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A user payload in the backend's wire format.
pub fn user_json(id: i64, name: &str, role: &str, is_active: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "email_verified_at": null,
        "role": role,
        "is_active": is_active,
        "created_at": "2024-05-01T10:00:00.000000Z",
        "updated_at": "2024-05-02T11:30:00.000000Z"
    })
}

/// A unique path under the system temp directory.
pub fn temp_token_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("abrakdabra_test_{}_{}", name, stamp))
}
