// demos/minimal/src/main.rs
// ============================================================================
// Module: Clean Path Minimal Demo
// Description: Minimal axum server wrapped with the clean path layer.
// Purpose: Demonstrate config loading and per-request path cleaning.
// Dependencies: clean-path-axum, clean-path-config, axum, tokio
// ============================================================================

//! ## Overview
//! Loads `clean-path.toml` (or defaults when absent), installs
//! [`CleanPathLayer`], and serves two echo routes. Request `//a//b//` against
//! it to watch the permanent redirect to `/a/b/`.

use std::io::Write;
use std::net::SocketAddr;

use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use clean_path_axum::CleanPathLayer;
use clean_path_config::CleanPathConfig;

/// Bind address used when the config does not provide one.
const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Serves the demo router on the configured bind address.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CleanPathConfig::load_default()?;
    let policy = config.middleware.policy();
    let bind = config.server.bind.unwrap_or_else(|| DEFAULT_BIND.to_string());
    let addr: SocketAddr = bind.parse()?;

    let app = Router::new()
        .route("/", get(index))
        .route("/{*rest}", get(echo))
        .layer(CleanPathLayer::new(policy));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let mut stdout = std::io::stdout();
    writeln!(stdout, "clean-path demo listening on {bind}")?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Root route.
async fn index() -> &'static str {
    "clean-path demo\n"
}

/// Echoes the (cleaned or original) request path.
async fn echo(uri: Uri) -> String {
    format!("path: {}\n", uri.path())
}
