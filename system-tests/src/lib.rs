// system-tests/src/lib.rs
// ============================================================================
// Module: Clean Path System Tests Library
// Description: Shared server fixtures for end-to-end scenarios.
// Purpose: Boot a real listener wrapped with the clean path layer.
// Dependencies: clean-path-axum, axum, tokio
// ============================================================================

//! ## Overview
//! This crate hosts the server fixtures used by the end-to-end suites in
//! `system-tests/tests`. Each fixture binds an ephemeral port so suites can
//! run in parallel.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;

use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use clean_path_axum::CleanPathLayer;
use clean_path_core::CleanPolicy;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Builds the echo router wrapped with the clean path layer.
#[must_use]
pub fn echo_router(policy: CleanPolicy) -> Router {
    Router::new()
        .route("/", get(echo))
        .route("/{*rest}", get(echo))
        .layer(CleanPathLayer::new(policy))
}

/// Serves the echo router on an ephemeral local port.
///
/// The server task runs until the test process exits.
///
/// # Errors
///
/// Returns an [`std::io::Error`] when the listener cannot be bound.
pub async fn spawn_echo_server(policy: CleanPolicy) -> Result<SocketAddr, std::io::Error> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = echo_router(policy);
    let _server = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(addr)
}

/// Echoes the request path back as the response body.
async fn echo(uri: Uri) -> String {
    uri.path().to_string()
}
