// clean-path-axum/src/lib.rs
// ============================================================================
// Module: Clean Path Axum Library
// Description: Tower middleware applying the Clean Path policy to requests.
// Purpose: Redirect or rewrite requests whose paths are not canonical.
// Dependencies: clean-path-core, axum, tower
// ============================================================================

//! ## Overview
//! `clean-path-axum` wraps a service with lexical path normalization. A
//! request whose path is already canonical is forwarded untouched. A dirty
//! path is either answered with a redirect to its canonical form (query
//! preserved) or rewritten in place before reaching the inner service,
//! depending on the policy. The layer composes with any axum or tower stack.
//!
//! ```
//! use axum::Router;
//! use axum::routing::get;
//! use clean_path_axum::CleanPathLayer;
//!
//! async fn index() -> &'static str {
//!     "ok"
//! }
//!
//! let app: Router = Router::new().route("/", get(index)).layer(CleanPathLayer::default());
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod layer;
pub mod redirect;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use layer::CleanPathLayer;
pub use layer::CleanPathService;
pub use telemetry::CleanPathMetrics;
pub use telemetry::NoopMetrics;
pub use telemetry::PathAction;
pub use telemetry::PathEvent;
