// clean-path-axum/src/telemetry.rs
// ============================================================================
// Module: Clean Path Telemetry
// Description: Observability hooks for path cleaning decisions.
// Purpose: Provide metric events without hard dependencies.
// Dependencies: none
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for per-request cleaning
//! decisions. It is intentionally dependency-light so deployments can plug in
//! Prometheus or OpenTelemetry without redesign. Events carry sizes and
//! labels only; raw paths are never emitted.

// ============================================================================
// SECTION: Metric Labels
// ============================================================================

/// Per-request cleaning decision.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAction {
    /// The path was already canonical and the request was forwarded.
    Pass,
    /// The request was answered with a redirect to the canonical path.
    Redirect,
    /// The request URI was rewritten in place and forwarded.
    Rewrite,
    /// The canonical URI could not be reassembled; the request was forwarded
    /// untouched.
    Fallback,
}

impl PathAction {
    /// Returns a stable label for the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Redirect => "redirect",
            Self::Rewrite => "rewrite",
            Self::Fallback => "fallback",
        }
    }
}

/// Cleaning decision metric event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEvent {
    /// Decision taken for the request.
    pub action: PathAction,
    /// Request path size in bytes.
    pub path_bytes: usize,
    /// Whether the request carried a query string.
    pub has_query: bool,
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Metrics sink for cleaning decisions.
pub trait CleanPathMetrics: Send + Sync {
    /// Records a cleaning decision.
    fn record(&self, event: PathEvent);
}

/// No-op metrics sink.
///
/// # Invariants
/// - Events are intentionally discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl CleanPathMetrics for NoopMetrics {
    fn record(&self, _event: PathEvent) {}
}
