// clean-path-axum/src/layer.rs
// ============================================================================
// Module: Clean Path Layer
// Description: Tower layer and service applying the cleaning policy.
// Purpose: Decide per request between pass-through, redirect, and rewrite.
// Dependencies: clean-path-core, axum, tower, futures-util
// ============================================================================

//! ## Overview
//! [`CleanPathLayer`] wraps an inner service with [`CleanPathService`]. The
//! canonical-form check runs before the inner service is consulted; an
//! already-clean request costs one path scan. Redirect responses are
//! synthesized without calling the inner service. Reassembly failures never
//! panic: the request is forwarded untouched and surfaced through the
//! metrics sink as a fallback.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::task::Context;
use std::task::Poll;

use axum::http::Request;
use axum::http::Response;
use axum::http::Uri;
use clean_path_core::CleanMode;
use clean_path_core::CleanPolicy;
use clean_path_core::cleaned;
use futures_util::future::Either;
use futures_util::future::Ready;
use futures_util::future::ready;
use tower::Layer;
use tower::Service;

use crate::redirect::cleaned_uri;
use crate::redirect::redirect_response;
use crate::telemetry::CleanPathMetrics;
use crate::telemetry::NoopMetrics;
use crate::telemetry::PathAction;
use crate::telemetry::PathEvent;

// ============================================================================
// SECTION: Layer
// ============================================================================

/// Layer applying a [`CleanPolicy`] to every request path.
#[derive(Clone)]
pub struct CleanPathLayer {
    /// Cleaning policy shared across services.
    policy: Arc<CleanPolicy>,
    /// Metrics sink shared across services.
    metrics: Arc<dyn CleanPathMetrics>,
}

impl CleanPathLayer {
    /// Builds a layer from a cleaning policy.
    #[must_use]
    pub fn new(policy: CleanPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
            metrics: Arc::new(NoopMetrics),
        }
    }

    /// Replaces the metrics sink.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<dyn CleanPathMetrics>) -> Self {
        self.metrics = metrics;
        self
    }
}

impl Default for CleanPathLayer {
    fn default() -> Self {
        Self::new(CleanPolicy::default())
    }
}

impl<S> Layer<S> for CleanPathLayer {
    type Service = CleanPathService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CleanPathService {
            inner,
            policy: Arc::clone(&self.policy),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

// ============================================================================
// SECTION: Service
// ============================================================================

/// Service applying the cleaning policy before its inner service.
#[derive(Clone)]
pub struct CleanPathService<S> {
    /// Wrapped service.
    inner: S,
    /// Cleaning policy.
    policy: Arc<CleanPolicy>,
    /// Metrics sink.
    metrics: Arc<dyn CleanPathMetrics>,
}

impl<S> CleanPathService<S> {
    /// Records a cleaning decision for the request URI.
    fn record(&self, action: PathAction, uri: &Uri) {
        self.metrics.record(PathEvent {
            action,
            path_bytes: uri.path().len(),
            has_query: uri.query().is_some(),
        });
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CleanPathService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = Either<Ready<Result<Response<ResBody>, S::Error>>, S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let Some(target) = cleaned(req.uri().path(), &self.policy) else {
            self.record(PathAction::Pass, req.uri());
            return Either::Right(self.inner.call(req));
        };
        match self.policy.mode {
            CleanMode::Rewrite => match cleaned_uri(req.uri(), &target) {
                Some(uri) => {
                    self.record(PathAction::Rewrite, req.uri());
                    *req.uri_mut() = uri;
                    Either::Right(self.inner.call(req))
                }
                None => {
                    self.record(PathAction::Fallback, req.uri());
                    Either::Right(self.inner.call(req))
                }
            },
            CleanMode::Redirect => {
                match redirect_response(self.policy.redirect, &target, req.uri().query()) {
                    Some(response) => {
                        self.record(PathAction::Redirect, req.uri());
                        Either::Left(ready(Ok(response)))
                    }
                    None => {
                        self.record(PathAction::Fallback, req.uri());
                        Either::Right(self.inner.call(req))
                    }
                }
            }
        }
    }
}
