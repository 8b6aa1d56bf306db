// clean-path-axum/src/redirect.rs
// ============================================================================
// Module: Clean Path Redirects
// Description: URI reassembly and redirect responses for cleaned paths.
// Purpose: Build Location values and redirect responses without panicking.
// Dependencies: clean-path-core, axum
// ============================================================================

//! ## Overview
//! Reassembly helpers keep the original query string attached to the cleaned
//! path. Every fallible step returns `None` instead of panicking; the
//! middleware treats `None` as an instruction to forward the request
//! untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use axum::http::HeaderValue;
use axum::http::Response;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header::LOCATION;
use axum::http::uri::PathAndQuery;
use clean_path_core::RedirectKind;

// ============================================================================
// SECTION: URI Reassembly
// ============================================================================

/// Formats the redirect target: the cleaned path plus the original query.
pub(crate) fn location_value(cleaned_path: &str, query: Option<&str>) -> String {
    match query {
        Some(query) => format!("{cleaned_path}?{query}"),
        None => cleaned_path.to_string(),
    }
}

/// Rebuilds a request URI around the cleaned path, preserving the query and
/// any scheme or authority.
pub(crate) fn cleaned_uri(uri: &Uri, cleaned_path: &str) -> Option<Uri> {
    let path_and_query = location_value(cleaned_path, uri.query());
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::from_maybe_shared(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}

// ============================================================================
// SECTION: Redirect Responses
// ============================================================================

/// Maps the policy redirect kind onto an HTTP status.
pub(crate) const fn redirect_status(kind: RedirectKind) -> StatusCode {
    match kind {
        RedirectKind::Permanent => StatusCode::PERMANENT_REDIRECT,
        RedirectKind::Temporary => StatusCode::TEMPORARY_REDIRECT,
        RedirectKind::Legacy => StatusCode::MOVED_PERMANENTLY,
    }
}

/// Builds the redirect response for a cleaned path.
pub(crate) fn redirect_response<B>(
    kind: RedirectKind,
    cleaned_path: &str,
    query: Option<&str>,
) -> Option<Response<B>>
where
    B: Default,
{
    let location = HeaderValue::try_from(location_value(cleaned_path, query)).ok()?;
    let mut response = Response::new(B::default());
    *response.status_mut() = redirect_status(kind);
    response.headers_mut().insert(LOCATION, location);
    Some(response)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        clippy::dbg_macro,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        reason = "Test-only output and panic-based assertions are permitted."
    )]

    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::http::Uri;
    use axum::http::header::LOCATION;
    use clean_path_core::RedirectKind;

    use super::cleaned_uri;
    use super::location_value;
    use super::redirect_response;
    use super::redirect_status;

    #[test]
    fn location_keeps_the_query() {
        assert_eq!(location_value("/a/b/", Some("a=1&b=2")), "/a/b/?a=1&b=2");
        assert_eq!(location_value("/a/b/", None), "/a/b/");
    }

    #[test]
    fn reassembly_preserves_scheme_and_authority() {
        let uri: Uri = "http://example.com//a//b//?q=1".parse().unwrap();
        let rebuilt = cleaned_uri(&uri, "/a/b/").unwrap();
        assert_eq!(rebuilt.to_string(), "http://example.com/a/b/?q=1");
    }

    #[test]
    fn reassembly_handles_origin_form() {
        let uri: Uri = "//a//b".parse().unwrap();
        let rebuilt = cleaned_uri(&uri, "/a/b/").unwrap();
        assert_eq!(rebuilt.to_string(), "/a/b/");
    }

    #[test]
    fn redirect_statuses_match_policy() {
        assert_eq!(redirect_status(RedirectKind::Permanent), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(redirect_status(RedirectKind::Temporary), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(redirect_status(RedirectKind::Legacy), StatusCode::MOVED_PERMANENTLY);
    }

    #[test]
    fn redirect_response_carries_the_location() {
        let response = redirect_response::<Body>(RedirectKind::Permanent, "/a/", Some("q=1"));
        let response = response.expect("location should build");
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers().get(LOCATION).unwrap().to_str().unwrap(), "/a/?q=1");
    }
}
