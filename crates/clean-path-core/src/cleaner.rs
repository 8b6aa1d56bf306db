// clean-path-core/src/cleaner.rs
// ============================================================================
// Module: Clean Path Cleaner
// Description: Lexical resolution of request paths against a segment stack.
// Purpose: Produce the canonical form of a path under a cleaning policy.
// Dependencies: crate::extension, crate::policy
// ============================================================================

//! ## Overview
//! Cleaning is lexical and rooted: duplicate slashes merge, `.` segments
//! disappear, and `..` segments pop the segment stack without ever escaping
//! the root. A cheap, allocation-free inspection runs first so the common
//! case (an already-canonical path) costs a scan and nothing else. The
//! cleaner never percent-decodes and never inspects the query string.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::extension::has_extension;
use crate::policy::CleanPolicy;
use crate::policy::TrailingSlash;

// ============================================================================
// SECTION: Lexical Resolution
// ============================================================================

/// Resolves a path against a segment stack, rooted at `/`.
///
/// Duplicate slashes and `.` segments are dropped, `..` pops the previous
/// segment and is ignored at the root. The result is always rooted and never
/// carries a trailing slash unless it is the root itself.
#[must_use]
pub fn clean_path(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }
    if stack.is_empty() {
        return "/".to_string();
    }
    let mut resolved = String::with_capacity(path.len());
    for segment in &stack {
        resolved.push('/');
        resolved.push_str(segment);
    }
    resolved
}

/// Applies the trailing-slash policy to a resolved path.
///
/// `had_trailing` reports whether the original path ended with a slash. The
/// root path is returned unchanged.
#[must_use]
pub fn apply_trailing_slash(path: String, had_trailing: bool, policy: TrailingSlash) -> String {
    let mut path = path;
    if path == "/" {
        return path;
    }
    match policy {
        TrailingSlash::Directory => {
            if had_trailing || !has_extension(&path) {
                path.push('/');
            }
        }
        TrailingSlash::Preserve => {
            if had_trailing {
                path.push('/');
            }
        }
        TrailingSlash::Never => {}
    }
    path
}

// ============================================================================
// SECTION: Cleaning Pipeline
// ============================================================================

/// Returns the canonical form of `path` under `policy`, or `None` when the
/// path is already canonical.
///
/// Non-rooted paths (asterisk-form and absolute-form request targets), the
/// root path, and paths longer than the policy size cap are never cleaned.
#[must_use]
pub fn cleaned(path: &str, policy: &CleanPolicy) -> Option<String> {
    if !path.starts_with('/') || path == "/" || path.len() > policy.max_path_bytes {
        return None;
    }
    if is_fast_clean(path, policy.trailing_slash) {
        return None;
    }
    let had_trailing = path.ends_with('/');
    let resolved = clean_path(path);
    let finished = apply_trailing_slash(resolved, had_trailing, policy.trailing_slash);
    if finished == path {
        None
    } else {
        Some(finished)
    }
}

/// Allocation-free canonical-form check.
///
/// Conservative: a `false` answer only means the slow path must decide. Any
/// `/.` occurrence falls through to the slow path so dotfile segments are
/// not mistaken for `.` or `..` segments.
fn is_fast_clean(path: &str, policy: TrailingSlash) -> bool {
    if path.contains("//") || path.contains("/.") {
        return false;
    }
    match policy {
        TrailingSlash::Directory => has_extension(path) ^ path.ends_with('/'),
        TrailingSlash::Preserve => true,
        TrailingSlash::Never => !path.ends_with('/'),
    }
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

    use super::clean_path;
    use super::cleaned;
    use super::is_fast_clean;
    use crate::policy::CleanPolicy;
    use crate::policy::TrailingSlash;

    #[test]
    fn resolution_merges_and_pops() {
        assert_eq!(clean_path("//a//b//"), "/a/b");
        assert_eq!(clean_path("/a/b/../c"), "/a/c");
        assert_eq!(clean_path("/./././"), "/");
        assert_eq!(clean_path("/..//.."), "/");
    }

    #[test]
    fn resolution_never_escapes_the_root() {
        assert_eq!(clean_path("/../../../etc/passwd"), "/etc/passwd");
        assert_eq!(clean_path("/a/../../.."), "/");
    }

    #[test]
    fn dotfile_segments_survive_resolution() {
        assert_eq!(clean_path("/.well-known//acme"), "/.well-known/acme");
    }

    #[test]
    fn fast_check_accepts_canonical_directory_paths() {
        assert!(is_fast_clean("/", TrailingSlash::Directory));
        assert!(is_fast_clean("/a/b/", TrailingSlash::Directory));
        assert!(is_fast_clean("/m.js", TrailingSlash::Directory));
        assert!(is_fast_clean("/m.js/", TrailingSlash::Directory));
    }

    #[test]
    fn fast_check_defers_on_dot_segments() {
        assert!(!is_fast_clean("/.well-known/acme/", TrailingSlash::Directory));
        assert!(!is_fast_clean("/a/./b/", TrailingSlash::Directory));
    }

    #[test]
    fn dotfile_paths_are_fixed_points_of_the_slow_path() {
        let policy = CleanPolicy::default();
        assert_eq!(cleaned("/.well-known/acme/", &policy), None);
        assert_eq!(cleaned("/.hidden", &policy), None);
    }

    #[test]
    fn oversized_paths_pass_through() {
        let policy = CleanPolicy::default();
        let long = format!("//{}", "a/".repeat(8192));
        assert_eq!(cleaned(&long, &policy), None);
    }

    #[test]
    fn non_rooted_targets_pass_through() {
        let policy = CleanPolicy::default();
        assert_eq!(cleaned("*", &policy), None);
        assert_eq!(cleaned("example.com:443", &policy), None);
    }

    #[test]
    fn never_policy_strips_trailing_slashes() {
        let policy = CleanPolicy {
            trailing_slash: TrailingSlash::Never,
            ..CleanPolicy::default()
        };
        assert_eq!(cleaned("/a/", &policy).as_deref(), Some("/a"));
        assert_eq!(cleaned("/a/b//", &policy).as_deref(), Some("/a/b"));
        assert_eq!(cleaned("/a", &policy), None);
        assert_eq!(cleaned("/", &policy), None);
    }

    #[test]
    fn preserve_policy_keeps_trailing_slashes() {
        let policy = CleanPolicy {
            trailing_slash: TrailingSlash::Preserve,
            ..CleanPolicy::default()
        };
        assert_eq!(cleaned("/a//b", &policy).as_deref(), Some("/a/b"));
        assert_eq!(cleaned("/a//b/", &policy).as_deref(), Some("/a/b/"));
        assert_eq!(cleaned("/a", &policy), None);
        assert_eq!(cleaned("/a/", &policy), None);
    }
}
