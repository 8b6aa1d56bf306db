// clean-path-core/src/policy.rs
// ============================================================================
// Module: Clean Path Policy
// Description: Cleaning policy model with strict validation.
// Purpose: Describe how cleaned paths are finished and delivered.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! The policy model controls the two knobs the cleaner exposes (trailing
//! slash handling and the per-request size cap) plus the two knobs the
//! middleware exposes (redirect versus in-place rewrite, and the redirect
//! status). Defaults reproduce the classic redirect middleware behavior:
//! directory-style trailing slashes and a permanent redirect.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default maximum request path length considered for cleaning, in bytes.
pub const DEFAULT_MAX_PATH_BYTES: usize = 8192;
/// Minimum allowed value for [`CleanPolicy::max_path_bytes`].
pub(crate) const MIN_MAX_PATH_BYTES: usize = 64;
/// Maximum allowed value for [`CleanPolicy::max_path_bytes`].
pub(crate) const MAX_MAX_PATH_BYTES: usize = 65_536;

// ============================================================================
// SECTION: Policy Knobs
// ============================================================================

/// Trailing-slash handling for cleaned paths.
///
/// # Invariants
/// - The root path `/` is never affected by this policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingSlash {
    /// Append a trailing slash to extension-less paths and keep one that was
    /// already present.
    #[default]
    Directory,
    /// Keep the trailing-slash-ness of the original path.
    Preserve,
    /// Strip trailing slashes from every path except the root.
    Never,
}

impl TrailingSlash {
    /// Returns a stable label for the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Preserve => "preserve",
            Self::Never => "never",
        }
    }
}

/// Delivery mode for cleaned paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanMode {
    /// Answer with a redirect to the cleaned path.
    #[default]
    Redirect,
    /// Rewrite the request URI in place and forward it downstream.
    Rewrite,
}

impl CleanMode {
    /// Returns a stable label for the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Redirect => "redirect",
            Self::Rewrite => "rewrite",
        }
    }
}

/// Redirect status emitted when [`CleanMode::Redirect`] fires.
///
/// # Invariants
/// - `Permanent` and `Temporary` preserve the request method; `Legacy` is
///   offered for clients without 308 support and may be downgraded to GET.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectKind {
    /// 308 Permanent Redirect.
    #[default]
    Permanent,
    /// 307 Temporary Redirect.
    Temporary,
    /// 301 Moved Permanently.
    Legacy,
}

impl RedirectKind {
    /// Returns a stable label for the redirect kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::Temporary => "temporary",
            Self::Legacy => "legacy",
        }
    }

    /// Returns the HTTP status code for the redirect kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Permanent => 308,
            Self::Temporary => 307,
            Self::Legacy => 301,
        }
    }
}

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Cleaning policy applied to every request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanPolicy {
    /// Trailing-slash handling for cleaned paths.
    pub trailing_slash: TrailingSlash,
    /// Delivery mode for cleaned paths.
    pub mode: CleanMode,
    /// Redirect status used in redirect mode.
    pub redirect: RedirectKind,
    /// Paths longer than this many bytes are passed through untouched.
    pub max_path_bytes: usize,
}

impl Default for CleanPolicy {
    fn default() -> Self {
        Self {
            trailing_slash: TrailingSlash::default(),
            mode: CleanMode::default(),
            redirect: RedirectKind::default(),
            max_path_bytes: DEFAULT_MAX_PATH_BYTES,
        }
    }
}

impl CleanPolicy {
    /// Validates the policy limits.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] when a limit is out of range.
    pub const fn validate(&self) -> Result<(), PolicyError> {
        if self.max_path_bytes < MIN_MAX_PATH_BYTES || self.max_path_bytes > MAX_MAX_PATH_BYTES {
            return Err(PolicyError::MaxPathBytesOutOfRange {
                value: self.max_path_bytes,
            });
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Policy validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The path size cap is outside the supported range.
    #[error(
        "max_path_bytes must be between {MIN_MAX_PATH_BYTES} and {MAX_MAX_PATH_BYTES}, got \
         {value}"
    )]
    MaxPathBytesOutOfRange {
        /// Rejected value.
        value: usize,
    },
}

// ============================================================================
// SECTION: Tests
// ============================================================================
