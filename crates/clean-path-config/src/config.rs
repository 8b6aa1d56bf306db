// clean-path-config/src/config.rs
// ============================================================================
// Module: Clean Path Configuration
// Description: Configuration loading and validation for Clean Path.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: clean-path-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with a strict size limit and
//! unknown-field rejection. A missing default file yields defaults; an
//! explicitly named file that cannot be read or validated fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use clean_path_core::CleanMode;
use clean_path_core::CleanPolicy;
use clean_path_core::DEFAULT_MAX_PATH_BYTES;
use clean_path_core::PolicyError;
use clean_path_core::RedirectKind;
use clean_path_core::TrailingSlash;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "clean-path.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "CLEAN_PATH_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Top-level Clean Path configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CleanPathConfig {
    /// Middleware cleaning policy.
    pub middleware: MiddlewareConfig,
    /// Server settings for deployments that embed a listener.
    pub server: ServerConfig,
}

/// Middleware policy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct MiddlewareConfig {
    /// Delivery mode for cleaned paths.
    pub mode: CleanMode,
    /// Redirect status used in redirect mode.
    pub redirect: RedirectKind,
    /// Trailing-slash handling for cleaned paths.
    pub trailing_slash: TrailingSlash,
    /// Paths longer than this many bytes are passed through untouched.
    pub max_path_bytes: usize,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            mode: CleanMode::default(),
            redirect: RedirectKind::default(),
            trailing_slash: TrailingSlash::default(),
            max_path_bytes: DEFAULT_MAX_PATH_BYTES,
        }
    }
}

impl MiddlewareConfig {
    /// Converts the table into a middleware policy.
    #[must_use]
    pub const fn policy(&self) -> CleanPolicy {
        CleanPolicy {
            trailing_slash: self.trailing_slash,
            mode: self.mode,
            redirect: self.redirect,
            max_path_bytes: self.max_path_bytes,
        }
    }
}

/// Server table for deployments that embed a listener.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    /// Bind address, for example `127.0.0.1:8080`.
    pub bind: Option<String>,
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl CleanPathConfig {
    /// Loads configuration from the default location.
    ///
    /// The `CLEAN_PATH_CONFIG` environment variable overrides the path and
    /// makes the file mandatory. Without the override, a missing
    /// `clean-path.toml` yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load_default() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from_path(Path::new(&path)),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_NAME);
                if fallback.exists() {
                    Self::load_from_path(fallback)
                } else {
                    let config = Self::default();
                    config.validate()?;
                    Ok(config)
                }
            }
        }
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds the size
    /// limit, fails to parse, or fails validation.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let metadata = fs::metadata(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::TooLarge {
                path: path.display().to_string(),
                size: metadata.len(),
            });
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            message: source.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a limit is out of range or the bind
    /// address does not parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.middleware.policy().validate()?;
        if let Some(bind) = &self.server.bind {
            validate_bind(bind)?;
        }
        Ok(())
    }
}

/// Validates a bind address string.
fn validate_bind(bind: &str) -> Result<(), ConfigError> {
    if bind.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::Invalid {
            message: format!("server.bind must be a socket address, got {bind}"),
        });
    }
    Ok(())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem failures while reading the config file.
    #[error("config io error for {path}: {source}")]
    Io {
        /// Offending path.
        path: String,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },
    /// The config file exceeds the size limit.
    #[error("config file {path} exceeds {MAX_CONFIG_FILE_SIZE} bytes ({size})")]
    TooLarge {
        /// Offending path.
        path: String,
        /// Observed file size in bytes.
        size: u64,
    },
    /// The config file is not valid TOML for this model.
    #[error("config parse error in {path}: {message}")]
    Parse {
        /// Offending path.
        path: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The middleware policy is out of range.
    #[error("invalid config: {0}")]
    Policy(#[from] PolicyError),
    /// A cross-field or format constraint failed.
    #[error("invalid config: {message}")]
    Invalid {
        /// Constraint diagnostic.
        message: String,
    },
}
