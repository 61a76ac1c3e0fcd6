//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

/// Error codes S3 uses to say "there is no object under this key".
///
/// `GetObject` reports `NoSuchKey`; `HeadObject` has no response body and
/// reports a bare `NotFound`.
pub const NO_SUCH_KEY_CODES: &[&str] = &["NoSuchKey", "NotFound"];

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while validating the release configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must not be empty (set --{flag} or {env})")]
    Empty {
        field: &'static str,
        flag: &'static str,
        env: &'static str,
    },
}

// ── Remote errors ─────────────────────────────────────────────────────────────

/// A failed call against S3 or Elastic Beanstalk.
///
/// Adapters translate SDK errors into this shape so services can decide what
/// is recoverable without depending on SDK types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The service answered with a structured error.
    #[error("{operation} failed: {}", fault_summary(.code, .message))]
    Service {
        operation: &'static str,
        code: Option<String>,
        message: Option<String>,
    },

    /// The request never produced a service response (DNS, TLS, credentials,
    /// connection reset, ...).
    #[error("{operation} failed: {detail}")]
    Transport {
        operation: &'static str,
        detail: String,
    },
}

impl RemoteError {
    /// Service error code, when the service sent one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => code.as_deref(),
            Self::Transport { .. } => None,
        }
    }

    /// Human-readable service message, when the service sent one.
    #[must_use]
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Service { message, .. } => message.as_deref(),
            Self::Transport { .. } => None,
        }
    }

    /// Returns `true` when the storage service reported a missing key.
    #[must_use]
    pub fn is_no_such_key(&self) -> bool {
        self.code().is_some_and(|code| NO_SUCH_KEY_CODES.contains(&code))
    }
}

#[allow(clippy::ref_option)] // thiserror hands fields over by reference
fn fault_summary(code: &Option<String>, message: &Option<String>) -> String {
    match (code, message) {
        (Some(code), Some(message)) => format!("{code}: {message}"),
        (Some(code), None) => code.clone(),
        (None, Some(message)) => message.clone(),
        (None, None) => "unknown service error".to_string(),
    }
}
