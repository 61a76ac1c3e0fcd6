//! Application version records and the registration error policy.
//!
//! Pure functions only — no I/O, no async.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::bundle::BundleLocation;

/// Message Elastic Beanstalk returns when the parent application has not been
/// created yet. On a first Terraform run the version is registered before the
/// application exists, so this one message is tolerated.
///
/// The period is escaped: `found!` does not match, although an unescaped
/// `found.$` would accept it. `$` only matches at the very end of the text,
/// so a trailing newline does not match either.
pub static APPLICATION_NOT_FOUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^No Application named .*? found\.$").expect("valid regex")
});

/// A (application, version label) pair pointing at a source bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRequest {
    pub application: String,
    pub version_label: String,
    pub bundle: BundleLocation,
}

/// Why a registration failure was tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoredReason {
    /// The application does not exist yet. Carries the platform's message.
    ApplicationNotFound { message: String },
}

impl IgnoredReason {
    /// The message the platform returned.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::ApplicationNotFound { message } => message,
        }
    }
}

/// Non-fatal result of the registration step. Fatal failures travel in the
/// `Err` arm instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    Ignored(IgnoredReason),
}

/// Returns `true` if `message` is exactly the "application not found" message.
#[must_use]
pub fn is_application_not_found(message: &str) -> bool {
    APPLICATION_NOT_FOUND_RE.is_match(message)
}
