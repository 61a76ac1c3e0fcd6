//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use crate::domain::{BundleLocation, BundlePayload, RemoteError, VersionRequest};

// ── Storage Port ──────────────────────────────────────────────────────────────

/// Object storage holding source bundles.
#[allow(async_fn_in_trait)]
pub trait BundleStore {
    /// Probe the object at `location`.
    ///
    /// Returns `Ok(())` when the object exists. A missing object is reported
    /// as a [`RemoteError`] whose [`RemoteError::is_no_such_key`] is `true`;
    /// deciding what that means is left to the caller.
    async fn probe(&self, location: &BundleLocation) -> Result<(), RemoteError>;

    /// Create or overwrite the object at `location` with `payload`.
    async fn put(&self, location: &BundleLocation, payload: &BundlePayload)
    -> Result<(), RemoteError>;
}

// ── Hosting Platform Port ─────────────────────────────────────────────────────

/// Hosting platform that keeps a registry of application versions.
#[allow(async_fn_in_trait)]
pub trait VersionRegistry {
    /// Register a new application version.
    async fn create_version(&self, request: &VersionRequest) -> Result<(), RemoteError>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
