//! Application service — create an application version from a source bundle.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! The use-case is check, then upload, then register. The check gates the
//! other two: an existing bundle means the version label was already used and
//! the run is refused. Check-then-act is not atomic; two concurrent runs for
//! the same key can both pass the check.

use anyhow::{Context, Result};

use crate::application::ports::{BundleStore, ProgressReporter, VersionRegistry};
use crate::domain::{
    BundleLocation, BundlePayload, BundlePresence, IgnoredReason, PayloadSource,
    RegistrationOutcome, ReleaseConfig, RemoteError, VersionRequest, is_application_not_found,
};

/// Outcome of the `create_release` use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The bundle was uploaded and the registration step finished.
    Created(RegistrationOutcome),
    /// A bundle already exists under the configured key. Nothing was written.
    AlreadyExists,
}

/// Check whether a bundle is already stored at `location`.
///
/// # Errors
///
/// Propagates every storage error except "no such key".
pub async fn check_bundle(
    store: &impl BundleStore,
    location: &BundleLocation,
) -> Result<BundlePresence, RemoteError> {
    match store.probe(location).await {
        Ok(()) => Ok(BundlePresence::Found),
        Err(e) if e.is_no_such_key() => Ok(BundlePresence::NotFound),
        Err(e) => Err(e),
    }
}

/// Write `payload` to `location`.
///
/// # Errors
///
/// Propagates any storage error. No retry.
pub async fn upload_bundle(
    store: &impl BundleStore,
    location: &BundleLocation,
    payload: &BundlePayload,
) -> Result<(), RemoteError> {
    if payload.source == PayloadSource::KeyString {
        tracing::warn!(
            bucket = %location.bucket,
            key = %location.key,
            "uploading the object key as the bundle body; pass --bundle-file to upload a real bundle",
        );
    }
    tracing::debug!(%location, bytes = payload.len(), "putting source bundle");
    store.put(location, payload).await
}

/// Register the version described by `request`.
///
/// A service error whose message is exactly `No Application named <name>
/// found.` is tolerated and reported as [`RegistrationOutcome::Ignored`].
///
/// # Errors
///
/// Propagates every other failure, including transport errors and service
/// errors without a message.
pub async fn register_version(
    registry: &impl VersionRegistry,
    request: &VersionRequest,
) -> Result<RegistrationOutcome, RemoteError> {
    match registry.create_version(request).await {
        Ok(()) => Ok(RegistrationOutcome::Registered),
        Err(e) => match e.service_message() {
            Some(message) if is_application_not_found(message) => {
                tracing::warn!(
                    application = %request.application,
                    version_label = %request.version_label,
                    platform_message = message,
                    "application does not exist yet; skipping version registration",
                );
                Ok(RegistrationOutcome::Ignored(IgnoredReason::ApplicationNotFound {
                    message: message.to_string(),
                }))
            }
            _ => Err(e),
        },
    }
}

/// Upload and register a new application version unless its bundle exists.
///
/// Accepts port trait bounds so the caller can inject real or mock
/// implementations. The service never touches `OutputContext` or any
/// presentation type.
///
/// # Errors
///
/// Returns an error if the check, the upload, or the registration fails with
/// anything other than the tolerated cases. An upload followed by a failed
/// registration leaves the uploaded object in place.
pub async fn create_release(
    store: &impl BundleStore,
    registry: &impl VersionRegistry,
    reporter: &impl ProgressReporter,
    config: &ReleaseConfig,
    payload: &BundlePayload,
) -> Result<ReleaseOutcome> {
    let location = config.bundle_location();

    reporter.step(&format!("checking {location}..."));
    let presence = check_bundle(store, &location)
        .await
        .with_context(|| format!("checking whether {location} exists"))?;
    tracing::info!(%location, ?presence, "existence check finished");

    if presence.is_found() {
        return Ok(ReleaseOutcome::AlreadyExists);
    }

    reporter.step(&format!("uploading source bundle to {location}..."));
    upload_bundle(store, &location, payload)
        .await
        .with_context(|| format!("uploading source bundle to {location}"))?;
    reporter.success("source bundle uploaded");

    let request = config.version_request();
    reporter.step(&format!(
        "registering version '{}' of '{}'...",
        request.version_label, request.application
    ));
    let registration = register_version(registry, &request)
        .await
        .with_context(|| {
            format!(
                "registering version '{}' of application '{}'",
                request.version_label, request.application
            )
        })?;

    match &registration {
        RegistrationOutcome::Registered => reporter.success("application version registered"),
        RegistrationOutcome::Ignored(reason) => reporter.warn(&format!(
            "registration skipped: {} (the application is created later)",
            reason.message()
        )),
    }

    Ok(ReleaseOutcome::Created(registration))
}
