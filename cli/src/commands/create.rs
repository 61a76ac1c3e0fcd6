//! `ebver create` — upload the source bundle and register the version.
//!
//! Meant to run before `terraform apply`, and again as a `local-exec`
//! provisioner of the `aws_elastic_beanstalk_application` resource.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::ports::{BundleStore, VersionRegistry};
use crate::application::services::release::{self, ReleaseOutcome};
use crate::commands::CreateArgs;
use crate::domain::{BundlePayload, ReleaseConfig};
use crate::infra::aws;
use crate::infra::beanstalk::BeanstalkRegistry;
use crate::infra::s3::S3BundleStore;
use crate::output::TerminalReporter;

/// Exit status when the bundle already exists (`-1` as an unsigned byte).
pub const REFUSAL_EXIT_CODE: u8 = 255;

/// Run `ebver create`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the bundle file cannot
/// be read, or any remote call fails with a non-tolerated error.
pub async fn run(app: &AppContext, args: CreateArgs) -> Result<ExitCode> {
    let config = args.release.into_config()?;
    let payload = load_payload(&config, args.bundle_file.as_deref()).await?;

    let sdk = aws::load_sdk_config(&config.region).await;
    let store = S3BundleStore::new(&sdk);
    let registry = BeanstalkRegistry::new(&sdk);

    let outcome = execute(app, &store, &registry, &config, &payload).await?;
    Ok(ExitCode::from(exit_status(&outcome)))
}

/// Run the release and render its outcome, with ports injected.
///
/// # Errors
///
/// Returns an error if the release fails.
pub async fn execute(
    app: &AppContext,
    store: &impl BundleStore,
    registry: &impl VersionRegistry,
    config: &ReleaseConfig,
    payload: &BundlePayload,
) -> Result<ReleaseOutcome> {
    let reporter = TerminalReporter::new(&app.output);
    let outcome = release::create_release(store, registry, &reporter, config, payload).await?;
    app.renderer().render_release(config, &outcome)?;
    Ok(outcome)
}

/// Process exit status for a finished release.
#[must_use]
pub fn exit_status(outcome: &ReleaseOutcome) -> u8 {
    match outcome {
        ReleaseOutcome::Created(_) => 0,
        ReleaseOutcome::AlreadyExists => REFUSAL_EXIT_CODE,
    }
}

/// Resolve the bytes to upload.
///
/// Without `bundle_file` the body is the object key itself.
///
/// # Errors
///
/// Returns an error if `bundle_file` cannot be read.
pub async fn load_payload(
    config: &ReleaseConfig,
    bundle_file: Option<&Path>,
) -> Result<BundlePayload> {
    match bundle_file {
        None => Ok(BundlePayload::key_string(&config.bundle_location())),
        Some(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("cannot read bundle file {}", path.display()))?;
            Ok(BundlePayload::file(path, bytes))
        }
    }
}
