//! `ebver check` — report whether the source bundle is already stored.
//!
//! Read-only: runs the existence check and nothing else.

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::ports::BundleStore;
use crate::application::services::release;
use crate::commands::ReleaseArgs;
use crate::domain::{BundlePresence, ReleaseConfig};
use crate::infra::aws;
use crate::infra::s3::S3BundleStore;

/// Run `ebver check`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the storage service
/// fails with anything other than "no such key".
pub async fn run(app: &AppContext, args: ReleaseArgs) -> Result<()> {
    let config = args.into_config()?;
    let sdk = aws::load_sdk_config(&config.region).await;
    let store = S3BundleStore::new(&sdk);
    execute(app, &store, &config).await?;
    Ok(())
}

/// Check and render, with the store injected.
///
/// # Errors
///
/// Returns an error if the storage service fails with anything other than
/// "no such key".
pub async fn execute(
    app: &AppContext,
    store: &impl BundleStore,
    config: &ReleaseConfig,
) -> Result<BundlePresence> {
    let location = config.bundle_location();
    let presence = release::check_bundle(store, &location)
        .await
        .with_context(|| format!("checking whether {location} exists"))?;
    app.renderer().render_presence(&location, presence)?;
    Ok(presence)
}
