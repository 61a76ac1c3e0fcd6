//! Command implementations

pub mod check;
pub mod create;
pub mod version;

use std::path::PathBuf;

use clap::Args;

use crate::domain::config::{
    ENV_APPLICATION, ENV_BUCKET, ENV_KEY, ENV_REGION, ENV_VERSION_LABEL, ReleaseConfig,
};
use crate::domain::error::ConfigError;

/// Release coordinates shared by `create` and `check`.
///
/// Each value is normally supplied through its `TF_VAR_*` environment
/// variable so the same variables drive Terraform and this tool.
#[derive(Args, Debug, Clone)]
pub struct ReleaseArgs {
    /// AWS region for S3 and Elastic Beanstalk
    #[arg(long, env = ENV_REGION, value_name = "REGION")]
    pub region: String,

    /// S3 bucket holding the source bundle
    #[arg(long, env = ENV_BUCKET, value_name = "BUCKET")]
    pub bucket: String,

    /// S3 key of the source bundle
    #[arg(long, env = ENV_KEY, value_name = "KEY")]
    pub key: String,

    /// Elastic Beanstalk application name
    #[arg(long, env = ENV_APPLICATION, value_name = "NAME")]
    pub application: String,

    /// Application version label to create
    #[arg(long, env = ENV_VERSION_LABEL, value_name = "LABEL")]
    pub version_label: String,
}

impl ReleaseArgs {
    /// Build the validated release configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is blank.
    pub fn into_config(self) -> Result<ReleaseConfig, ConfigError> {
        ReleaseConfig {
            region: self.region,
            bucket: self.bucket,
            key: self.key,
            application: self.application,
            version_label: self.version_label,
        }
        .validated()
    }
}

/// Arguments for the create command.
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    #[command(flatten)]
    pub release: ReleaseArgs,

    /// Upload this file as the source bundle instead of the key string
    #[arg(long, value_name = "PATH")]
    pub bundle_file: Option<PathBuf>,
}
