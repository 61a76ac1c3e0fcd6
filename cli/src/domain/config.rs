//! Release configuration record and its validation.
//!
//! Pure functions only — no I/O, no async, no environment access. The CLI
//! layer reads the environment once and hands the values over here.

use crate::domain::bundle::BundleLocation;
use crate::domain::error::ConfigError;
use crate::domain::version::VersionRequest;

// ── Environment variable names ───────────────────────────────────────────────

/// Region used for both S3 and Elastic Beanstalk.
pub const ENV_REGION: &str = "TF_VAR_aws_region";
/// Bucket holding the source bundle.
pub const ENV_BUCKET: &str = "TF_VAR_elastic_beanstalk_s3_bucket";
/// Key of the source bundle inside the bucket.
pub const ENV_KEY: &str = "TF_VAR_elastic_beanstalk_s3_key";
/// Elastic Beanstalk application name.
pub const ENV_APPLICATION: &str = "TF_VAR_elastic_beanstalk_application_name";
/// Version label to create.
pub const ENV_VERSION_LABEL: &str = "TF_VAR_elastic_beanstalk_application_version";

// ── Config record ────────────────────────────────────────────────────────────

/// Everything one run needs, read once at start and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    /// AWS region, e.g. `eu-west-1`.
    pub region: String,
    /// S3 bucket name.
    pub bucket: String,
    /// S3 object key; also the implicit identity of the version.
    pub key: String,
    /// Elastic Beanstalk application name.
    pub application: String,
    /// Version label being created.
    pub version_label: String,
}

impl ReleaseConfig {
    /// Returns `self` if every value is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] naming the first blank value, in
    /// declaration order.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let fields = [
            ("region", "region", ENV_REGION, &self.region),
            ("bucket", "bucket", ENV_BUCKET, &self.bucket),
            ("key", "key", ENV_KEY, &self.key),
            ("application", "application", ENV_APPLICATION, &self.application),
            ("version label", "version-label", ENV_VERSION_LABEL, &self.version_label),
        ];
        if let Some((field, flag, env, _)) =
            fields.into_iter().find(|(.., value)| value.trim().is_empty())
        {
            return Err(ConfigError::Empty { field, flag, env });
        }
        Ok(self)
    }

    /// Where the source bundle lives.
    #[must_use]
    pub fn bundle_location(&self) -> BundleLocation {
        BundleLocation::new(&self.bucket, &self.key)
    }

    /// The version record to register, pointing at [`Self::bundle_location`].
    #[must_use]
    pub fn version_request(&self) -> VersionRequest {
        VersionRequest {
            application: self.application.clone(),
            version_label: self.version_label.clone(),
            bundle: self.bundle_location(),
        }
    }
}
