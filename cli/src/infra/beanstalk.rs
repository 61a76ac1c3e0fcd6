//! Elastic Beanstalk implementation of the `VersionRegistry` port.

use aws_config::SdkConfig;
use aws_sdk_elasticbeanstalk::types::S3Location;

use crate::application::ports::VersionRegistry;
use crate::domain::{RemoteError, VersionRequest};
use crate::infra::aws::remote_error;

const CREATE_APPLICATION_VERSION: &str = "CreateApplicationVersion";

/// Application version registry backed by Elastic Beanstalk.
pub struct BeanstalkRegistry {
    client: aws_sdk_elasticbeanstalk::Client,
}

impl BeanstalkRegistry {
    #[must_use]
    pub fn new(sdk: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_elasticbeanstalk::Client::new(sdk),
        }
    }
}

impl VersionRegistry for BeanstalkRegistry {
    async fn create_version(&self, request: &VersionRequest) -> Result<(), RemoteError> {
        tracing::debug!(
            application = %request.application,
            version_label = %request.version_label,
            bundle = %request.bundle,
            "CreateApplicationVersion",
        );
        let source_bundle = S3Location::builder()
            .s3_bucket(&request.bundle.bucket)
            .s3_key(&request.bundle.key)
            .build();
        self.client
            .create_application_version()
            .application_name(&request.application)
            .version_label(&request.version_label)
            .source_bundle(source_bundle)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| remote_error(CREATE_APPLICATION_VERSION, &e))
    }
}
