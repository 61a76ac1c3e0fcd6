//! S3 implementation of the `BundleStore` port.

use aws_config::SdkConfig;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;

use crate::application::ports::BundleStore;
use crate::domain::{BundleLocation, BundlePayload, RemoteError};
use crate::infra::aws::remote_error;

const HEAD_OBJECT: &str = "HeadObject";
const PUT_OBJECT: &str = "PutObject";

/// Source bundle storage backed by an S3 bucket.
pub struct S3BundleStore {
    client: aws_sdk_s3::Client,
}

impl S3BundleStore {
    #[must_use]
    pub fn new(sdk: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_s3::Client::new(sdk),
        }
    }
}

impl BundleStore for S3BundleStore {
    async fn probe(&self, location: &BundleLocation) -> Result<(), RemoteError> {
        tracing::debug!(bucket = %location.bucket, key = %location.key, "HeadObject");
        match self
            .client
            .head_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            // A HEAD response has no body, so the 404 may arrive without an
            // error code. Name it explicitly.
            Err(e) => match e.as_service_error() {
                Some(service) if service.is_not_found() => Err(RemoteError::Service {
                    operation: HEAD_OBJECT,
                    code: Some(service.code().unwrap_or("NotFound").to_owned()),
                    message: service.message().map(str::to_owned),
                }),
                _ => Err(remote_error(HEAD_OBJECT, &e)),
            },
        }
    }

    async fn put(
        &self,
        location: &BundleLocation,
        payload: &BundlePayload,
    ) -> Result<(), RemoteError> {
        tracing::debug!(
            bucket = %location.bucket,
            key = %location.key,
            bytes = payload.len(),
            "PutObject",
        );
        self.client
            .put_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .body(ByteStream::from(payload.bytes.clone()))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| remote_error(PUT_OBJECT, &e))
    }
}

