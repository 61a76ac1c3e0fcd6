//! Shared AWS SDK configuration and error translation.
//!
//! Both service clients are built from one `SdkConfig` so they always talk to
//! the same region with the same credentials.

use std::error::Error;

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
// The S3 and Elastic Beanstalk crates re-export the same smithy error types.
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::domain::RemoteError;

/// Load SDK configuration for `region` from the default credential chain.
///
/// The SDK's retry layer is turned off: every call is attempted exactly once.
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    tracing::debug!(region, "loading AWS configuration");
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_owned()))
        .retry_config(RetryConfig::disabled())
        .load()
        .await
}

/// Translate an SDK failure into the domain's [`RemoteError`].
///
/// Responses without an error document (any `HEAD` failure) carry neither
/// code nor message; the HTTP status and the SDK's own description are kept
/// as the message instead.
pub(crate) fn remote_error<E>(
    operation: &'static str,
    err: &SdkError<E, HttpResponse>,
) -> RemoteError
where
    E: ProvideErrorMetadata + Error + 'static,
{
    match err.as_service_error() {
        Some(service) if service.code().is_none() && service.message().is_none() => {
            let detail = DisplayErrorContext(err);
            let message = match err.raw_response() {
                Some(response) => format!(
                    "HTTP {} without error details ({detail})",
                    response.status().as_u16()
                ),
                None => detail.to_string(),
            };
            RemoteError::Service {
                operation,
                code: None,
                message: Some(message),
            }
        }
        Some(service) => RemoteError::Service {
            operation,
            code: service.code().map(str::to_owned),
            message: service.message().map(str::to_owned),
        },
        None => RemoteError::Transport {
            operation,
            detail: DisplayErrorContext(err).to_string(),
        },
    }
}
