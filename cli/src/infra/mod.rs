//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the AWS SDK clients for S3
//! and Elastic Beanstalk, and the shared SDK configuration.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod aws;
pub mod beanstalk;
pub mod s3;
