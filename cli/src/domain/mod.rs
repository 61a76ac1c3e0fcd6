//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod bundle;
pub mod config;
pub mod error;
pub mod version;

pub use bundle::{BundleLocation, BundlePayload, BundlePresence, PayloadSource};
pub use config::ReleaseConfig;
pub use error::{ConfigError, RemoteError};
pub use version::{IgnoredReason, RegistrationOutcome, VersionRequest, is_application_not_found};
