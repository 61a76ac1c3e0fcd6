//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed object on
//! stdout: a result object on success or refusal, an error object on failure.

use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::application::services::release::ReleaseOutcome;
use crate::domain::{
    BundleLocation, BundlePresence, ConfigError, RegistrationOutcome, ReleaseConfig, RemoteError,
};
use crate::output::REFUSAL_MESSAGE;

/// Machine-readable renderer. Stateless.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print the result object for `ebver create`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_release(&self, config: &ReleaseConfig, outcome: &ReleaseOutcome) -> Result<()> {
        print_pretty(&release_report(config, outcome))
    }

    /// Print the result object for `ebver check`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_presence(&self, location: &BundleLocation, presence: BundlePresence) -> Result<()> {
        print_pretty(&presence_report(location, presence))
    }

    /// Print the version object.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print_pretty(&json!({ "version": version }))
    }
}

fn print_pretty(value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{text}");
    Ok(())
}

/// Result object for `ebver create`.
#[must_use]
pub fn release_report(config: &ReleaseConfig, outcome: &ReleaseOutcome) -> Value {
    let mut report = json!({
        "application": config.application,
        "version_label": config.version_label,
        "bucket": config.bucket,
        "key": config.key,
    });
    let extra = match outcome {
        ReleaseOutcome::AlreadyExists => json!({
            "status": "already_exists",
            "message": REFUSAL_MESSAGE,
        }),
        ReleaseOutcome::Created(RegistrationOutcome::Registered) => json!({
            "status": "created",
            "registration": "registered",
            "reason": Value::Null,
        }),
        ReleaseOutcome::Created(RegistrationOutcome::Ignored(reason)) => json!({
            "status": "created",
            "registration": "ignored",
            "reason": reason.message(),
        }),
    };
    if let (Value::Object(base), Value::Object(extra)) = (&mut report, extra) {
        base.extend(extra);
    }
    report
}

/// Result object for `ebver check`.
#[must_use]
pub fn presence_report(location: &BundleLocation, presence: BundlePresence) -> Value {
    json!({
        "bucket": location.bucket,
        "key": location.key,
        "present": presence.is_found(),
    })
}

/// Stable error code for the JSON error object.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<ConfigError>().is_some() {
        return "INVALID_CONFIG";
    }
    if err.chain().any(|cause| cause.downcast_ref::<RemoteError>().is_some()) {
        return "REMOTE_ERROR";
    }
    "ERROR"
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
