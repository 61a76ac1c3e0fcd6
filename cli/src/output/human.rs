//! Human-readable terminal renderer.

use crate::application::services::release::ReleaseOutcome;
use crate::domain::{BundleLocation, BundlePresence, RegistrationOutcome, ReleaseConfig};
use crate::output::{OutputContext, REFUSAL_MESSAGE};

/// Renders results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the result of `ebver create`.
    ///
    /// The refusal message is printed even in quiet mode; it is the only
    /// explanation for the refusal exit status.
    pub fn render_release(&self, config: &ReleaseConfig, outcome: &ReleaseOutcome) {
        let location = config.bundle_location();
        match outcome {
            ReleaseOutcome::AlreadyExists => println!("{REFUSAL_MESSAGE}"),
            ReleaseOutcome::Created(RegistrationOutcome::Registered) => {
                self.ctx.success(&format!(
                    "Application version '{}' of '{}' created",
                    config.version_label, config.application
                ));
                self.ctx.kv("Bundle:", &location.to_string());
            }
            ReleaseOutcome::Created(RegistrationOutcome::Ignored(reason)) => {
                self.ctx.warn(&format!(
                    "Bundle uploaded, but version '{}' was not registered: application '{}' does not exist yet",
                    config.version_label, config.application
                ));
                self.ctx.kv("Bundle:", &location.to_string());
                self.ctx.kv("Platform:", reason.message());
            }
        }
    }

    /// Render the result of `ebver check`.
    pub fn render_presence(&self, location: &BundleLocation, presence: BundlePresence) {
        let word = if presence.is_found() {
            "present"
        } else {
            "absent"
        };
        println!("{location}: {word}");
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        println!("ebver {version}");
    }
}
