//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Upload and register Elastic Beanstalk application versions
#[derive(Parser)]
#[command(
    name = "ebver",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (`NO_COLOR` in the environment also works)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload the source bundle and register the application version
    Create(commands::CreateArgs),

    /// Report whether the source bundle is already stored
    Check(commands::ReleaseArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            no_color,
            quiet,
            json,
        });
        match command {
            Command::Create(args) => commands::create::run(&app, args).await,
            Command::Check(args) => {
                commands::check::run(&app, args).await?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Version => {
                commands::version::run(&app)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
