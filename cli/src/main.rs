//! ebver - upload and register Elastic Beanstalk application versions

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ebver_cli::cli::Cli;
use ebver_cli::output::json::{error_code, format_error};

// Remote calls are awaited one after another; a single thread is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout is reserved for results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let json = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            let message = format!("{e:#}");
            tracing::debug!(error = %message, "command failed");
            if json {
                match format_error(&message, error_code(&e)) {
                    Ok(obj) => println!("{obj}"),
                    Err(_) => eprintln!("Error: {message}"),
                }
            } else {
                eprintln!("Error: {message}");
            }
            ExitCode::FAILURE
        }
    }
}
