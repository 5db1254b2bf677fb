//! gitlab-teams CLI entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Parse arguments** — three positionals (token, parent group, roster
//!    CSV) plus options; fewer than three prints usage and exits with 2.
//! 2. **Wire observability** — configure `tracing-subscriber` with a text or
//!    JSON layer. All `tracing` spans and structured events emitted by every
//!    crate in the workspace flow through this layer.
//! 3. **Construct infrastructure** — create the [`gitlab::GitLabClient`] and
//!    hand it to the run as both user directory and group provisioner.
//! 4. **Run once** — read the roster, resolve members, provision subgroups,
//!    and map a fatal error to exit status 1.

use std::process::ExitCode;

use clap::Parser;
use gitlab::GitLabClient;
use roster::ProvisioningError;
use tracing::error;

mod config;
mod observability;
mod run;

use config::{Cli, RunConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = observability::init(cli.log_format) {
        eprintln!("error: could not initialise logging: {err:#}");
        return ExitCode::FAILURE;
    }

    match start(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Provisioning aborted");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn start(cli: Cli) -> Result<(), ProvisioningError> {
    let config = RunConfig::from_cli(cli)?;
    let client = GitLabClient::new(&config.base_url, config.token.clone(), config.timeout)
        .map_err(|err| ProvisioningError::Configuration {
            message: err.to_string(),
        })?;

    run::run(&client, &config).await?;
    Ok(())
}
