//! Command-line surface and the immutable run configuration built from it.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use gitlab::{AccessToken, DEFAULT_BASE_URL};
use roster::{ParentGroupId, ProvisioningError};

/// Create one GitLab subgroup per team listed in a roster CSV and add each
/// team's members as maintainers.
#[derive(Parser)]
#[command(name = "gitlab-teams", version)]
pub struct Cli {
    /// GitLab personal access token with `api` scope.
    #[arg(value_name = "PRIVATE_TOKEN")]
    pub private_token: String,

    /// Group the team subgroups are created under.
    #[arg(value_name = "GROUP_ID")]
    pub group_id: String,

    /// Roster CSV: header line, then `team number, user 1 .. user 4` per line.
    #[arg(value_name = "GROUPS_CSV")]
    pub groups_csv: PathBuf,

    /// GitLab API root.
    #[arg(long, env = "GITLAB_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout. Requests wait indefinitely when omitted.
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Everything a run needs, fixed for its whole duration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Sent as `PRIVATE-TOKEN` on every request.
    pub token: AccessToken,
    /// Group the team subgroups are created under.
    pub parent_group: ParentGroupId,
    /// Roster CSV to read.
    pub roster_path: PathBuf,
    /// GitLab API root.
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl RunConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ProvisioningError> {
        if cli.private_token.is_empty() {
            return Err(ProvisioningError::Configuration {
                message: "PRIVATE_TOKEN must not be empty".into(),
            });
        }
        let parent_group =
            ParentGroupId::new(cli.group_id).ok_or_else(|| ProvisioningError::Configuration {
                message: "GROUP_ID must not be empty".into(),
            })?;

        Ok(Self {
            token: AccessToken::new(cli.private_token),
            parent_group,
            roster_path: cli.groups_csv,
            base_url: cli.base_url,
            timeout: cli.timeout_secs.map(Duration::from_secs),
        })
    }
}
