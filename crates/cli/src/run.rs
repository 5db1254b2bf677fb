//! The provisioning run: read, build, provision.

use csv_source::CsvSourceError;
use provisioner::{build_roster, provision, ProvisioningContext};
use roster::{GroupProvisioner, ProvisioningError, ProvisioningReport, UserDirectory};
use tracing::{info, info_span, warn, Instrument};

use crate::config::RunConfig;

/// Runs the whole pipeline once against `platform`.
///
/// The roster file is read before any API call is made.
pub async fn run<P>(
    platform: &P,
    config: &RunConfig,
) -> Result<ProvisioningReport, ProvisioningError>
where
    P: UserDirectory + GroupProvisioner,
{
    let context = ProvisioningContext::new(config.parent_group.clone());
    let span = info_span!("provisioning_run", run_id = %context.run_id);

    async {
        info!(
            parent_group = %config.parent_group,
            roster = %config.roster_path.display(),
            base_url = %config.base_url,
            "Starting provisioning run"
        );

        let table = csv_source::read_table(&config.roster_path).map_err(|err| {
            ProvisioningError::RosterUnreadable {
                path: config.roster_path.display().to_string(),
                message: csv_cause(&err),
            }
        })?;

        let built = build_roster(platform, &table.rows).await;
        info!(
            teams = built.roster.len(),
            unresolved = built.unresolved.len(),
            roster = %built.roster,
            "Built roster"
        );

        let report = provision(platform, &context, &built.roster).await?;
        for (team, failure) in report.failures() {
            warn!(team = %team, user_id = %failure.user, "Member was not added");
        }
        info!(
            teams = report.teams.len(),
            added = report.added_count(),
            failed = report.failed_count(),
            unresolved = built.unresolved.len(),
            "Provisioning finished"
        );
        Ok(report)
    }
    .instrument(span)
    .await
}

fn csv_cause(err: &CsvSourceError) -> String {
    match err {
        CsvSourceError::Open { source, .. } => source.to_string(),
        CsvSourceError::Parse { source, .. } => source.to_string(),
    }
}
