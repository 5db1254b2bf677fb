//! Creates one subgroup per team and adds the team's members to it.

use roster::{
    AccessLevel, GroupProvisioner, MemberOutcome, ParentGroupId, ProvisioningError,
    ProvisioningReport, ProvisioningRunId, SubgroupRequest, TeamOutcome, TeamRoster, Timestamp,
};
use tracing::{debug, info, info_span, warn, Instrument};

/// Run-wide values shared by every provisioning call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningContext {
    /// Correlates the report and log events of this run.
    pub run_id: ProvisioningRunId,
    /// Group every team subgroup is created under.
    pub parent_group: ParentGroupId,
    /// Level granted to every member.
    pub access_level: AccessLevel,
}

impl ProvisioningContext {
    /// Context for a new run granting [`AccessLevel::MAINTAINER`].
    pub fn new(parent_group: ParentGroupId) -> Self {
        Self {
            run_id: ProvisioningRunId::new_random(),
            parent_group,
            access_level: AccessLevel::MAINTAINER,
        }
    }
}

/// Provisions every team of `roster`, in roster order.
///
/// A failed membership call is recorded in the report and the next member is
/// attempted. A failed subgroup creation stops the run; subgroups already
/// created stay in place.
pub async fn provision<G>(
    groups: &G,
    context: &ProvisioningContext,
    roster: &TeamRoster,
) -> Result<ProvisioningReport, ProvisioningError>
where
    G: GroupProvisioner + ?Sized,
{
    let started_at = Timestamp::now();
    let mut teams = Vec::with_capacity(roster.len());

    for (team, members) in roster.iter() {
        let span = info_span!("provision_team", team = %team);
        let outcome = async {
            let request = SubgroupRequest::for_team(&context.parent_group, team);
            let created = groups.create_subgroup(&request).await.map_err(|source| {
                ProvisioningError::GroupCreationFailed {
                    team: team.clone(),
                    source,
                }
            })?;
            info!(
                group_id = %created.id,
                path = %request.path,
                raw = %created.raw,
                "Created subgroup"
            );

            let mut outcomes = Vec::with_capacity(members.len());
            for &user in members {
                let result = groups
                    .add_member(created.id, user, context.access_level)
                    .await
                    .map_err(|err| err.to_string());
                match &result {
                    Ok(()) => debug!(user_id = %user, "Added member"),
                    Err(reason) => warn!(
                        user_id = %user,
                        reason = %reason,
                        "Request to add {user} to {team} failed"
                    ),
                }
                outcomes.push(MemberOutcome { user, result });
            }

            Ok::<_, ProvisioningError>(TeamOutcome {
                team: team.clone(),
                group: created.id,
                members: outcomes,
            })
        }
        .instrument(span)
        .await?;
        teams.push(outcome);
    }

    Ok(ProvisioningReport {
        run_id: context.run_id,
        started_at,
        finished_at: Timestamp::now(),
        teams,
    })
}
