//! Per-item outcome records collected during a run.
//!
//! Failures on a single username or a single membership call never abort the
//! run. They are recorded here instead, so callers can inspect what happened
//! without scraping log output.

use serde::{Deserialize, Serialize};

use crate::{GroupId, ProvisioningRunId, TeamLabel, TeamRoster, Timestamp, UnresolvedUser, UserId};

/// Output of the roster builder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RosterReport {
    /// Teams and their resolved members.
    pub roster: TeamRoster,
    /// Usernames dropped because they could not be resolved, in lookup order.
    pub unresolved: Vec<UnresolvedUser>,
}

/// Result of one membership-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberOutcome {
    /// The member that was added (or not).
    pub user: UserId,
    /// `Err` carries the failure description.
    pub result: Result<(), String>,
}

impl MemberOutcome {
    /// Returns `true` if the member was added.
    pub fn is_added(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything done for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamOutcome {
    /// Team label used as the subgroup name.
    pub team: TeamLabel,
    /// Identifier of the created subgroup.
    pub group: GroupId,
    /// One entry per member, in roster order.
    pub members: Vec<MemberOutcome>,
}

/// Outcome of a full provisioning pass.
///
/// A team appears here once its subgroup exists, even if some or all of its
/// membership calls failed. Nothing is rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisioningReport {
    /// Run the report belongs to.
    pub run_id: ProvisioningRunId,
    /// When the first subgroup call was about to be made.
    pub started_at: Timestamp,
    /// When the last team was done.
    pub finished_at: Timestamp,
    /// One entry per provisioned team, in roster order.
    pub teams: Vec<TeamOutcome>,
}

impl ProvisioningReport {
    /// Number of members added across all teams.
    pub fn added_count(&self) -> usize {
        self.members().filter(|(_, m)| m.is_added()).count()
    }

    /// Number of membership calls that failed across all teams.
    pub fn failed_count(&self) -> usize {
        self.members().filter(|(_, m)| !m.is_added()).count()
    }

    /// Failed memberships with the team they belong to.
    pub fn failures(&self) -> impl Iterator<Item = (&TeamLabel, &MemberOutcome)> {
        self.members().filter(|(_, m)| !m.is_added())
    }

    fn members(&self) -> impl Iterator<Item = (&TeamLabel, &MemberOutcome)> {
        self.teams
            .iter()
            .flat_map(|t| t.members.iter().map(move |m| (&t.team, m)))
    }
}
