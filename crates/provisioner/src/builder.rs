//! Builds the team roster from spreadsheet rows.

use roster::{RosterReport, RosterRow, TeamLabel, UserDirectory};
use tracing::debug;

use crate::resolver::resolve_many;

/// Groups `rows` into a roster, resolving each row's usernames.
///
/// `rows` must not include the header. Rows with an empty team cell are
/// skipped. A later row with the same team number replaces the earlier one.
pub async fn build_roster<D>(directory: &D, rows: &[RosterRow]) -> RosterReport
where
    D: UserDirectory + ?Sized,
{
    let mut report = RosterReport::default();

    for row in rows {
        let Some(team_number) = row.team_number() else {
            continue;
        };
        let team = TeamLabel::from_team_number(team_number);
        let resolution = resolve_many(directory, row.member_cells()).await;

        debug!(team = %team, members = resolution.ids.len(), "Resolved team members");
        report.unresolved.extend(resolution.unresolved);
        report.roster.insert(team, resolution.ids);
    }

    report
}
