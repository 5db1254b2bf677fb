//! Shared value types for a provisioning run.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! the roster itself and the requests and responses exchanged with GitLab.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{GroupId, ParentGroupId, PathSlug, TeamLabel, UserId, Username};

// ---------------------------------------------------------------------------
// Roster spreadsheet layout
// ---------------------------------------------------------------------------

/// Column holding the team number.
pub const TEAM_NUMBER_COLUMN: usize = 0;

/// First column holding a member username.
pub const FIRST_MEMBER_COLUMN: usize = 1;

/// Number of member columns read per row. Cells past this are ignored.
pub const MAX_MEMBER_COLUMNS: usize = 4;

// ---------------------------------------------------------------------------
// Access levels
// ---------------------------------------------------------------------------

/// A GitLab membership access level.
///
/// GitLab encodes roles as integers (10 guest, 20 reporter, 30 developer,
/// 40 maintainer, 50 owner). Team members are always added as
/// [`AccessLevel::MAINTAINER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessLevel(u8);

impl AccessLevel {
    /// The "Maintainer" role.
    pub const MAINTAINER: Self = Self(40);

    /// Returns the numeric level sent to GitLab.
    pub fn as_u8(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Roster rows
// ---------------------------------------------------------------------------

/// One line of the roster spreadsheet.
///
/// No length invariant is enforced: short rows simply expose fewer cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RosterRow(Vec<String>);

impl RosterRow {
    /// Creates a row from its cells, in column order.
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Returns all cells of the row.
    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Returns the team number cell, or `None` if it is missing or empty.
    pub fn team_number(&self) -> Option<&str> {
        self.0
            .get(TEAM_NUMBER_COLUMN)
            .map(String::as_str)
            .filter(|cell| !cell.is_empty())
    }

    /// Returns the member username cells that exist in this row, empty cells
    /// included, up to [`MAX_MEMBER_COLUMNS`] of them.
    pub fn member_cells(&self) -> &[String] {
        let start = FIRST_MEMBER_COLUMN.min(self.0.len());
        let end = (FIRST_MEMBER_COLUMN + MAX_MEMBER_COLUMNS).min(self.0.len());
        &self.0[start..end]
    }
}

impl<S: Into<String>> FromIterator<S> for RosterRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// ---------------------------------------------------------------------------
// Team roster
// ---------------------------------------------------------------------------

/// Mapping from team label to the resolved members of that team.
///
/// Iteration follows first-insertion order. Inserting a label that is already
/// present replaces its member list but keeps its position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamRoster {
    teams: Vec<(TeamLabel, Vec<UserId>)>,
}

impl TeamRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `members` under `team`, returning the list it replaced.
    pub fn insert(&mut self, team: TeamLabel, members: Vec<UserId>) -> Option<Vec<UserId>> {
        match self.teams.iter_mut().find(|(label, _)| *label == team) {
            Some((_, existing)) => Some(std::mem::replace(existing, members)),
            None => {
                self.teams.push((team, members));
                None
            }
        }
    }

    /// Returns the members recorded for `team`.
    pub fn get(&self, team: &TeamLabel) -> Option<&[UserId]> {
        self.teams
            .iter()
            .find(|(label, _)| label == team)
            .map(|(_, members)| members.as_slice())
    }

    /// Iterates teams in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&TeamLabel, &[UserId])> {
        self.teams
            .iter()
            .map(|(label, members)| (label, members.as_slice()))
    }

    /// Number of teams.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Returns `true` if the roster holds no teams.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl std::fmt::Display for TeamRoster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (label, members)) in self.teams.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let ids: Vec<String> = members.iter().map(UserId::to_string).collect();
            write!(f, "\"{label}\": [{}]", ids.join(", "))?;
        }
        write!(f, "}}")
    }
}

// ---------------------------------------------------------------------------
// Group creation
// ---------------------------------------------------------------------------

/// Body of a subgroup-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubgroupRequest {
    /// Group the new subgroup is created under.
    pub parent_id: ParentGroupId,
    /// Display name of the subgroup.
    pub name: TeamLabel,
    /// URL path segment of the subgroup.
    pub path: PathSlug,
}

impl SubgroupRequest {
    /// Builds the request for a team, deriving the path from its label.
    pub fn for_team(parent_id: &ParentGroupId, team: &TeamLabel) -> Self {
        Self {
            parent_id: parent_id.clone(),
            name: team.clone(),
            path: PathSlug::from_label(team),
        }
    }
}

/// GitLab's response to a successful subgroup-creation call.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedGroup {
    /// Identifier of the new subgroup.
    pub id: GroupId,
    /// The full response body, kept for logging.
    pub raw: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Lookup failures
// ---------------------------------------------------------------------------

/// A username that could not be resolved to a GitLab user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedUser {
    /// The username as written in the spreadsheet.
    pub username: Username,
    /// Why the lookup failed (empty result, transport error, bad response).
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RosterRow {
        cells.iter().copied().collect()
    }

    fn label(s: &str) -> TeamLabel {
        TeamLabel::new(s).unwrap()
    }

    #[test]
    fn maintainer_is_level_forty() {
        assert_eq!(AccessLevel::MAINTAINER.as_u8(), 40);
    }

    #[test]
    fn team_number_is_none_for_empty_or_missing_cell() {
        assert_eq!(row(&["", "alice"]).team_number(), None);
        assert_eq!(RosterRow::default().team_number(), None);
        assert_eq!(row(&["5"]).team_number(), Some("5"));
    }

    #[test]
    fn member_cells_stop_after_four_columns() {
        let r = row(&["1", "a", "b", "c", "d", "e", "f"]);
        assert_eq!(r.member_cells(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn member_cells_tolerate_short_rows() {
        assert_eq!(row(&["1", "a"]).member_cells(), ["a"]);
        assert!(row(&["1"]).member_cells().is_empty());
        assert!(RosterRow::default().member_cells().is_empty());
    }

    #[test]
    fn roster_overwrite_keeps_first_position() {
        let mut roster = TeamRoster::new();
        roster.insert(label("Team 1"), vec![UserId::new(1)]);
        roster.insert(label("Team 2"), vec![UserId::new(2)]);
        let replaced = roster.insert(label("Team 1"), vec![UserId::new(3)]);

        assert_eq!(replaced, Some(vec![UserId::new(1)]));
        let order: Vec<&str> = roster.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(order, ["Team 1", "Team 2"]);
        assert_eq!(roster.get(&label("Team 1")), Some(&[UserId::new(3)][..]));
    }

    #[test]
    fn roster_display_lists_teams_and_ids() {
        let mut roster = TeamRoster::new();
        roster.insert(label("Team 1"), vec![UserId::new(7), UserId::new(8)]);
        roster.insert(label("Team 3"), vec![]);
        assert_eq!(roster.to_string(), r#"{"Team 1": [7, 8], "Team 3": []}"#);
    }

    #[test]
    fn subgroup_request_derives_path_from_label() {
        let parent = ParentGroupId::new("991").unwrap();
        let request = SubgroupRequest::for_team(&parent, &label("Team 12"));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"parent_id": "991", "name": "Team 12", "path": "Team-12"})
        );
    }
}
