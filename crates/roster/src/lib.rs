//! Core domain for gitlab-teams.
//!
//! This crate contains every domain concept, newtype identifier, roster value
//! type, and error type used by a provisioning run. Infrastructure crates
//! implement the traits defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Domain types + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`UserId`, `GroupId`, `TeamLabel`, etc.) |
//! | [`types`] | Roster rows, the team roster, access levels, group requests |
//! | [`report`] | Per-item outcomes and the run report |
//! | [`errors`] | Call-level and run-level error types |
//! | [`ports`] | `UserDirectory` and `GroupProvisioner` traits |

pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod report;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{ApiError, ProvisioningError};
pub use identifiers::{
    GroupId, ParentGroupId, PathSlug, ProvisioningRunId, TeamLabel, UserId, Username,
};
pub use ports::{GroupProvisioner, UserDirectory};
pub use report::{MemberOutcome, ProvisioningReport, RosterReport, TeamOutcome};
pub use types::{
    AccessLevel, CreatedGroup, RosterRow, SubgroupRequest, TeamRoster, Timestamp, UnresolvedUser,
    FIRST_MEMBER_COLUMN, MAX_MEMBER_COLUMNS, TEAM_NUMBER_COLUMN,
};
