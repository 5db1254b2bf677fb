//! Newtype domain identifiers.
//!
//! Every identity in a provisioning run is a distinct newtype wrapping a
//! primitive. A [`UserId`] and a [`GroupId`] are both GitLab-assigned `u64`
//! values, but they can never be swapped at a call site.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Macro for u64-wrapped newtypes (GitLab-assigned integers).
// Generates: struct (Copy), new(), as_u64(), Display.
// ---------------------------------------------------------------------------
macro_rules! u64_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new identifier from a raw integer.
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer value.
            pub fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — GitLab-integer-backed
// ---------------------------------------------------------------------------

u64_id! {
    /// A GitLab user, as returned by the user directory lookup.
    UserId
}

u64_id! {
    /// A GitLab group created during the run.
    ///
    /// Only subgroups created by the provisioning driver carry this type; the
    /// parent group arrives from the command line as a [`ParentGroupId`].
    GroupId
}

// ---------------------------------------------------------------------------
// Identifiers — UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single invocation of the provisioning tool.
///
/// Generated fresh for every run and attached to the root tracing span so all
/// events from one run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProvisioningRunId(Uuid);

impl ProvisioningRunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ProvisioningRunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers — String-backed (command line / spreadsheet values)
// ---------------------------------------------------------------------------

string_id! {
    /// The group under which every team subgroup is created.
    ///
    /// Kept as the opaque string the operator typed; GitLab accepts it as
    /// `parent_id` unchanged.
    ParentGroupId
}

string_id! {
    /// A GitLab username as written in the roster spreadsheet.
    Username
}

string_id! {
    /// Display name of a team subgroup (e.g. `"Team 7"`).
    TeamLabel
}

string_id! {
    /// URL path segment of a team subgroup (e.g. `"Team-7"`).
    PathSlug
}

impl TeamLabel {
    /// Derives the label for a team number cell: `"Team " + number`.
    pub fn from_team_number(number: &str) -> Self {
        Self(format!("Team {number}"))
    }
}

impl PathSlug {
    /// Derives the path slug for a team label by replacing every space with a
    /// hyphen.
    pub fn from_label(label: &TeamLabel) -> Self {
        Self(label.as_str().replace(' ', "-"))
    }
}
