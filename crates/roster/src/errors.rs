//! Error types for a provisioning run.
//!
//! [`ApiError`] is what the port traits in [`crate::ports`] return for a single
//! call. [`ProvisioningError`] covers the conditions that end the run: once one
//! of these is produced nothing further is attempted.
//!
//! Whether an [`ApiError`] is fatal depends on where it happens. A failed
//! lookup or membership call is recorded and the run continues; a failed
//! subgroup creation becomes [`ProvisioningError::GroupCreationFailed`].

use thiserror::Error;

use crate::TeamLabel;

// ---------------------------------------------------------------------------
// Component-level errors
// ---------------------------------------------------------------------------

/// Failure of a single call to the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("Transport error: {message}")]
    Transport {
        /// Description from the HTTP client.
        message: String,
    },

    /// The platform answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("Malformed response: {message}")]
    Decode {
        /// Description of the decoding problem.
        message: String,
    },

    /// The response parsed but lacked a field the caller depends on.
    #[error("Response is missing field '{field}'")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
}

impl ApiError {
    /// Builds an [`ApiError::Transport`] from any displayable error.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }

    /// Builds an [`ApiError::Decode`] from any displayable error.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Run-level errors
// ---------------------------------------------------------------------------

/// Errors that terminate the run.
///
/// Teams provisioned before the failure are left as they are.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// The roster spreadsheet could not be opened or parsed.
    #[error("Could not read roster '{path}': {message}")]
    RosterUnreadable {
        /// Path given on the command line.
        path: String,
        /// Underlying I/O or CSV error.
        message: String,
    },

    /// A subgroup could not be created, or its response carried no identifier.
    ///
    /// Produced by: the provisioning driver. Membership calls for this team
    /// depend on the new identifier, so the run stops here.
    #[error("Could not create subgroup for '{team}': {source}")]
    GroupCreationFailed {
        /// Team whose subgroup was being created.
        team: TeamLabel,
        /// The failed call.
        #[source]
        source: ApiError,
    },

    /// The run configuration is invalid.
    ///
    /// Produced before any API call is made.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl ProvisioningError {
    /// Process exit status for this error.
    ///
    /// Usage errors exit with 2 before a [`ProvisioningError`] can exist;
    /// every runtime failure exits with 1.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::RosterUnreadable { .. }
            | Self::GroupCreationFailed { .. }
            | Self::Configuration { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_creation_message_names_team_and_cause() {
        let err = ProvisioningError::GroupCreationFailed {
            team: TeamLabel::from_team_number("4"),
            source: ApiError::MissingField { field: "id" },
        };
        assert_eq!(
            err.to_string(),
            "Could not create subgroup for 'Team 4': Response is missing field 'id'"
        );
        assert_eq!(err.exit_code(), 1);
    }
}
