//! Port traits for the hosting platform.
//!
//! The provisioner crate drives a run entirely through these traits. The
//! `gitlab` crate implements them over HTTP; tests implement them in memory.

use async_trait::async_trait;

use crate::{AccessLevel, ApiError, CreatedGroup, GroupId, SubgroupRequest, UserId, Username};

/// Looks up platform users by username.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Returns the identifier of the user with exactly this username.
    ///
    /// `Ok(None)` means the platform answered with an empty result set.
    async fn find_user(&self, username: &Username) -> Result<Option<UserId>, ApiError>;
}

/// Creates subgroups and memberships.
#[async_trait]
pub trait GroupProvisioner: Send + Sync {
    /// Creates a subgroup and returns the platform's description of it.
    ///
    /// Must fail with [`ApiError::MissingField`] when the response carries no
    /// group identifier.
    async fn create_subgroup(&self, request: &SubgroupRequest) -> Result<CreatedGroup, ApiError>;

    /// Adds `user` to `group` at `level`.
    async fn add_member(
        &self,
        group: GroupId,
        user: UserId,
        level: AccessLevel,
    ) -> Result<(), ApiError>;
}
