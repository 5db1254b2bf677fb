//! Username → user identifier resolution.
//!
//! Lookups are best effort. A username that cannot be resolved, for whatever
//! reason, is logged and reported as an [`UnresolvedUser`]; it never fails the
//! batch it belongs to.

use roster::{UnresolvedUser, UserDirectory, UserId, Username};
use tracing::{debug, warn};

/// Result of resolving a batch of usernames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved identifiers, in input order.
    pub ids: Vec<UserId>,
    /// Usernames that could not be resolved, in input order.
    pub unresolved: Vec<UnresolvedUser>,
}

/// Resolves a single username.
///
/// An empty result set, a transport failure and a malformed response are all
/// treated alike: the username is reported as not found.
pub async fn resolve<D>(directory: &D, username: &Username) -> Result<UserId, UnresolvedUser>
where
    D: UserDirectory + ?Sized,
{
    let reason = match directory.find_user(username).await {
        Ok(Some(id)) => {
            debug!(username = %username, user_id = %id, "Resolved username");
            return Ok(id);
        }
        Ok(None) => "no user with this username".to_string(),
        Err(err) => err.to_string(),
    };

    warn!(username = %username, reason = %reason, "Could not find id for username");
    Err(UnresolvedUser {
        username: username.clone(),
        reason,
    })
}

/// Resolves every non-empty username in `usernames`, in order.
///
/// Empty cells are skipped without a lookup.
pub async fn resolve_many<D, S>(directory: &D, usernames: &[S]) -> Resolution
where
    D: UserDirectory + ?Sized,
    S: AsRef<str>,
{
    let mut resolution = Resolution::default();
    for cell in usernames {
        let Some(username) = Username::new(cell.as_ref()) else {
            continue;
        };
        match resolve(directory, &username).await {
            Ok(id) => resolution.ids.push(id),
            Err(unresolved) => resolution.unresolved.push(unresolved),
        }
    }
    resolution
}
