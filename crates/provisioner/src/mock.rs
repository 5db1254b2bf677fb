//! In-memory port implementations for tests.
//!
//! Both mocks record every call so tests can assert on what was sent, not
//! only on what came back.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use roster::{
    AccessLevel, ApiError, CreatedGroup, GroupId, GroupProvisioner, SubgroupRequest, UserDirectory,
    UserId, Username,
};

/// User directory backed by a username → result map.
///
/// Unknown usernames resolve to an empty result set.
#[derive(Default)]
pub struct MockDirectory {
    users: HashMap<String, Result<UserId, ApiError>>,
    lookups: Mutex<Vec<String>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, username: &str, id: u64) -> Self {
        self.users.insert(username.to_string(), Ok(UserId::new(id)));
        self
    }

    pub fn with_error(mut self, username: &str, err: ApiError) -> Self {
        self.users.insert(username.to_string(), Err(err));
        self
    }

    /// Usernames looked up so far, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserDirectory for MockDirectory {
    async fn find_user(&self, username: &Username) -> Result<Option<UserId>, ApiError> {
        self.lookups.lock().unwrap().push(username.to_string());
        match self.users.get(username.as_str()) {
            Some(Ok(id)) => Ok(Some(*id)),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(None),
        }
    }
}

/// Group provisioner that hands out sequential group identifiers.
pub struct MockGroups {
    next_id: Mutex<u64>,
    failing_groups: HashMap<String, ApiError>,
    failing_members: HashSet<UserId>,
    created: Mutex<Vec<SubgroupRequest>>,
    memberships: Mutex<Vec<(GroupId, UserId, AccessLevel)>>,
}

impl MockGroups {
    /// Creates a mock whose first subgroup gets identifier `first_id`.
    pub fn new(first_id: u64) -> Self {
        Self {
            next_id: Mutex::new(first_id),
            failing_groups: HashMap::new(),
            failing_members: HashSet::new(),
            created: Mutex::new(Vec::new()),
            memberships: Mutex::new(Vec::new()),
        }
    }

    /// Makes subgroup creation for `team` fail with `err`.
    pub fn failing_group(mut self, team: &str, err: ApiError) -> Self {
        self.failing_groups.insert(team.to_string(), err);
        self
    }

    /// Makes every membership call for `user` fail with a 404.
    pub fn failing_member(mut self, user: u64) -> Self {
        self.failing_members.insert(UserId::new(user));
        self
    }

    /// Every subgroup request received, failed ones included.
    pub fn created(&self) -> Vec<SubgroupRequest> {
        self.created.lock().unwrap().clone()
    }

    /// Every membership call received, failed ones included.
    pub fn memberships(&self) -> Vec<(GroupId, UserId, AccessLevel)> {
        self.memberships.lock().unwrap().clone()
    }
}

#[async_trait]
impl GroupProvisioner for MockGroups {
    async fn create_subgroup(&self, request: &SubgroupRequest) -> Result<CreatedGroup, ApiError> {
        self.created.lock().unwrap().push(request.clone());
        if let Some(err) = self.failing_groups.get(request.name.as_str()) {
            return Err(err.clone());
        }

        let mut next_id = self.next_id.lock().unwrap();
        let id = GroupId::new(*next_id);
        *next_id += 1;
        Ok(CreatedGroup {
            id,
            raw: serde_json::json!({ "id": id.as_u64(), "name": request.name.as_str() }),
        })
    }

    async fn add_member(
        &self,
        group: GroupId,
        user: UserId,
        level: AccessLevel,
    ) -> Result<(), ApiError> {
        self.memberships.lock().unwrap().push((group, user, level));
        if self.failing_members.contains(&user) {
            return Err(ApiError::Status {
                status: 404,
                body: r#"{"message":"404 User Not Found"}"#.to_string(),
            });
        }
        Ok(())
    }
}
