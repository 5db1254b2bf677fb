//! Concrete [`GitLabClient`] over the GitLab REST API (v4).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, RequestBuilder, Response};
use roster::{
    AccessLevel, ApiError, CreatedGroup, GroupId, GroupProvisioner, SubgroupRequest, UserDirectory,
    UserId, Username,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// API root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://gitlab.stud.idi.ntnu.no/api/v4";

/// Header GitLab reads personal access tokens from.
const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// A GitLab personal access token.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    id: UserId,
}

#[derive(Debug, Serialize)]
struct MemberForm {
    user_id: UserId,
    access_level: AccessLevel,
}

/// Talks to one GitLab instance with one access token.
///
/// A single `reqwest` client is built up front and reused for every call.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    base_url: String,
    token: AccessToken,
    http: ReqwestClient,
}

impl GitLabClient {
    /// Creates a client for the API rooted at `base_url` (e.g.
    /// `https://gitlab.example.com/api/v4`).
    ///
    /// Requests never time out unless `timeout` is given.
    pub fn new(
        base_url: &str,
        token: AccessToken,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::transport)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            http,
        })
    }

    /// Returns the API root without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(PRIVATE_TOKEN_HEADER, self.token.expose())
    }
}

/// Sends `request` and returns its status and body.
async fn send(request: RequestBuilder) -> Result<(reqwest::StatusCode, String), ApiError> {
    let response: Response = request.send().await.map_err(ApiError::transport)?;
    let status = response.status();
    let body = response.text().await.map_err(ApiError::transport)?;
    Ok((status, body))
}

#[async_trait]
impl UserDirectory for GitLabClient {
    async fn find_user(&self, username: &Username) -> Result<Option<UserId>, ApiError> {
        let request = self
            .authorized(self.http.get(self.endpoint("users")))
            .query(&[("username", username.as_str())]);
        let (status, body) = send(request).await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let users: Vec<UserRecord> = serde_json::from_str(&body).map_err(ApiError::decode)?;
        debug!(username = %username, matches = users.len(), "User lookup");
        Ok(users.first().map(|user| user.id))
    }
}

#[async_trait]
impl GroupProvisioner for GitLabClient {
    async fn create_subgroup(&self, request: &SubgroupRequest) -> Result<CreatedGroup, ApiError> {
        let http_request = self
            .authorized(self.http.post(self.endpoint("groups/")))
            .json(request);
        let (status, body) = send(http_request).await?;

        let raw: serde_json::Value = serde_json::from_str(&body).map_err(ApiError::decode)?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let id = raw
            .get("id")
            .and_then(serde_json::Value::as_u64)
            .map(GroupId::new)
            .ok_or(ApiError::MissingField { field: "id" })?;
        Ok(CreatedGroup { id, raw })
    }

    async fn add_member(
        &self,
        group: GroupId,
        user: UserId,
        level: AccessLevel,
    ) -> Result<(), ApiError> {
        let form = MemberForm {
            user_id: user,
            access_level: level,
        };
        let request = self
            .authorized(self.http.post(self.endpoint(&format!("groups/{group}/members/"))))
            .form(&form);
        let (status, body) = send(request).await?;
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> GitLabClient {
        GitLabClient::new(base, AccessToken::new("glpat-secret"), None).unwrap()
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        assert_eq!(
            client("https://gitlab.example.com/api/v4/").base_url(),
            "https://gitlab.example.com/api/v4"
        );
    }

    #[test]
    fn endpoints_join_onto_base_url() {
        let c = client(DEFAULT_BASE_URL);
        assert_eq!(
            c.endpoint("groups/"),
            "https://gitlab.stud.idi.ntnu.no/api/v4/groups/"
        );
        assert_eq!(
            c.endpoint(&format!("groups/{}/members/", GroupId::new(12))),
            "https://gitlab.stud.idi.ntnu.no/api/v4/groups/12/members/"
        );
    }

    #[test]
    fn debug_output_redacts_token() {
        let rendered = format!("{:?}", client(DEFAULT_BASE_URL));
        assert!(!rendered.contains("glpat-secret"));
        assert!(rendered.contains("AccessToken(***)"));
    }

    #[test]
    fn member_form_matches_gitlab_encoding() {
        let form = MemberForm {
            user_id: UserId::new(77),
            access_level: AccessLevel::MAINTAINER,
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({"user_id": 77, "access_level": 40})
        );
    }
}
