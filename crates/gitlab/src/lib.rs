//! GitLab infrastructure adapter for gitlab-teams.
//!
//! Implements [`roster::UserDirectory`] and [`roster::GroupProvisioner`] over
//! the GitLab REST API using `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. URL layout,
//! authentication headers, request encoding and response decoding live here;
//! the `provisioner` crate never sees them.
//!
//! ## Endpoints
//!
//! | Call | Request | Consumed from response |
//! |------|---------|------------------------|
//! | user lookup | `GET /users?username=<name>` | `id` of the first element |
//! | subgroup creation | `POST /groups/` (JSON `parent_id`, `name`, `path`) | `id` |
//! | membership | `POST /groups/<id>/members/` (form `user_id`, `access_level`) | status only |
//!
//! Every request carries the `PRIVATE-TOKEN` header. The API root is
//! injectable so tests can point the client at a local fake.

mod client;

pub use client::{AccessToken, GitLabClient, DEFAULT_BASE_URL};
