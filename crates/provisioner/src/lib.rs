//! Provisioning pipeline for gitlab-teams.
//!
//! This crate sequences calls between the roster domain and the platform
//! ports: it resolves usernames, builds the team roster, and provisions one
//! subgroup per team.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** Everything here talks to the platform through
//! [`roster::UserDirectory`] and [`roster::GroupProvisioner`]; no transport
//! details leak in.
//!
//! ## Flow
//!
//! Runs are strictly sequential, one call at a time:
//!
//! 1. [`build_roster`] walks the spreadsheet rows and, through
//!    [`resolve_many`], looks up each member username.
//! 2. [`provision`] creates each team's subgroup, then adds its members.

pub mod builder;
pub mod driver;
pub mod resolver;

#[cfg(test)]
mod mock;

pub use builder::build_roster;
pub use driver::{provision, ProvisioningContext};
pub use resolver::{resolve, resolve_many, Resolution};
