//! # Jira Directory Client
//!
//! Provides Jira REST API integration for user and group administration,
//! covering user lookup, creation, deletion, and search, plus group
//! membership management and the picker search used for group autocomplete.
//!
//! Every operation is a single stateless round trip: build the request,
//! dispatch it, decode the JSON response into a typed model, and surface
//! failures as [`Error`] values that keep the HTTP status and body for
//! caller inspection.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export endpoint parameter builders
pub use endpoints::users::UserSearch;
// Re-export errors
pub use error::{Error, Result};
// Re-export models
pub use models::{
  AvatarUrls, Group, GroupDetails, GroupLabel, GroupList, GroupMember, GroupSearchOptions, JiraAuth, NoContent, User,
  UserGroup, UserGroups,
};
