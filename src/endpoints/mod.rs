//! # Jira API Endpoints
//!
//! Organized endpoint implementations for different Jira API resource types,
//! covering user administration and group membership management.

pub mod groups;
pub mod users;
