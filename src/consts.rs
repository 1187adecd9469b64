//! Constants for the jira-directory client.

/// Path prefix for the versioned Jira REST API all endpoints live under.
pub const REST_API_BASE: &str = "/rest/api/2";

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Header the server requires before it honors the `accountId` field when
/// adding a user to a group.
pub const FORCE_ACCOUNT_ID_HEADER: &str = "force-account-id";
