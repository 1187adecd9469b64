//! # Jira User Endpoints
//!
//! Jira API endpoint implementations for user administration, including
//! lookup, creation, deletion, group listings, and search.

use reqwest::Method;
use tracing::instrument;

use crate::client::{JiraClient, decode_json, expect_no_content, query_escape};
use crate::error::Result;
use crate::models::{NoContent, User, UserGroup};

/// Ordered, append-only filter set for [`JiraClient::find_users`].
///
/// Filters render into the query string in the order they were added, joined
/// by `&` with no trailing separator. Nothing is deduplicated: adding the
/// same filter twice emits it twice, and which one wins is up to the server.
#[derive(Debug, Clone, Default)]
pub struct UserSearch {
  params: Vec<(&'static str, String)>,
}

impl UserSearch {
  /// Create an empty filter set.
  pub fn new() -> Self {
    Self::default()
  }

  /// Limit the number of results returned (`maxResults`).
  pub fn max_results(mut self, max_results: u32) -> Self {
    self.params.push(("maxResults", max_results.to_string()));
    self
  }

  /// Set the pagination offset (`startAt`).
  pub fn start_at(mut self, start_at: u64) -> Self {
    self.params.push(("startAt", start_at.to_string()));
    self
  }

  /// Include active users in the results (`includeActive`).
  pub fn active(mut self, active: bool) -> Self {
    self.params.push(("includeActive", active.to_string()));
    self
  }

  /// Include inactive users in the results (`includeInactive`).
  pub fn inactive(mut self, inactive: bool) -> Self {
    self.params.push(("includeInactive", inactive.to_string()));
    self
  }

  /// Free-text query matched against email, username, and display name.
  pub fn query(mut self, query: &str) -> Self {
    self.params.push(("query", query.to_string()));
    self
  }

  /// Filter by username. The value is percent-encoded before it is embedded
  /// in the query string.
  pub fn username(mut self, username: &str) -> Self {
    self.params.push(("username", query_escape(username)));
    self
  }

  pub(crate) fn to_query_string(&self) -> String {
    let pairs: Vec<String> = self
      .params
      .iter()
      .map(|(name, value)| format!("{name}={value}"))
      .collect();
    pairs.join("&")
  }
}

impl JiraClient {
  /// Get a user by exact username
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user(&self, username: &str) -> Result<User> {
    self.get_user_with_params(&[("username", username)]).await
  }

  /// Get a user with an arbitrary set of query parameters
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user_with_params(&self, params: &[(&str, &str)]) -> Result<User> {
    let url = self.api_url("/user");

    let response = self.request(Method::GET, &url).query(params).send().await?;
    decode_json(response).await
  }

  /// Create a user.
  ///
  /// The `password` field is serialized into the request payload when set;
  /// the created user returned by the server never carries it back.
  #[instrument(skip(self, user), level = "debug")]
  pub async fn create_user(&self, user: &User) -> Result<User> {
    let url = self.api_url("/user");

    let response = self.request(Method::POST, &url).json(user).send().await?;
    decode_json(response).await
  }

  /// Delete a user by username.
  ///
  /// Jira answers `204 No Content` on success.
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_user(&self, username: &str) -> Result<NoContent> {
    let url = self.api_url(&format!("/user?username={}", query_escape(username)));

    let response = self.request(Method::DELETE, &url).send().await?;
    expect_no_content(response).await
  }

  /// Get the groups a user belongs to
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user_groups(&self, username: &str) -> Result<Vec<UserGroup>> {
    let url = self.api_url(&format!("/user/groups?username={}", query_escape(username)));

    let response = self.request(Method::GET, &url).send().await?;
    decode_json(response).await
  }

  /// Get the currently authenticated user
  #[instrument(skip(self), level = "debug")]
  pub async fn get_current_user(&self) -> Result<User> {
    let url = self.api_url("/myself");

    let response = self.request(Method::GET, &url).send().await?;
    decode_json(response).await
  }

  /// Search for users by email, username, or display name.
  ///
  /// The filters in `search` are applied in the order they were added; an
  /// empty filter set hits the endpoint with no query string at all.
  #[instrument(skip(self), level = "debug")]
  pub async fn find_users(&self, search: &UserSearch) -> Result<Vec<User>> {
    let query_string = search.to_query_string();
    let url = if query_string.is_empty() {
      self.api_url("/user/search")
    } else {
      self.api_url(&format!("/user/search?{query_string}"))
    };

    let response = self.request(Method::GET, &url).send().await?;
    decode_json(response).await
  }

  /// Search for users with an arbitrary set of query parameters
  #[instrument(skip(self), level = "debug")]
  pub async fn find_users_with_params(&self, params: &[(&str, &str)]) -> Result<Vec<User>> {
    let url = self.api_url("/user/search");

    let response = self.request(Method::GET, &url).query(params).send().await?;
    decode_json(response).await
  }
}
