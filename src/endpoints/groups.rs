//! # Jira Group Endpoints
//!
//! Jira API endpoint implementations for group membership management and the
//! picker search used by group autocomplete UIs.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use crate::client::{JiraClient, decode_json, expect_no_content, query_escape};
use crate::consts::FORCE_ACCOUNT_ID_HEADER;
use crate::error::Result;
use crate::models::{Group, GroupList, GroupMember, GroupMembersPage, GroupSearchOptions, NoContent};

/// Request payload for adding a user to a group.
#[derive(Debug, Serialize)]
struct AddGroupUserRequest<'a> {
  name: &'a str,
  #[serde(rename = "accountId", skip_serializing_if = "Option::is_none")]
  account_id: Option<&'a str>,
}

impl JiraClient {
  /// Get the members of a group.
  ///
  /// Requires sysadmin or admin permissions on the Jira instance.
  ///
  /// WARNING: only the first page of members is fetched; use
  /// [`get_group_members_with_options`](Self::get_group_members_with_options)
  /// to move the window.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_group_members(&self, name: &str) -> Result<Vec<GroupMember>> {
    self.get_group_members_with_options(name, None).await
  }

  /// Get the members of a group with explicit pagination filters.
  ///
  /// With `None`, no pagination parameters are sent at all. With `Some`,
  /// all three filters are always sent, even at their zero values. Either
  /// way a single page is fetched; the response's pagination metadata is
  /// decoded and discarded.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_group_members_with_options(
    &self,
    name: &str,
    options: Option<&GroupSearchOptions>,
  ) -> Result<Vec<GroupMember>> {
    let url = match options {
      None => self.api_url(&format!("/group/member?groupname={}", query_escape(name))),
      Some(options) => self.api_url(&format!(
        "/group/member?groupname={}&startAt={}&maxResults={}&includeInactiveUsers={}",
        query_escape(name),
        options.start_at,
        options.max_results,
        options.include_inactive_users,
      )),
    };

    let response = self.request(Method::GET, &url).send().await?;
    let page: GroupMembersPage = decode_json(response).await?;
    Ok(page.values)
  }

  /// Add a user to a group by username
  #[instrument(skip(self), level = "debug")]
  pub async fn add_user_to_group(&self, groupname: &str, username: &str) -> Result<Group> {
    self
      .add_group_user(groupname, AddGroupUserRequest {
        name: username,
        account_id: None,
      })
      .await
  }

  /// Add a user to a group by username and account id.
  ///
  /// Sends the `force-account-id: true` header so the server honors the
  /// account id over the username.
  #[instrument(skip(self), level = "debug")]
  pub async fn add_user_to_group_by_account_id(
    &self,
    groupname: &str,
    username: &str,
    account_id: &str,
  ) -> Result<Group> {
    self
      .add_group_user(groupname, AddGroupUserRequest {
        name: username,
        account_id: Some(account_id),
      })
      .await
  }

  async fn add_group_user(&self, groupname: &str, user: AddGroupUserRequest<'_>) -> Result<Group> {
    let url = self.api_url(&format!("/group/user?groupname={}", query_escape(groupname)));

    let mut request = self.request(Method::POST, &url).json(&user);
    if user.account_id.is_some() {
      request = request.header(FORCE_ACCOUNT_ID_HEADER, "true");
    }

    let response = request.send().await?;
    decode_json(response).await
  }

  /// Remove a user from a group.
  ///
  /// Jira answers `204 No Content` on success.
  #[instrument(skip(self), level = "debug")]
  pub async fn remove_user_from_group(&self, groupname: &str, username: &str) -> Result<NoContent> {
    let url = self.api_url(&format!(
      "/group/user?groupname={}&username={}",
      query_escape(groupname),
      query_escape(username),
    ));

    let response = self.request(Method::DELETE, &url).send().await?;
    expect_no_content(response).await
  }

  /// List groups via the picker search
  #[instrument(skip(self), level = "debug")]
  pub async fn get_group_list(&self) -> Result<GroupList> {
    self.get_group_list_with_params(&[]).await
  }

  /// List groups via the picker search with query parameters such as
  /// `query` and `maxResults`
  #[instrument(skip(self), level = "debug")]
  pub async fn get_group_list_with_params(&self, params: &[(&str, &str)]) -> Result<GroupList> {
    let url = self.api_url("/groups/picker");

    let response = self.request(Method::GET, &url).query(params).send().await?;
    decode_json(response).await
  }
}
