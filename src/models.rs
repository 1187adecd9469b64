use serde::{Deserialize, Serialize};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// Represents a Jira user.
///
/// Optional fields are omitted from outgoing JSON when unset, matching what
/// the server expects on create requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_link: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  /// Write-only credential: sent on create requests, never returned by the
  /// API and never deserialized from a response.
  #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(rename = "emailAddress", skip_serializing_if = "Option::is_none")]
  pub email_address: Option<String>,
  #[serde(rename = "avatarUrls", skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<AvatarUrls>,
  #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(skip_serializing_if = "is_false")]
  pub active: bool,
  #[serde(skip_serializing_if = "is_false")]
  pub notification: bool,
  #[serde(rename = "timeZone", skip_serializing_if = "Option::is_none")]
  pub time_zone: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub groups: Option<UserGroups>,
  #[serde(rename = "applicationKeys", skip_serializing_if = "Option::is_none")]
  pub application_keys: Option<Vec<String>>,
}

/// Represents the avatar URL set attached to users and group members
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarUrls {
  #[serde(rename = "48x48", skip_serializing_if = "Option::is_none")]
  pub size_48: Option<String>,
  #[serde(rename = "32x32", skip_serializing_if = "Option::is_none")]
  pub size_32: Option<String>,
  #[serde(rename = "24x24", skip_serializing_if = "Option::is_none")]
  pub size_24: Option<String>,
  #[serde(rename = "16x16", skip_serializing_if = "Option::is_none")]
  pub size_16: Option<String>,
}

/// A named group reference as it appears in user group listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroup {
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_link: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

/// A sized collection of group references, nested inside [`User`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroups {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub size: Option<u32>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub items: Vec<UserGroup>,
}

/// Represents a Jira group
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Group {
  pub id: String,
  pub title: String,
  #[serde(rename = "type")]
  pub group_type: String,
  pub properties: GroupProperties,
  #[serde(rename = "additionalProperties")]
  pub additional_properties: bool,
}

/// Property descriptor nested inside [`Group`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupProperties {
  pub name: GroupPropertiesName,
}

/// Type tag nested inside [`GroupProperties`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupPropertiesName {
  #[serde(rename = "type")]
  pub name_type: String,
}

/// A single member of a group, a narrower projection of [`User`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupMember {
  #[serde(rename = "self")]
  pub self_link: Option<String>,
  pub name: Option<String>,
  pub key: Option<String>,
  #[serde(rename = "emailAddress")]
  pub email_address: Option<String>,
  #[serde(rename = "displayName")]
  pub display_name: Option<String>,
  pub active: bool,
  #[serde(rename = "timeZone")]
  pub time_zone: Option<String>,
}

/// Paginated envelope around group member listings. Only the member
/// sequence is surfaced to callers; the pagination metadata stays internal.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GroupMembersPage {
  #[allow(dead_code)]
  #[serde(rename = "startAt")]
  pub(crate) start_at: i64,
  #[allow(dead_code)]
  #[serde(rename = "maxResults")]
  pub(crate) max_results: i32,
  #[allow(dead_code)]
  pub(crate) total: i32,
  pub(crate) values: Vec<GroupMember>,
}

/// Optional pagination filters for group member listings.
///
/// When supplied, all three fields are sent to the server, even at their
/// zero values.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupSearchOptions {
  pub start_at: i64,
  pub max_results: i32,
  pub include_inactive_users: bool,
}

/// Highlight label attached to a group picker entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupLabel {
  pub text: String,
  pub title: String,
  #[serde(rename = "type")]
  pub label_type: String,
}

/// A single group summary returned by the picker search
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupDetails {
  pub name: String,
  pub html: String,
  pub labels: Vec<GroupLabel>,
}

/// Result envelope of the group picker search, used for autocomplete UIs
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupList {
  pub header: String,
  pub total: i32,
  pub groups: Vec<GroupDetails>,
}

/// Named success value for calls that answer `204 No Content`.
///
/// Delete-style endpoints return no payload; this makes the "nothing came
/// back and that is correct" outcome explicit instead of an empty tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoContent;

fn is_false(value: &bool) -> bool {
  !*value
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_user_deserialization() {
    let json = json!({
        "self": "https://jira.example.com/rest/api/2/user?username=fred",
        "name": "fred",
        "key": "fred",
        "emailAddress": "fred@example.com",
        "displayName": "Fred Flintstone",
        "active": true,
        "timeZone": "Australia/Sydney",
        "avatarUrls": {
            "48x48": "https://jira.example.com/secure/useravatar?size=large&ownerId=fred",
            "16x16": "https://jira.example.com/secure/useravatar?size=xsmall&ownerId=fred"
        },
        "groups": {
            "size": 2,
            "items": [
                {"name": "jira-users"},
                {"name": "jira-administrators"}
            ]
        }
    });

    let user: User = serde_json::from_value(json).unwrap();

    assert_eq!(user.name.as_deref(), Some("fred"));
    assert_eq!(user.email_address.as_deref(), Some("fred@example.com"));
    assert_eq!(user.display_name.as_deref(), Some("Fred Flintstone"));
    assert!(user.active);
    assert_eq!(user.time_zone.as_deref(), Some("Australia/Sydney"));

    let avatars = user.avatar_urls.unwrap();
    assert!(avatars.size_48.is_some());
    assert!(avatars.size_32.is_none());

    let groups = user.groups.unwrap();
    assert_eq!(groups.size, Some(2));
    assert_eq!(groups.items[1].name.as_deref(), Some("jira-administrators"));
  }

  #[test]
  fn test_user_serialization_omits_unset_fields() {
    let user = User {
      name: Some("wilma".to_string()),
      ..User::default()
    };

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json, json!({"name": "wilma"}));
  }

  #[test]
  fn test_user_password_is_write_only() {
    let user = User {
      name: Some("barney".to_string()),
      password: Some("s3cret".to_string()),
      email_address: Some("barney@example.com".to_string()),
      ..User::default()
    };

    // Outgoing create payloads carry the credential...
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["password"], "s3cret");

    // ...but it is never read back from a response, even if present.
    let round_tripped: User = serde_json::from_value(json).unwrap();
    assert_eq!(round_tripped.password, None);
    assert_eq!(round_tripped.name.as_deref(), Some("barney"));
  }

  #[test]
  fn test_group_deserialization() {
    let json = json!({
        "id": "jira-users",
        "title": "jira-users",
        "type": "group",
        "properties": {
            "name": {
                "type": "string"
            }
        },
        "additionalProperties": true
    });

    let group: Group = serde_json::from_value(json).unwrap();
    assert_eq!(group.id, "jira-users");
    assert_eq!(group.group_type, "group");
    assert_eq!(group.properties.name.name_type, "string");
    assert!(group.additional_properties);
  }

  #[test]
  fn test_group_members_page_deserialization() {
    let json = json!({
        "startAt": 0,
        "maxResults": 50,
        "total": 2,
        "values": [
            {"name": "fred", "active": true},
            {"name": "wilma", "active": false, "timeZone": "Europe/Berlin"}
        ]
    });

    let page: GroupMembersPage = serde_json::from_value(json).unwrap();
    assert_eq!(page.start_at, 0);
    assert_eq!(page.max_results, 50);
    assert_eq!(page.total, 2);
    assert_eq!(page.values.len(), 2);
    assert_eq!(page.values[1].time_zone.as_deref(), Some("Europe/Berlin"));
    assert!(!page.values[1].active);
  }

  #[test]
  fn test_group_list_deserialization() {
    let json = json!({
        "header": "Showing 2 of 2 matching groups",
        "total": 2,
        "groups": [
            {
                "name": "jira-administrators",
                "html": "<b>jira</b>-administrators",
                "labels": [
                    {"text": "admin", "title": "Admin", "type": "ADMIN"}
                ]
            },
            {
                "name": "jira-users",
                "html": "<b>jira</b>-users",
                "labels": []
            }
        ]
    });

    let list: GroupList = serde_json::from_value(json).unwrap();
    assert_eq!(list.total, 2);
    assert_eq!(list.groups.len(), 2);
    assert_eq!(list.groups[0].labels[0].label_type, "ADMIN");
    assert_eq!(list.groups[1].name, "jira-users");
  }
}
